use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TimerSlot;

pub type RequestSeq = u64;
pub type AttemptId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub code: String,
}

/// One row of `/votes/top` or `/votes/search`, field names as on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRecord {
    pub country: String,
    pub capital: String,
    pub region: String,
    pub sub_region: String,
    pub votes: u64,
    pub rank: u32,
}

/// Body of `POST /votes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub name: String,
    pub email: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingRequest {
    Top,
    Search(String),
}

/// `{ data: [...] }` envelope used by every list endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Vec<T>,
}

/// Error body sent by the service. Validation failures carry a list of messages.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub(crate) fn into_text(self) -> Option<String> {
        let text = match self {
            ErrorMessage::One(text) => text,
            ErrorMessage::Many(parts) => parts.join(", "),
        };
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("{}", rejection_text(.status, .message))]
    Rejected { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

fn rejection_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("http status {status}: {message}"),
        None => format!("http status {status}"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CountriesFetched(Result<Vec<CountryRecord>, ApiError>),
    RankingsFetched {
        seq: RequestSeq,
        request: RankingRequest,
        result: Result<Vec<RankingRecord>, ApiError>,
    },
    VoteSubmitted {
        attempt: AttemptId,
        result: Result<(), ApiError>,
    },
    TimerElapsed { slot: TimerSlot, token: u64 },
}
