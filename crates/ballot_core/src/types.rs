use std::fmt;

/// Sequence number tagged onto every ranking request.
pub type RequestSeq = u64;
/// Token identifying one scheduled timer firing.
pub type TimerToken = u64;
/// Counter of submit attempts made by a form instance.
pub type AttemptId = u64;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Unable to reach the server. Please try again.";
pub const UNKNOWN_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    pub code: String,
}

/// One row of the ranking table. Order is decided by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub country_name: String,
    pub capital: String,
    pub region: String,
    pub sub_region: String,
    pub vote_count: u64,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingQuery {
    Top,
    /// Search text, passed through verbatim.
    Search(String),
}

impl RankingQuery {
    pub fn failure_message(&self) -> &'static str {
        match self {
            RankingQuery::Top => "Failed to load rankings",
            RankingQuery::Search(_) => "Failed to search rankings",
        }
    }
}

/// Why a request to the vote service did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// No response: timeout or connectivity.
    Transport,
    /// The server answered with its own message.
    Rejected { message: String },
    /// Anything else. `detail` is the raw error text when there is one.
    Unknown { detail: Option<String> },
}

impl RequestFailure {
    pub fn display_message(&self) -> String {
        match self {
            RequestFailure::Transport => TRANSPORT_FAILURE_MESSAGE.to_string(),
            RequestFailure::Rejected { message } => message.clone(),
            RequestFailure::Unknown {
                detail: Some(detail),
            } if !detail.trim().is_empty() => detail.clone(),
            RequestFailure::Unknown { .. } => UNKNOWN_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_message())
    }
}
