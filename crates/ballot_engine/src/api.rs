use ballot_logging::{ballot_debug, ballot_error, ballot_warn};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::types::{DataEnvelope, ErrorBody};
use crate::{ApiError, ApiSettings, CountryRecord, RankingRecord, VoteRequest};

/// The vote service as seen by the client. The engine only talks to this
/// trait, so tests can put a scripted fake behind it.
#[async_trait::async_trait]
pub trait VoteApi: Send + Sync {
    async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError>;

    async fn top_rankings(&self) -> Result<Vec<RankingRecord>, ApiError>;

    /// `text` is sent as typed; no trimming.
    async fn search_rankings(&self, text: &str) -> Result<Vec<RankingRecord>, ApiError>;

    async fn submit_vote(&self, vote: &VoteRequest) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestVoteApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestVoteApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, ApiError> {
        ballot_debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response).await?;
        let envelope: DataEnvelope<T> = response.json().await.map_err(|err| {
            let err = map_reqwest_error(err);
            ballot_error!("Unreadable list body from {}: {}", url, err);
            err
        })?;
        Ok(envelope.data)
    }
}

#[async_trait::async_trait]
impl VoteApi for ReqwestVoteApi {
    async fn countries(&self) -> Result<Vec<CountryRecord>, ApiError> {
        self.get_list(self.settings.endpoint("countries")?).await
    }

    async fn top_rankings(&self) -> Result<Vec<RankingRecord>, ApiError> {
        self.get_list(self.settings.endpoint("votes/top")?).await
    }

    async fn search_rankings(&self, text: &str) -> Result<Vec<RankingRecord>, ApiError> {
        let mut url = self.settings.endpoint("votes/search")?;
        url.query_pairs_mut().append_pair("q", text);
        self.get_list(url).await
    }

    async fn submit_vote(&self, vote: &VoteRequest) -> Result<(), ApiError> {
        let url = self.settings.endpoint("votes")?;
        ballot_debug!("POST {} country={}", url, vote.country);
        let response = self
            .client
            .post(url)
            .json(vote)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        // Any acknowledgement body is ignored.
        ensure_success(response).await.map(drop)
    }
}

/// Turns a non-2xx response into `ApiError::Rejected`, pulling the server's
/// message out of the body when it has one.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(err) => {
            ballot_debug!("Could not read body of {} response: {}", status, err);
            Default::default()
        }
    };
    let message = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.message)
        .and_then(|message| message.into_text());
    ballot_warn!(
        "Request rejected with {} ({})",
        status,
        message.as_deref().unwrap_or("no message")
    );
    Err(rejected(status, message))
}

fn rejected(status: StatusCode, message: Option<String>) -> ApiError {
    ApiError::Rejected {
        status: status.as_u16(),
        message,
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Network(err.to_string())
}
