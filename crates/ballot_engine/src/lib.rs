//! Ballot engine: HTTP access to the vote service, timers, and effect execution.
mod api;
mod engine;
mod settings;
mod timer;
mod types;

pub use api::{ReqwestVoteApi, VoteApi};
pub use engine::EngineHandle;
pub use settings::{ApiSettings, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
pub use timer::{TimerSlot, Timers};
pub use types::{
    ApiError, AttemptId, CountryRecord, EngineEvent, RankingRecord, RankingRequest, RequestSeq,
    VoteRequest,
};
