//! Ballot core: pure state machine for the vote form and the ranking table.
mod effect;
mod msg;
mod ranking;
mod state;
mod submission;
mod types;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use ranking::{QueryState, SEARCH_DEBOUNCE};
pub use state::{AppState, COUNTRIES_FAILURE_MESSAGE};
pub use submission::{SubmissionEvent, SubmissionForm, SubmissionPhase, SUCCESS_BANNER_TTL};
pub use types::{
    AttemptId, Country, RankingEntry, RankingQuery, RequestFailure, RequestSeq, TimerToken,
    TRANSPORT_FAILURE_MESSAGE, UNKNOWN_FAILURE_MESSAGE,
};
pub use update::update;
pub use validate::{
    validate, CountrySubmission, Field, FieldError, RawSubmission, ValidationErrors,
    NAME_MAX_CHARS, NAME_MIN_CHARS,
};
pub use view_model::{AppViewModel, CountryOption, FormView, RankingsView, TOP_RANKING_LIMIT};
