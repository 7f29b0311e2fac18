//! Ballot host: runs the core state machine against the engine.
pub mod config;
mod effects;
pub mod logging;
mod session;

pub use config::{AppConfig, API_TIMEOUT_ENV, API_URL_ENV};
pub use effects::{map_api_error, EffectRunner};
pub use session::Session;
