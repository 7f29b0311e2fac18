//! Environment-driven configuration.
//!
//! Every value has a default; a missing or malformed variable is logged and
//! replaced by the default rather than aborting startup.

use std::env;
use std::time::Duration;

use ballot_engine::{ApiSettings, DEFAULT_BASE_URL};
use ballot_logging::{ballot_info, ballot_warn};

pub const API_URL_ENV: &str = "BALLOT_API_URL";
pub const API_TIMEOUT_ENV: &str = "BALLOT_API_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut api = match lookup(API_URL_ENV).filter(|value| !value.trim().is_empty()) {
            Some(raw) => ApiSettings::new(raw.trim()).unwrap_or_else(|err| {
                ballot_warn!("Invalid {API_URL_ENV} value {raw:?}: {err}; using {DEFAULT_BASE_URL}");
                ApiSettings::default()
            }),
            None => {
                ballot_info!("{API_URL_ENV} not set, using default: {DEFAULT_BASE_URL}");
                ApiSettings::default()
            }
        };

        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(millis) if millis > 0 => api.request_timeout = Duration::from_millis(millis),
                _ => ballot_warn!(
                    "Invalid {API_TIMEOUT_ENV} value {raw:?}, keeping {} ms",
                    api.request_timeout.as_millis()
                ),
            }
        }

        Self { api }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.api.request_timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_URL_ENV, " https://votes.example.test/api "),
            (API_TIMEOUT_ENV, "2500"),
        ]));
        assert_eq!(config.api.base_url.as_str(), "https://votes.example.test/api");
        assert_eq!(config.api.request_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_URL_ENV, "::not a url"),
            (API_TIMEOUT_ENV, "soon"),
        ]));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_lookup(lookup_from(&[(API_TIMEOUT_ENV, "0")]));
        assert_eq!(config.api.request_timeout, Duration::from_millis(10_000));
    }
}
