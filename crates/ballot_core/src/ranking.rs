//! Ranking query controller.
//!
//! Two request kinds share one result slot: "top" and "search". Each issued
//! request gets the next sequence number and only the latest one may commit.
//! Search input is debounced with tokens; only the newest token acts.

use std::time::Duration;

use ballot_logging::{ballot_debug, ballot_warn};

use crate::{Effect, RankingEntry, RankingQuery, RequestFailure, RequestSeq, TimerToken};

/// Quiet period after the last keystroke before a search is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    entries: Vec<RankingEntry>,
    is_loading: bool,
    error_message: Option<String>,
    search_text: String,
    refresh_epoch: u64,
    latest_seq: RequestSeq,
    debounce_token: TimerToken,
    /// Set once any request has committed successfully.
    loaded: bool,
}

impl QueryState {
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn refresh_epoch(&self) -> u64 {
        self.refresh_epoch
    }

    pub fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    /// The latest request succeeded and returned nothing.
    pub fn has_no_results(&self) -> bool {
        self.loaded && !self.is_loading && self.error_message.is_none() && self.entries.is_empty()
    }

    pub(crate) fn mount(&mut self) -> Effect {
        self.issue(RankingQuery::Top)
    }

    /// The leaderboard changed elsewhere. Always goes back to the top list,
    /// even while a search is active.
    pub(crate) fn refresh(&mut self) -> Effect {
        self.refresh_epoch += 1;
        ballot_debug!("Refresh epoch {}", self.refresh_epoch);
        self.issue(RankingQuery::Top)
    }

    pub(crate) fn search_text_changed(&mut self, text: String) -> Effect {
        self.search_text = text;
        self.debounce_token += 1;
        Effect::ScheduleSearchDebounce {
            token: self.debounce_token,
            delay: SEARCH_DEBOUNCE,
        }
    }

    pub(crate) fn debounce_elapsed(&mut self, token: TimerToken) -> Option<Effect> {
        if token != self.debounce_token {
            ballot_debug!(
                "Ignoring superseded debounce token {} (latest {})",
                token,
                self.debounce_token
            );
            return None;
        }
        let query = if self.search_text.trim().is_empty() {
            RankingQuery::Top
        } else {
            RankingQuery::Search(self.search_text.clone())
        };
        Some(self.issue(query))
    }

    /// Commits the result of request `seq` if it is still the latest one.
    /// Returns whether anything changed.
    pub(crate) fn complete(
        &mut self,
        seq: RequestSeq,
        query: &RankingQuery,
        result: Result<Vec<RankingEntry>, RequestFailure>,
    ) -> bool {
        if seq != self.latest_seq {
            ballot_debug!(
                "Discarding stale ranking result seq={} (latest {})",
                seq,
                self.latest_seq
            );
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error_message = None;
                self.loaded = true;
            }
            Err(failure) => {
                ballot_warn!("Ranking request seq={} {:?} failed: {:?}", seq, query, failure);
                self.error_message = Some(query.failure_message().to_string());
            }
        }
        true
    }

    fn issue(&mut self, query: RankingQuery) -> Effect {
        self.latest_seq += 1;
        self.is_loading = true;
        Effect::FetchRankings {
            seq: self.latest_seq,
            query,
        }
    }
}
