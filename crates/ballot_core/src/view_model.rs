use crate::{RankingEntry, SubmissionPhase};

/// The ranking table shows at most this many rows.
pub const TOP_RANKING_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub form: FormView,
    pub countries: Vec<CountryOption>,
    pub countries_loading: bool,
    pub countries_error: Option<String>,
    pub rankings: RankingsView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub name: String,
    pub email: String,
    pub country: String,
    pub phase: SubmissionPhase,
    /// `(field key, message)` pairs.
    pub field_errors: Vec<(&'static str, String)>,
    pub error_message: Option<String>,
    pub success_visible: bool,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankingsView {
    pub rows: Vec<RankingEntry>,
    pub search_text: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub no_results: bool,
}
