use crate::ranking::QueryState;
use crate::submission::SubmissionForm;
use crate::view_model::{AppViewModel, CountryOption, FormView, RankingsView, TOP_RANKING_LIMIT};
use crate::{Country, RequestFailure};

pub const COUNTRIES_FAILURE_MESSAGE: &str = "Failed to load countries";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: SubmissionForm,
    rankings: QueryState,
    countries: Vec<Country>,
    countries_loading: bool,
    countries_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn rankings(&self) -> &QueryState {
        &self.rankings
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn view(&self) -> AppViewModel {
        let fields = self.form.fields();
        AppViewModel {
            form: FormView {
                name: fields.name.clone(),
                email: fields.email.clone(),
                country: fields.country.clone(),
                phase: self.form.phase(),
                field_errors: self.form.errors().messages(),
                error_message: self.form.error_message().map(ToOwned::to_owned),
                success_visible: self.form.success_visible(),
                submit_enabled: !self.form.is_submitting(),
            },
            countries: self
                .countries
                .iter()
                .map(|country| CountryOption {
                    code: country.code.clone(),
                    label: country.name.clone(),
                })
                .collect(),
            countries_loading: self.countries_loading,
            countries_error: self.countries_error.clone(),
            rankings: RankingsView {
                rows: self
                    .rankings
                    .entries()
                    .iter()
                    .take(TOP_RANKING_LIMIT)
                    .cloned()
                    .collect(),
                search_text: self.rankings.search_text().to_string(),
                is_loading: self.rankings.is_loading(),
                error_message: self.rankings.error_message().map(ToOwned::to_owned),
                no_results: self.rankings.has_no_results(),
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn form_mut(&mut self) -> &mut SubmissionForm {
        &mut self.form
    }

    pub(crate) fn rankings_mut(&mut self) -> &mut QueryState {
        &mut self.rankings
    }

    /// Splits the borrow so the form can validate against the catalog.
    pub(crate) fn form_and_catalog(&mut self) -> (&mut SubmissionForm, &[Country]) {
        (&mut self.form, &self.countries)
    }

    pub(crate) fn begin_countries_load(&mut self) {
        self.countries_loading = true;
        self.countries_error = None;
    }

    pub(crate) fn apply_countries(&mut self, result: Result<Vec<Country>, RequestFailure>) {
        self.countries_loading = false;
        match result {
            Ok(countries) => {
                self.countries = countries;
                self.countries_error = None;
            }
            Err(_) => {
                self.countries_error = Some(COUNTRIES_FAILURE_MESSAGE.to_string());
            }
        }
    }
}
