use crate::submission::{Settled, SubmissionEvent};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            state.begin_countries_load();
            let fetch_top = state.rankings_mut().mount();
            state.mark_dirty();
            vec![Effect::FetchCountries, fetch_top]
        }
        Msg::CountriesLoaded(result) => {
            state.apply_countries(result);
            state.mark_dirty();
            Vec::new()
        }
        Msg::FieldEdited { field, value } => {
            state.form_mut().edit(field, value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => {
            let (form, catalog) = state.form_and_catalog();
            match form.submit(catalog) {
                Some(effects) => {
                    state.mark_dirty();
                    effects
                }
                None => Vec::new(),
            }
        }
        Msg::VoteSubmitted { attempt, result } => match state.form_mut().finish(attempt, result) {
            Settled::Accepted { event, effects } => {
                state.mark_dirty();
                // The refresh goes out before the banner timer is armed.
                let mut routed = route_submission_event(&mut state, event);
                routed.extend(effects);
                routed
            }
            Settled::Failed => {
                state.mark_dirty();
                Vec::new()
            }
            Settled::Ignored => Vec::new(),
        },
        Msg::SuccessDismissElapsed { attempt } => {
            if state.form_mut().dismiss_success(attempt) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchTextChanged(text) => {
            let schedule = state.rankings_mut().search_text_changed(text);
            state.mark_dirty();
            vec![schedule]
        }
        Msg::SearchDebounceElapsed { token } => match state.rankings_mut().debounce_elapsed(token) {
            Some(fetch) => {
                state.mark_dirty();
                vec![fetch]
            }
            None => Vec::new(),
        },
        Msg::RankingsLoaded { seq, query, result } => {
            if state.rankings_mut().complete(seq, &query, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RefreshRequested => {
            let fetch_top = state.rankings_mut().refresh();
            state.mark_dirty();
            vec![fetch_top]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// The only coupling between the two controllers: a vote that went through
/// invalidates the leaderboard.
fn route_submission_event(state: &mut AppState, event: SubmissionEvent) -> Vec<Effect> {
    match event {
        SubmissionEvent::VoteAccepted => vec![state.rankings_mut().refresh()],
    }
}
