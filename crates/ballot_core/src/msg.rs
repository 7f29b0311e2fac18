use crate::{
    AttemptId, Country, Field, RankingEntry, RankingQuery, RequestFailure, RequestSeq, TimerToken,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view was attached: load the catalog and the top rankings.
    Mounted,
    /// Country catalog request finished.
    CountriesLoaded(Result<Vec<Country>, RequestFailure>),
    /// User edited a form field.
    FieldEdited { field: Field, value: String },
    /// User pressed the submit button.
    SubmitClicked,
    /// Vote request for `attempt` finished.
    VoteSubmitted {
        attempt: AttemptId,
        result: Result<(), RequestFailure>,
    },
    /// The success banner timer for `attempt` fired.
    SuccessDismissElapsed { attempt: AttemptId },
    /// User edited the search box (raw keystroke text).
    SearchTextChanged(String),
    /// The search quiet period for `token` elapsed.
    SearchDebounceElapsed { token: TimerToken },
    /// Ranking request `seq` finished.
    RankingsLoaded {
        seq: RequestSeq,
        query: RankingQuery,
        result: Result<Vec<RankingEntry>, RequestFailure>,
    },
    /// Something outside the form changed the leaderboard.
    RefreshRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
