use std::time::Duration;

use crate::{AttemptId, CountrySubmission, RankingQuery, RequestSeq, TimerToken};

/// Work the host must perform on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCountries,
    FetchRankings { seq: RequestSeq, query: RankingQuery },
    SubmitVote {
        attempt: AttemptId,
        submission: CountrySubmission,
    },
    /// Replaces any pending debounce timer.
    ScheduleSearchDebounce { token: TimerToken, delay: Duration },
    /// Replaces any pending banner dismissal.
    ScheduleSuccessDismiss { attempt: AttemptId, delay: Duration },
}
