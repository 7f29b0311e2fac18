use std::sync::Arc;

use ballot_core::{
    Country, CountrySubmission, Effect, Msg, RankingEntry, RankingQuery, RequestFailure,
};
use ballot_engine::{
    ApiError, CountryRecord, EngineEvent, EngineHandle, RankingRecord, RankingRequest, TimerSlot,
    VoteApi, VoteRequest,
};
use ballot_logging::{ballot_debug, ballot_info};

/// Executes core effects on the engine and translates engine events back
/// into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn VoteApi>) -> Self {
        Self {
            engine: EngineHandle::new(api),
        }
    }

    /// Must be called inside a tokio runtime.
    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCountries => self.engine.fetch_countries(),
                Effect::FetchRankings { seq, query } => {
                    self.engine.fetch_rankings(seq, map_query(query));
                }
                Effect::SubmitVote {
                    attempt,
                    submission,
                } => {
                    ballot_info!(
                        "SubmitVote attempt={} country={}",
                        attempt,
                        submission.country_code
                    );
                    self.engine.submit_vote(attempt, map_submission(submission));
                }
                Effect::ScheduleSearchDebounce { token, delay } => {
                    self.engine.schedule(TimerSlot::SearchDebounce, token, delay);
                }
                Effect::ScheduleSuccessDismiss { attempt, delay } => {
                    self.engine
                        .schedule(TimerSlot::SuccessDismiss, attempt, delay);
                }
            }
        }
    }

    pub async fn next_msg(&mut self) -> Option<Msg> {
        self.engine.next_event().await.map(map_event)
    }

    pub fn try_next_msg(&mut self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    pub fn shutdown(&mut self) {
        ballot_debug!("Cancelling pending timers");
        self.engine.cancel_timers();
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CountriesFetched(result) => Msg::CountriesLoaded(
            result
                .map(|records| records.into_iter().map(map_country).collect())
                .map_err(map_api_error),
        ),
        EngineEvent::RankingsFetched {
            seq,
            request,
            result,
        } => Msg::RankingsLoaded {
            seq,
            query: match request {
                RankingRequest::Top => RankingQuery::Top,
                RankingRequest::Search(text) => RankingQuery::Search(text),
            },
            result: result
                .map(|records| records.into_iter().map(map_ranking).collect())
                .map_err(map_api_error),
        },
        EngineEvent::VoteSubmitted { attempt, result } => Msg::VoteSubmitted {
            attempt,
            result: result.map_err(map_api_error),
        },
        EngineEvent::TimerElapsed {
            slot: TimerSlot::SearchDebounce,
            token,
        } => Msg::SearchDebounceElapsed { token },
        EngineEvent::TimerElapsed {
            slot: TimerSlot::SuccessDismiss,
            token,
        } => Msg::SuccessDismissElapsed { attempt: token },
    }
}

/// Sorts engine errors into the client's failure taxonomy.
pub fn map_api_error(err: ApiError) -> RequestFailure {
    match err {
        ApiError::Timeout | ApiError::Network(_) => RequestFailure::Transport,
        ApiError::Rejected {
            message: Some(message),
            ..
        } => RequestFailure::Rejected { message },
        other @ (ApiError::Rejected { message: None, .. }
        | ApiError::Decode(_)
        | ApiError::InvalidUrl(_)) => RequestFailure::Unknown {
            detail: Some(other.to_string()),
        },
    }
}

fn map_query(query: RankingQuery) -> RankingRequest {
    match query {
        RankingQuery::Top => RankingRequest::Top,
        RankingQuery::Search(text) => RankingRequest::Search(text),
    }
}

fn map_submission(submission: CountrySubmission) -> VoteRequest {
    VoteRequest {
        name: submission.name,
        email: submission.email,
        country: submission.country_code,
    }
}

fn map_country(record: CountryRecord) -> Country {
    Country {
        name: record.name,
        code: record.code,
    }
}

fn map_ranking(record: RankingRecord) -> RankingEntry {
    RankingEntry {
        country_name: record.country,
        capital: record.capital,
        region: record.region,
        sub_region: record.sub_region,
        vote_count: record.votes,
        rank: record.rank,
    }
}
