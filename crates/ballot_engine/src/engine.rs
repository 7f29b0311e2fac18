use std::sync::Arc;
use std::time::Duration;

use ballot_logging::ballot_debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    AttemptId, EngineEvent, RankingRequest, RequestSeq, TimerSlot, Timers, VoteApi, VoteRequest,
};

/// Runs requests and timers on the ambient tokio runtime and reports every
/// completion as an [`EngineEvent`].
///
/// Requests are never aborted once started; callers drop stale results.
pub struct EngineHandle {
    api: Arc<dyn VoteApi>,
    event_tx: UnboundedSender<EngineEvent>,
    event_rx: UnboundedReceiver<EngineEvent>,
    timers: Timers,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn VoteApi>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let timers = Timers::new(event_tx.clone());
        Self {
            api,
            event_tx,
            event_rx,
            timers,
        }
    }

    pub fn fetch_countries(&self) {
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.countries().await;
            let _ = event_tx.send(EngineEvent::CountriesFetched(result));
        });
    }

    pub fn fetch_rankings(&self, seq: RequestSeq, request: RankingRequest) {
        ballot_debug!("Issuing ranking request seq={} {:?}", seq, request);
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = match &request {
                RankingRequest::Top => api.top_rankings().await,
                RankingRequest::Search(text) => api.search_rankings(text).await,
            };
            let _ = event_tx.send(EngineEvent::RankingsFetched {
                seq,
                request,
                result,
            });
        });
    }

    pub fn submit_vote(&self, attempt: AttemptId, vote: VoteRequest) {
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.submit_vote(&vote).await;
            let _ = event_tx.send(EngineEvent::VoteSubmitted { attempt, result });
        });
    }

    pub fn schedule(&mut self, slot: TimerSlot, token: u64, delay: Duration) {
        self.timers.schedule(slot, token, delay);
    }

    /// Cancels pending timers. In-flight requests still report back.
    pub fn cancel_timers(&mut self) {
        self.timers.cancel_all();
    }

    /// Waits for the next completion. The handle owns a sender, so this never
    /// yields `None` while the handle is alive.
    pub async fn next_event(&mut self) -> Option<EngineEvent> {
        self.event_rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}
