use std::sync::Arc;
use std::time::Duration;

use ballot_core::{update, AppState, AppViewModel, Msg};
use ballot_engine::{ApiError, ReqwestVoteApi, VoteApi};
use ballot_logging::ballot_info;

use crate::{AppConfig, EffectRunner};

/// One mounted client: the state machine plus the engine that serves its
/// effects. All messages, from the UI and from the engine, go through
/// [`Session::dispatch`] on the caller's task.
pub struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    /// Connects to the configured vote service. Must be called inside a tokio
    /// runtime.
    pub fn connect(config: &AppConfig) -> Result<Self, ApiError> {
        ballot_info!("Using vote service at {}", config.api.base_url);
        let api = ReqwestVoteApi::new(config.api.clone())?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn VoteApi>) -> Self {
        Self {
            state: AppState::new(),
            runner: EffectRunner::new(api),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Returns the view only if something changed since the last call.
    pub fn take_view_if_dirty(&mut self) -> Option<AppViewModel> {
        let view = self.state.view();
        self.state.consume_dirty().then_some(view)
    }

    pub fn mount(&mut self) {
        self.dispatch(Msg::Mounted);
    }

    /// Stops pending timers. Requests already in flight still complete.
    pub fn unmount(&mut self) {
        self.runner.shutdown();
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Waits for one engine completion and applies it.
    pub async fn step(&mut self) -> bool {
        match self.runner.next_msg().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Applies completions until neither the catalog nor the rankings are
    /// loading. Every request is bounded by the client timeout, so this ends.
    pub async fn run_until_loaded(&mut self) {
        while self.is_loading() {
            if !self.step().await {
                break;
            }
        }
    }

    fn is_loading(&self) -> bool {
        let view = self.state.view();
        view.countries_loading || view.rankings.is_loading
    }

    /// Applies completions that are already available without waiting.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Some(msg) = self.runner.try_next_msg() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    /// Applies engine completions as they arrive for `window`.
    pub async fn run_for(&mut self, window: Duration) {
        let deadline = tokio::time::Instant::now() + window;
        loop {
            tokio::select! {
                msg = self.runner.next_msg() => match msg {
                    Some(msg) => self.dispatch(msg),
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }
    }
}
