use std::collections::HashMap;
use std::time::Duration;

use ballot_logging::ballot_trace;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::EngineEvent;

/// Named timer slots. Each slot holds at most one pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    SearchDebounce,
    SuccessDismiss,
}

/// Cancellable one-shot timers keyed by slot. Scheduling into a slot cancels
/// whatever was pending there.
#[derive(Debug)]
pub struct Timers {
    root: CancellationToken,
    pending: HashMap<TimerSlot, CancellationToken>,
    event_tx: UnboundedSender<EngineEvent>,
}

impl Timers {
    pub fn new(event_tx: UnboundedSender<EngineEvent>) -> Self {
        Self {
            root: CancellationToken::new(),
            pending: HashMap::new(),
            event_tx,
        }
    }

    /// Must be called inside a tokio runtime.
    pub fn schedule(&mut self, slot: TimerSlot, token: u64, delay: Duration) {
        let cancel = self.root.child_token();
        if let Some(previous) = self.pending.insert(slot, cancel.clone()) {
            previous.cancel();
        }

        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    ballot_trace!("Timer {:?}/{} cancelled", slot, token);
                }
                _ = tokio::time::sleep(delay) => {
                    let _ = event_tx.send(EngineEvent::TimerElapsed { slot, token });
                }
            }
        });
    }

    pub fn cancel(&mut self, slot: TimerSlot) {
        if let Some(pending) = self.pending.remove(&slot) {
            pending.cancel();
        }
    }

    pub fn cancel_all(&mut self) {
        self.root.cancel();
        self.pending.clear();
        self.root = CancellationToken::new();
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
