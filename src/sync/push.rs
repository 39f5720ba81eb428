//! Debounced status publishing.
//!
//! Local changes mark the scheduler pending; a pending push goes out at
//! most once per push interval.  The store meters writes, so a burst of
//! changes (the temperature climbing once a second) collapses into a
//! single write per window.

use log::{info, warn};

use crate::app::ports::{RemoteStore, StoreError};
use crate::config::NodeName;

use super::document::StatusDocument;
use super::shadow::ChangeFlags;
use super::time::{ElapsedTimer, Millis};
use super::{Observation, SkipReason};

/// What [`PushScheduler::maybe_push`] did this tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PushOutcome {
    /// Nothing pending.
    Idle,
    /// Pending, but the interval has not elapsed.
    Waiting,
    /// Pending and due, but the guard refused.  Stays pending.
    Skipped(SkipReason),
    /// Written to the store.
    Pushed,
    /// The store reported an error.  Not retried before the next window.
    Failed(StoreError),
}

pub struct PushScheduler {
    timer: ElapsedTimer,
    pending: bool,
    interval_ms: Millis,
    node: NodeName,
}

impl PushScheduler {
    /// `node` is the document name under the device path (e.g. `status`).
    pub fn new(interval_ms: Millis, node: NodeName) -> Self {
        Self {
            timer: ElapsedTimer::default(),
            pending: false,
            interval_ms,
            node,
        }
    }

    /// Whether a change is waiting to be published.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Counter reading of the last push attempt.
    pub fn last_push_ms(&self) -> Millis {
        self.timer.last()
    }

    /// Publish the observed state if something changed and the window allows.
    pub fn maybe_push(
        &mut self,
        flags: &ChangeFlags,
        now: Millis,
        obs: &Observation,
        store: &mut impl RemoteStore,
    ) -> PushOutcome {
        // Rebase on wraparound every tick, pending or not.
        let elapsed = self.timer.elapsed(now);

        if flags.any() {
            self.pending = true;
        }
        if !self.pending {
            return PushOutcome::Idle;
        }
        if elapsed <= self.interval_ms {
            return PushOutcome::Waiting;
        }

        let path = match obs.remote_path(&self.node) {
            Ok(p) => p,
            Err(reason) => return PushOutcome::Skipped(reason),
        };

        let doc = StatusDocument::new(&obs.device, &obs.scale, now).to_value();
        info!("Push: {} at {}ms", path, now);
        let result = store.set(&path, &doc);

        // The window restarts whatever the outcome, so a failing store is
        // not hammered faster than the interval.
        self.pending = false;
        self.timer.mark(now);

        match result {
            Ok(()) => PushOutcome::Pushed,
            Err(e) => {
                warn!("Push to {} failed: {}", path, e);
                PushOutcome::Failed(e)
            }
        }
    }
}
