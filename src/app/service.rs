//! Sync service, the hexagonal core.
//!
//! [`SyncService`] owns the shadow tracker, the push scheduler and the
//! command poller.  It exposes a hardware-agnostic per-tick API.  All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!   AppliancePort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!      ScalePort ──▶  │       SyncService         │
//!                     │ Shadow · Push · Poll      │ ◀─▶ RemoteStore
//!   AppliancePort ◀── └──────────────────────────┘
//! ```

use log::info;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::sync::poll::{CommandPoller, PollOutcome};
use crate::sync::push::{PushOutcome, PushScheduler};
use crate::sync::shadow::{ChangeFlags, ShadowStateTracker};
use crate::sync::time::Millis;
use crate::sync::Observation;

use super::events::SyncEvent;
use super::ports::{AppliancePort, EventSink, NetworkState, RemoteStore, ScalePort};

// ───────────────────────────────────────────────────────────────
// Counters
// ───────────────────────────────────────────────────────────────

/// Running totals for diagnostics read-back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncStats {
    pub ticks: u64,
    /// Store writes attempted (successful or not).
    pub push_attempts: u32,
    pub push_failures: u32,
    /// Poll cycles that reached the store.
    pub polls: u32,
    pub commands_applied: u32,
    pub commands_dropped: u32,
}

// ───────────────────────────────────────────────────────────────
// SyncService
// ───────────────────────────────────────────────────────────────

/// The sync service orchestrates the whole engine.
pub struct SyncService {
    tracker: ShadowStateTracker,
    push: PushScheduler,
    poll: CommandPoller,
    stats: SyncStats,
}

impl SyncService {
    /// Construct the service from a validated configuration.
    pub fn new(config: &SyncConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tracker: ShadowStateTracker::new(),
            push: PushScheduler::new(config.push_interval_ms, config.status_node.clone()),
            poll: CommandPoller::new(config.poll_interval_ms, config.command_node.clone()),
            stats: SyncStats::default(),
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&SyncEvent::Started);
        info!("SyncService started");
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one cycle: observe → diff → maybe push → maybe poll.
    ///
    /// The `hw` parameter satisfies **both** [`AppliancePort`] and
    /// [`ScalePort`], since the kettle and the scale sit on the same base.
    /// Returns the change flags computed this tick.
    pub fn tick(
        &mut self,
        now: Millis,
        network: NetworkState,
        hw: &mut (impl AppliancePort + ScalePort),
        store: &mut impl RemoteStore,
        sink: &mut impl EventSink,
    ) -> ChangeFlags {
        self.stats.ticks += 1;

        // 1. Observe once; push and poll both work from this copy.
        let obs = Observation::capture(network, &*hw);

        // 2. Change detection
        let flags = self.tracker.diff(&obs.device, &obs.scale);
        if flags.connection_changed {
            sink.emit(&SyncEvent::LinkChanged {
                connected: obs.device.connected,
            });
        }

        // 3. Debounced status push
        match self.push.maybe_push(&flags, now, &obs, store) {
            PushOutcome::Idle | PushOutcome::Waiting => {}
            PushOutcome::Skipped(reason) => sink.emit(&SyncEvent::PushSkipped(reason)),
            PushOutcome::Pushed => {
                self.stats.push_attempts += 1;
                sink.emit(&SyncEvent::StatusPushed { at: now });
            }
            PushOutcome::Failed(e) => {
                self.stats.push_attempts += 1;
                self.stats.push_failures += 1;
                sink.emit(&SyncEvent::PushFailed(e));
            }
        }

        // 4. Command poll
        let outcome = self.poll.maybe_poll(now, &obs, hw, store);
        self.handle_poll(outcome, sink);

        flags
    }

    fn handle_poll(&mut self, outcome: PollOutcome, sink: &mut impl EventSink) {
        match outcome {
            PollOutcome::NotDue | PollOutcome::Skipped(_) => {}
            PollOutcome::NoCommand => self.stats.polls += 1,
            PollOutcome::CheckFailed(e) | PollOutcome::FetchFailed(e) => {
                self.stats.polls += 1;
                sink.emit(&SyncEvent::PollFailed(e));
            }
            PollOutcome::Consumed { command, ack } => {
                self.stats.polls += 1;
                match command {
                    Ok(cmd) => {
                        self.stats.commands_applied += 1;
                        sink.emit(&SyncEvent::CommandApplied(cmd));
                    }
                    Err(e) => {
                        self.stats.commands_dropped += 1;
                        sink.emit(&SyncEvent::CommandDropped(e));
                    }
                }
                if let Err(e) = ack {
                    sink.emit(&SyncEvent::AckFailed(e));
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    /// Whether a status change is waiting to be pushed.
    pub fn is_push_pending(&self) -> bool {
        self.push.is_pending()
    }

    pub fn last_push_ms(&self) -> Millis {
        self.push.last_push_ms()
    }

    pub fn last_poll_ms(&self) -> Millis {
        self.poll.last_poll_ms()
    }
}
