//! Inbound command polling.
//!
//! On a fixed cadence the poller looks for `/<name>/command`, applies what
//! it recognizes, then deletes the document to acknowledge it.  Apply and
//! delete are not atomic: a crash in between redelivers the command on the
//! next poll, which is safe because every command is idempotent.

use log::{debug, info, warn};

use crate::app::commands::ApplianceCommand;
use crate::app::ports::{AppliancePort, RemoteStore, StoreError};
use crate::config::NodeName;
use crate::error::CommandError;

use super::document::parse_command;
use super::time::{ElapsedTimer, Millis};
use super::{Observation, SkipReason};

/// What [`CommandPoller::maybe_poll`] did this tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The poll interval has not elapsed.
    NotDue,
    /// Due, but the guard refused.  The cadence still advanced.
    Skipped(SkipReason),
    /// No command document present.
    NoCommand,
    /// The existence check failed.
    CheckFailed(StoreError),
    /// The document exists but could not be fetched.  Left in place.
    FetchFailed(StoreError),
    /// A document was fetched and deleted.
    Consumed {
        /// The applied command, or why nothing was applied.
        command: Result<ApplianceCommand, CommandError>,
        /// Result of the acknowledging delete.
        ack: Result<(), StoreError>,
    },
}

pub struct CommandPoller {
    timer: ElapsedTimer,
    interval_ms: Millis,
    node: NodeName,
}

impl CommandPoller {
    pub fn new(interval_ms: Millis, node: NodeName) -> Self {
        Self {
            timer: ElapsedTimer::default(),
            interval_ms,
            node,
        }
    }

    /// Counter reading of the last poll cycle.
    pub fn last_poll_ms(&self) -> Millis {
        self.timer.last()
    }

    /// Run one poll cycle if the interval has elapsed.
    pub fn maybe_poll(
        &mut self,
        now: Millis,
        obs: &Observation,
        appliance: &mut impl AppliancePort,
        store: &mut impl RemoteStore,
    ) -> PollOutcome {
        if !self.timer.expired(now, self.interval_ms) {
            return PollOutcome::NotDue;
        }
        // Cadence is fixed, independent of connectivity.
        self.timer.mark(now);

        let path = match obs.remote_path(&self.node) {
            Ok(p) => p,
            Err(reason) => return PollOutcome::Skipped(reason),
        };

        debug!("Poll: {}", path);
        match store.exists(&path) {
            Ok(true) => {}
            Ok(false) => return PollOutcome::NoCommand,
            Err(e) => {
                warn!("Poll: existence check on {} failed: {}", path, e);
                return PollOutcome::CheckFailed(e);
            }
        }

        let doc = match store.get(&path) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Poll: fetch of {} failed: {}", path, e);
                return PollOutcome::FetchFailed(e);
            }
        };

        let command = parse_command(&doc);
        match command {
            Ok(cmd) => {
                info!("Poll: applying {:?}", cmd);
                cmd.apply(appliance);
            }
            Err(e) => warn!("Poll: dropping unrecognized command ({}): {}", e, doc),
        }

        let ack = store.delete(&path);
        if let Err(e) = &ack {
            warn!("Poll: acknowledge of {} failed, may redeliver: {}", path, e);
        }

        PollOutcome::Consumed { command, ack }
    }
}
