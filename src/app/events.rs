//! Outbound sync events.
//!
//! The [`SyncService`](super::service::SyncService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::error::CommandError;
use crate::sync::SkipReason;
use crate::sync::time::Millis;

use super::commands::ApplianceCommand;
use super::ports::StoreError;

/// Structured events emitted by the sync engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// The service has started.
    Started,

    /// The wireless link to the kettle came up or went down.
    LinkChanged { connected: bool },

    /// A status document was written.
    StatusPushed { at: Millis },

    /// A due push was held back by the guard; it stays pending.
    PushSkipped(SkipReason),

    /// The store refused or failed a status write.
    PushFailed(StoreError),

    /// A command document was applied to the appliance.
    CommandApplied(ApplianceCommand),

    /// A command document was not recognized and was discarded.
    CommandDropped(CommandError),

    /// The command check or fetch failed; the document (if any) stays.
    PollFailed(StoreError),

    /// The command was handled but deleting it failed; it may be redelivered.
    AckFailed(StoreError),
}
