//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured sync events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::SyncEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`SyncEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &SyncEvent) {
        match event {
            SyncEvent::Started => info!("START | sync engine running"),
            SyncEvent::LinkChanged { connected } => {
                info!("LINK  | kettle {}", if *connected { "connected" } else { "disconnected" });
            }
            SyncEvent::StatusPushed { at } => info!("PUSH  | ok at {}ms", at),
            SyncEvent::PushSkipped(reason) => info!("PUSH  | held back: {}", reason),
            SyncEvent::PushFailed(e) => warn!("PUSH  | failed: {}", e),
            SyncEvent::CommandApplied(cmd) => info!("CMD   | applied {:?}", cmd),
            SyncEvent::CommandDropped(e) => warn!("CMD   | dropped: {}", e),
            SyncEvent::PollFailed(e) => warn!("CMD   | poll failed: {}", e),
            SyncEvent::AckFailed(e) => warn!("CMD   | ack failed, may redeliver: {}", e),
        }
    }
}
