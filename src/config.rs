//! Bridge configuration parameters
//!
//! Tunable timing and naming for the sync engine.  Defaults match the
//! remote store's write metering; override them only with the store's
//! quota in mind.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::sync::time::Millis;

/// Name of a document under the device path.
pub type NodeName = heapless::String<16>;

/// Core bridge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    // --- Push ---
    /// Minimum time between status pushes (milliseconds)
    pub push_interval_ms: Millis,
    /// Document name for status, under `/<device>/`
    pub status_node: NodeName,

    // --- Poll ---
    /// Time between command polls (milliseconds)
    pub poll_interval_ms: Millis,
    /// Document name for commands, under `/<device>/`
    pub command_node: NodeName,

    // --- Driver ---
    /// Control loop period (milliseconds)
    pub loop_interval_ms: Millis,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            push_interval_ms: 5_000,
            status_node: node("status"),

            poll_interval_ms: 3_000,
            command_node: node("command"),

            loop_interval_ms: 50, // 20 Hz
        }
    }
}

fn node(name: &str) -> NodeName {
    let mut n = NodeName::new();
    let _ = n.push_str(name);
    n
}

fn valid_node(name: &str) -> bool {
    !name.is_empty() && !name.contains('/')
}

impl SyncConfig {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.push_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("push_interval_ms must be > 0"));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be > 0"));
        }
        if self.loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("loop_interval_ms must be > 0"));
        }
        if !valid_node(&self.status_node) {
            return Err(ConfigError::ValidationFailed("status_node must be a single path segment"));
        }
        if !valid_node(&self.command_node) {
            return Err(ConfigError::ValidationFailed("command_node must be a single path segment"));
        }
        if self.status_node == self.command_node {
            return Err(ConfigError::ValidationFailed("status_node and command_node must differ"));
        }
        Ok(())
    }
}
