//! Synchronization engine: change detection, debounced status push and
//! command polling.
//!
//! ```text
//!  TimeSource ─▶ ShadowStateTracker.diff ─▶ PushScheduler.maybe_push
//!                                                   │
//!                                   CommandPoller.maybe_poll ◀┘
//! ```
//!
//! Everything here runs on the single control thread, once per driver
//! tick.  Each component owns its own state; nothing is shared.

pub mod document;
pub mod paths;
pub mod poll;
pub mod push;
pub mod shadow;
pub mod time;

use core::fmt;

use crate::app::ports::{AppliancePort, NetworkState, ScalePort};
use crate::device::{DeviceState, ScaleState};

use paths::RemotePath;

/// Longest device name the bridge will address.
pub const MAX_NAME_LEN: usize = 32;

/// Advertised appliance name, copied out once per tick.
pub type DeviceName = heapless::String<MAX_NAME_LEN>;

/// Why a remote operation was skipped this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Station link is down.
    NetworkDown,
    /// Wireless link to the kettle is down.
    ApplianceDisconnected,
    /// Kettle has not identified itself (or its name does not fit a path).
    NoIdentity,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkDown => write!(f, "network down"),
            Self::ApplianceDisconnected => write!(f, "appliance disconnected"),
            Self::NoIdentity => write!(f, "appliance has no identity"),
        }
    }
}

/// Everything the engine reads from the outside world in one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub network: NetworkState,
    pub device: DeviceState,
    pub scale: ScaleState,
    /// Empty when the appliance is unnamed or its name is too long.
    pub name: DeviceName,
}

impl Observation {
    /// Read the appliance and scale once.
    pub fn capture(network: NetworkState, hw: &(impl AppliancePort + ScalePort)) -> Self {
        let raw = hw.name();
        let name = DeviceName::try_from(raw).unwrap_or_else(|_| {
            log::warn!("Appliance name '{}' exceeds {} bytes, ignoring", raw, MAX_NAME_LEN);
            DeviceName::new()
        });
        Self {
            network,
            device: hw.device_state(),
            scale: hw.scale_state(),
            name,
        }
    }

    /// Path of `node` for this appliance, if remote calls are allowed now.
    pub fn remote_path(&self, node: &str) -> Result<RemotePath, SkipReason> {
        if !self.network.is_up() {
            return Err(SkipReason::NetworkDown);
        }
        if !self.device.connected {
            return Err(SkipReason::ApplianceDisconnected);
        }
        paths::node_path(&self.name, node).ok_or(SkipReason::NoIdentity)
    }
}
