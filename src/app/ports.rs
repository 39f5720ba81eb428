//! Port traits: the hexagonal boundary between the sync engine and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SyncService (domain)
//! ```
//!
//! Driven adapters (kettle link, scale, remote store, clock, event sinks)
//! implement these traits.  The [`SyncService`](super::service::SyncService)
//! consumes them via generics, so the engine never touches a radio, an ADC
//! or a socket directly.
//!
//! ## Blocking notes
//!
//! - **RemoteStore** calls may block the control thread for the duration of
//!   a network round-trip.  The engine adds no timeout of its own; the
//!   transport underneath MUST bound every call.
//! - All store errors are typed; callers must handle every variant explicitly.

use crate::device::{DeviceState, ScaleState, Units};
use crate::sync::time::Millis;

// ───────────────────────────────────────────────────────────────
// Appliance port (driven adapter: kettle ↔ domain)
// ───────────────────────────────────────────────────────────────

/// The wirelessly connected kettle and its decoded protocol state.
pub trait AppliancePort {
    /// Whether the wireless link to the kettle is currently up.
    fn is_connected(&self) -> bool;

    fn is_on(&self) -> bool;

    fn is_lifted(&self) -> bool;

    fn is_hold(&self) -> bool;

    fn current_temp(&self) -> u8;

    fn target_temp(&self) -> u8;

    fn units(&self) -> Units;

    /// Advertised device name.  Empty until the kettle has identified itself.
    fn name(&self) -> &str;

    /// Switch the heater on.
    fn on(&mut self);

    /// Switch the heater off.
    fn off(&mut self);

    /// Set the target temperature (in the kettle's current units).
    fn set_temp(&mut self, temp: u8);

    /// Copy every reading into a [`DeviceState`].
    fn device_state(&self) -> DeviceState {
        DeviceState {
            connected: self.is_connected(),
            power: self.is_on(),
            lifted: self.is_lifted(),
            hold: self.is_hold(),
            current_temp: self.current_temp(),
            target_temp: self.target_temp(),
            units: self.units(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Scale port (driven adapter: weight sensor → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the weight sensor under the kettle base.
pub trait ScalePort {
    fn weight(&self) -> f32;

    fn calibration_mode(&self) -> u8;

    /// Copy every reading into a [`ScaleState`].
    fn scale_state(&self) -> ScaleState {
        ScaleState {
            weight: self.weight(),
            calibration_mode: self.calibration_mode(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Remote store port (driven adapter: domain ↔ document store)
// ───────────────────────────────────────────────────────────────

/// Path-addressed remote document store.
///
/// Writes are last-write-wins; there is no versioning.  `&mut self`
/// because real clients keep a reusable response buffer per call.
pub trait RemoteStore {
    /// Check whether a document exists at `path`.
    fn exists(&mut self, path: &str) -> Result<bool, StoreError>;

    /// Fetch the document at `path`.
    fn get(&mut self, path: &str) -> Result<serde_json::Value, StoreError>;

    /// Replace the document at `path`.
    fn set(&mut self, path: &str, document: &serde_json::Value) -> Result<(), StoreError>;

    /// Remove the document at `path`.  Returns `Ok(())` even if it didn't exist.
    fn delete(&mut self, path: &str) -> Result<(), StoreError>;
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter with a fixed-width wraparound.
pub trait TimeSource {
    fn now_ms(&self) -> Millis;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The engine emits structured [`SyncEvent`](super::events::SyncEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::SyncEvent);
}

// ───────────────────────────────────────────────────────────────
// Network state (polled by the driver once per tick)
// ───────────────────────────────────────────────────────────────

/// Station-link state handed to the service on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkState {
    #[default]
    Down,
    Up,
}

impl NetworkState {
    pub fn is_up(self) -> bool {
        self == Self::Up
    }
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`RemoteStore`] operations.
///
/// The `String` payloads carry the reason reported by the store client
/// verbatim so it can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No document at the requested path.
    NotFound,
    /// The request never completed (DNS, TLS, timeout, socket reset).
    Transport(String),
    /// The store answered but refused the operation (auth, quota, rules).
    Rejected(String),
}

/// Errors from [`SyncConfig`](crate::config::SyncConfig) validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "path not found"),
            Self::Transport(reason) => write!(f, "transport error: {}", reason),
            Self::Rejected(reason) => write!(f, "rejected: {}", reason),
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl std::error::Error for ConfigError {}
