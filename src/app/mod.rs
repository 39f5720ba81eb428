//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules for the bridge: which changes
//! get published, when, and how inbound commands reach the kettle.
//! All interaction with the radio, the scale and the network happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
