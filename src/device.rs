//! Device model: the readings the bridge copies out of its collaborators.
//!
//! Both structs are plain `Copy` values: the appliance and scale adapters
//! own the live state, and the sync engine only ever holds a snapshot taken
//! once per tick.

use serde::{Deserialize, Serialize};

/// Temperature display units reported by the kettle.
///
/// Encoded on the wire as the integer discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Units {
    #[default]
    Celsius = 0,
    Fahrenheit = 1,
}

impl From<Units> for u8 {
    fn from(units: Units) -> Self {
        units as u8
    }
}

impl TryFrom<u8> for Units {
    type Error = &'static str;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Celsius),
            1 => Ok(Self::Fahrenheit),
            _ => Err("unknown units discriminant"),
        }
    }
}

/// Appliance readings, copied from the [`AppliancePort`](crate::app::ports::AppliancePort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceState {
    /// Wireless link to the kettle is up.
    pub connected: bool,
    /// Heater is on.
    pub power: bool,
    /// Kettle has been lifted off the base.
    pub lifted: bool,
    /// Keep-warm hold mode is engaged.
    pub hold: bool,
    pub current_temp: u8,
    pub target_temp: u8,
    pub units: Units,
}

/// Weight-sensor readings, copied from the [`ScalePort`](crate::app::ports::ScalePort).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleState {
    /// Filtered weight in the scale's calibrated unit.
    pub weight: f32,
    /// Calibration step the scale is currently in (0 = not calibrating).
    pub calibration_mode: u8,
}
