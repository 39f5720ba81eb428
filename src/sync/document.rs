//! Wire documents exchanged with the remote store.
//!
//! ```text
//! /<name>/status   { isOn, isLifted, isHold, currentTemp, targetTemp,
//!                    units, weight, lastUpdated }
//! /<name>/command  { off: true } | { on: true } | { temp: { value: int } }
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::app::commands::ApplianceCommand;
use crate::device::{DeviceState, ScaleState, Units};
use crate::error::CommandError;

use super::time::Millis;

/// Status document published at `/<name>/status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDocument {
    pub is_on: bool,
    pub is_lifted: bool,
    pub is_hold: bool,
    pub current_temp: u8,
    pub target_temp: u8,
    pub units: Units,
    pub weight: f32,
    /// Counter reading of the push, as a decimal string.
    pub last_updated: String,
}

impl StatusDocument {
    pub fn new(device: &DeviceState, scale: &ScaleState, now: Millis) -> Self {
        Self {
            is_on: device.power,
            is_lifted: device.lifted,
            is_hold: device.hold,
            current_temp: device.current_temp,
            target_temp: device.target_temp,
            units: device.units,
            weight: scale.weight,
            last_updated: now.to_string(),
        }
    }

    /// Render as a JSON value for [`RemoteStore::set`](crate::app::ports::RemoteStore::set).
    ///
    /// A non-finite weight has no JSON form and is published as `null`.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Interpret a fetched command document.
///
/// Keys are checked in priority order: `off`, then `on`, then `temp.value`.
/// `off` and `on` count by presence alone.
pub fn parse_command(doc: &Value) -> Result<ApplianceCommand, CommandError> {
    let obj = doc.as_object().ok_or(CommandError::NotAnObject)?;

    if obj.contains_key("off") {
        return Ok(ApplianceCommand::Off);
    }
    if obj.contains_key("on") {
        return Ok(ApplianceCommand::On);
    }

    let temp = obj.get("temp").ok_or(CommandError::NoRecognizedKey)?;
    let value = temp
        .get("value")
        .and_then(Value::as_i64)
        .ok_or(CommandError::TempNotInteger)?;
    u8::try_from(value)
        .map(ApplianceCommand::SetTemp)
        .map_err(|_| CommandError::TempOutOfRange(value))
}
