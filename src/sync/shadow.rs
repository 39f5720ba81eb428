//! Change detection over the appliance and scale readings.
//!
//! [`ShadowStateTracker`] keeps the last state it evaluated and, on each
//! tick, reports which groups of fields moved.  The snapshot starts out
//! unknown, so the very first diff always reports a full change.

use crate::device::{DeviceState, ScaleState, Units};

/// Which parts of the observed state changed since the previous diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeFlags {
    pub connection_changed: bool,
    /// Power or hold mode changed.
    pub power_changed: bool,
    pub lift_changed: bool,
    /// Current temperature, target temperature or units changed.
    pub temp_changed: bool,
    /// Weight or calibration mode changed.
    pub scale_changed: bool,
}

impl ChangeFlags {
    /// Every flag set.
    pub const ALL: Self = Self {
        connection_changed: true,
        power_changed: true,
        lift_changed: true,
        temp_changed: true,
        scale_changed: true,
    };

    pub fn any(&self) -> bool {
        self.connection_changed
            || self.power_changed
            || self.lift_changed
            || self.temp_changed
            || self.scale_changed
    }
}

/// The engine's private copy of the last evaluated state.
///
/// `None` means "never observed".  After a diff every field is `Some`
/// and equal to what was just read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShadowSnapshot {
    pub connected: Option<bool>,
    pub power: Option<bool>,
    pub lifted: Option<bool>,
    pub hold: Option<bool>,
    pub current_temp: Option<u8>,
    pub target_temp: Option<u8>,
    pub units: Option<Units>,
    /// Stored as raw bits so the comparison is exact and NaN-stable.
    pub weight_bits: Option<u32>,
    pub calibration_mode: Option<u8>,
}

impl ShadowSnapshot {
    /// `true` when the snapshot holds exactly these readings.
    pub fn matches(&self, device: &DeviceState, scale: &ScaleState) -> bool {
        self.connected == Some(device.connected)
            && self.power == Some(device.power)
            && self.lifted == Some(device.lifted)
            && self.hold == Some(device.hold)
            && self.current_temp == Some(device.current_temp)
            && self.target_temp == Some(device.target_temp)
            && self.units == Some(device.units)
            && self.weight_bits == Some(scale.weight.to_bits())
            && self.calibration_mode == Some(scale.calibration_mode)
    }
}

/// Overwrite `slot` with `value`, returning whether it differed.
fn track<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    if slot.as_ref() == Some(&value) {
        return false;
    }
    *slot = Some(value);
    true
}

/// Holds the shadow snapshot and diffs fresh readings against it.
#[derive(Debug, Default)]
pub struct ShadowStateTracker {
    shadow: ShadowSnapshot,
}

impl ShadowStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `device` and `scale` against the snapshot and absorb them.
    ///
    /// No tolerance is applied to weight: any bit-level difference counts
    /// as a change.
    pub fn diff(&mut self, device: &DeviceState, scale: &ScaleState) -> ChangeFlags {
        let s = &mut self.shadow;

        let connection_changed = track(&mut s.connected, device.connected);

        let power = track(&mut s.power, device.power);
        let hold = track(&mut s.hold, device.hold);

        let lift_changed = track(&mut s.lifted, device.lifted);

        let current = track(&mut s.current_temp, device.current_temp);
        let target = track(&mut s.target_temp, device.target_temp);
        let units = track(&mut s.units, device.units);

        let weight = track(&mut s.weight_bits, scale.weight.to_bits());
        let cal = track(&mut s.calibration_mode, scale.calibration_mode);

        ChangeFlags {
            connection_changed,
            power_changed: power || hold,
            lift_changed,
            temp_changed: current || target || units,
            scale_changed: weight || cal,
        }
    }

    /// Read-only view of the snapshot.
    pub fn snapshot(&self) -> &ShadowSnapshot {
        &self.shadow
    }
}
