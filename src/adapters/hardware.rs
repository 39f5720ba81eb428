//! Hardware adapter bridging the kettle link and the scale to domain port traits.
//!
//! The scale sits under the kettle base, so the service treats both as one
//! piece of hardware.  [`KettleBase`] owns one of each and exposes them
//! through [`AppliancePort`] and [`ScalePort`] together.

use crate::app::ports::{AppliancePort, ScalePort};
use crate::device::Units;

/// Concrete adapter that combines the kettle and the scale behind port traits.
pub struct KettleBase<K, S> {
    pub kettle: K,
    pub scale: S,
}

impl<K, S> KettleBase<K, S> {
    pub fn new(kettle: K, scale: S) -> Self {
        Self { kettle, scale }
    }
}

// ── AppliancePort implementation ──────────────────────────────

impl<K: AppliancePort, S> AppliancePort for KettleBase<K, S> {
    fn is_connected(&self) -> bool {
        self.kettle.is_connected()
    }

    fn is_on(&self) -> bool {
        self.kettle.is_on()
    }

    fn is_lifted(&self) -> bool {
        self.kettle.is_lifted()
    }

    fn is_hold(&self) -> bool {
        self.kettle.is_hold()
    }

    fn current_temp(&self) -> u8 {
        self.kettle.current_temp()
    }

    fn target_temp(&self) -> u8 {
        self.kettle.target_temp()
    }

    fn units(&self) -> Units {
        self.kettle.units()
    }

    fn name(&self) -> &str {
        self.kettle.name()
    }

    fn on(&mut self) {
        self.kettle.on();
    }

    fn off(&mut self) {
        self.kettle.off();
    }

    fn set_temp(&mut self, temp: u8) {
        self.kettle.set_temp(temp);
    }
}

// ── ScalePort implementation ──────────────────────────────────

impl<K, S: ScalePort> ScalePort for KettleBase<K, S> {
    fn weight(&self) -> f32 {
        self.scale.weight()
    }

    fn calibration_mode(&self) -> u8 {
        self.scale.calibration_mode()
    }
}
