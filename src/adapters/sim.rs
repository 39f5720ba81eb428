//! Simulated kettle and scale.
//!
//! Deterministic stand-ins for the BLE kettle driver and the FSR scale,
//! used by host-side simulation and integration tests.  The kettle heats
//! one degree per second while on and switches itself off at the target
//! unless hold is engaged, which is enough to exercise the debounce path.

use log::info;

use crate::app::ports::{AppliancePort, ScalePort};
use crate::device::Units;
use crate::sync::time::Millis;

/// Degrees gained per second of heating.
const HEAT_RATE_PER_SEC: u8 = 1;

#[derive(Debug, Clone)]
pub struct SimKettle {
    pub connected: bool,
    pub power: bool,
    pub lifted: bool,
    pub hold: bool,
    pub current_temp: u8,
    pub target_temp: u8,
    pub units: Units,
    pub name: String,
    heat_carry_ms: Millis,
}

impl SimKettle {
    /// A connected, idle kettle at room temperature.
    pub fn new(name: &str) -> Self {
        Self {
            connected: true,
            power: false,
            lifted: false,
            hold: false,
            current_temp: 20,
            target_temp: 96,
            units: Units::Celsius,
            name: name.to_string(),
            heat_carry_ms: 0,
        }
    }

    /// Advance the thermal model by `dt_ms`.
    pub fn step(&mut self, dt_ms: Millis) {
        if self.lifted && self.power {
            info!("SimKettle: lifted while heating, switching off");
            self.power = false;
        }
        if !self.power {
            self.heat_carry_ms = 0;
            return;
        }
        self.heat_carry_ms += dt_ms;
        while self.heat_carry_ms >= 1_000 && self.current_temp < self.target_temp {
            self.heat_carry_ms -= 1_000;
            self.current_temp = self
                .current_temp
                .saturating_add(HEAT_RATE_PER_SEC)
                .min(self.target_temp);
        }
        if self.current_temp >= self.target_temp && !self.hold {
            info!("SimKettle: reached {} and switched off", self.target_temp);
            self.power = false;
        }
    }
}

impl AppliancePort for SimKettle {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn is_on(&self) -> bool {
        self.power
    }

    fn is_lifted(&self) -> bool {
        self.lifted
    }

    fn is_hold(&self) -> bool {
        self.hold
    }

    fn current_temp(&self) -> u8 {
        self.current_temp
    }

    fn target_temp(&self) -> u8 {
        self.target_temp
    }

    fn units(&self) -> Units {
        self.units
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn on(&mut self) {
        if self.connected {
            self.power = true;
        }
    }

    fn off(&mut self) {
        if self.connected {
            self.power = false;
        }
    }

    fn set_temp(&mut self, temp: u8) {
        if self.connected {
            self.target_temp = temp;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimScale {
    pub weight: f32,
    pub calibration_mode: u8,
}

impl SimScale {
    pub fn new(weight: f32) -> Self {
        Self {
            weight,
            calibration_mode: 0,
        }
    }
}

impl ScalePort for SimScale {
    fn weight(&self) -> f32 {
        self.weight
    }

    fn calibration_mode(&self) -> u8 {
        self.calibration_mode
    }
}
