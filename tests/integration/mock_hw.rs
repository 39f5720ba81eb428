//! Mock kettle base and event sink for integration tests.
//!
//! Records every appliance command so tests can assert on the full
//! command history without a BLE link.

use kettlebridge::app::events::SyncEvent;
use kettlebridge::app::ports::{AppliancePort, EventSink, ScalePort};
use kettlebridge::device::Units;

// ── Appliance call record ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ApplianceCall {
    On,
    Off,
    SetTemp(u8),
}

// ── MockBase ──────────────────────────────────────────────────

pub struct MockBase {
    pub connected: bool,
    pub power: bool,
    pub lifted: bool,
    pub hold: bool,
    pub current_temp: u8,
    pub target_temp: u8,
    pub units: Units,
    pub name: String,
    pub weight: f32,
    pub calibration_mode: u8,
    pub calls: Vec<ApplianceCall>,
}

#[allow(dead_code)]
impl MockBase {
    pub fn new() -> Self {
        Self {
            connected: true,
            power: false,
            lifted: false,
            hold: false,
            current_temp: 20,
            target_temp: 96,
            units: Units::Celsius,
            name: "EKG-TEST".to_string(),
            weight: 10.0,
            calibration_mode: 0,
            calls: Vec::new(),
        }
    }

    pub fn last_call(&self) -> Option<&ApplianceCall> {
        self.calls.last()
    }
}

impl Default for MockBase {
    fn default() -> Self {
        Self::new()
    }
}

impl AppliancePort for MockBase {
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
        self.power = true;
        self.calls.push(ApplianceCall::On);
    }

    fn off(&mut self) {
        self.power = false;
        self.calls.push(ApplianceCall::Off);
    }

    fn set_temp(&mut self, temp: u8) {
        self.target_temp = temp;
        self.calls.push(ApplianceCall::SetTemp(temp));
    }
}

impl ScalePort for MockBase {
    fn weight(&self) -> f32 {
        self.weight
    }

    fn calibration_mode(&self) -> u8 {
        self.calibration_mode
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<SyncEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&SyncEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &SyncEvent) {
        self.events.push(event.clone());
    }
}
