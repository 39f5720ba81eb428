//! Command polling: cadence, priority, acknowledge and redelivery.

use kettlebridge::adapters::memory_store::{MemoryStore, StoreOp};
use kettlebridge::app::commands::ApplianceCommand;
use kettlebridge::app::events::SyncEvent;
use kettlebridge::app::ports::{NetworkState, RemoteStore, StoreError};
use kettlebridge::app::service::SyncService;
use kettlebridge::config::SyncConfig;
use kettlebridge::error::CommandError;
use serde_json::json;

use crate::mock_hw::{ApplianceCall, MockBase, RecordingSink};

const COMMAND: &str = "/EKG-TEST/command";

struct Rig {
    svc: SyncService,
    base: MockBase,
    store: MemoryStore,
    sink: RecordingSink,
}

impl Rig {
    fn new() -> Self {
        Self {
            svc: SyncService::new(&SyncConfig::default()).unwrap(),
            base: MockBase::new(),
            store: MemoryStore::new(),
            sink: RecordingSink::new(),
        }
    }

    fn tick(&mut self, now: u32) {
        self.svc.tick(
            now,
            NetworkState::Up,
            &mut self.base,
            &mut self.store,
            &mut self.sink,
        );
    }

    fn checks(&self) -> usize {
        self.store
            .calls()
            .iter()
            .filter(|(op, path)| *op == StoreOp::Exists && path == COMMAND)
            .count()
    }
}

#[test]
fn at_most_one_check_per_window() {
    let mut rig = Rig::new();
    for t in (0..=3_000).step_by(10) {
        rig.tick(t);
    }
    assert_eq!(rig.checks(), 0);

    for t in (3_001..=6_001).step_by(10) {
        rig.tick(t);
    }
    assert_eq!(rig.checks(), 1);
    assert_eq!(rig.svc.last_poll_ms(), 3_001);

    rig.tick(6_002);
    assert_eq!(rig.checks(), 2);
}

#[test]
fn cadence_unaffected_by_push_activity() {
    let mut quiet = Rig::new();
    let mut busy = Rig::new();
    for t in (0..40_000).step_by(250) {
        busy.base.current_temp = (t / 250 % 100) as u8;
        quiet.tick(t);
        busy.tick(t);
    }
    assert!(busy.store.count(StoreOp::Set) > quiet.store.count(StoreOp::Set));
    assert_eq!(busy.checks(), quiet.checks());
}

#[test]
fn off_wins_over_on() {
    let mut rig = Rig::new();
    rig.base.power = true;
    rig.store.insert(COMMAND, json!({ "on": true, "off": true }));
    rig.tick(3_001);
    assert_eq!(rig.base.calls, vec![ApplianceCall::Off]);
    assert!(!rig.base.power);
}

#[test]
fn set_temp_applied_and_acknowledged() {
    let mut rig = Rig::new();
    rig.store.insert(COMMAND, json!({ "temp": { "value": 85 } }));
    rig.tick(3_001);
    assert_eq!(rig.base.last_call(), Some(&ApplianceCall::SetTemp(85)));
    assert!(!rig.store.exists(COMMAND).unwrap());
    assert!(
        rig.sink
            .events
            .contains(&SyncEvent::CommandApplied(ApplianceCommand::SetTemp(85)))
    );
    assert_eq!(rig.svc.stats().commands_applied, 1);
}

#[test]
fn command_consumed_exactly_once() {
    let mut rig = Rig::new();
    rig.store.insert(COMMAND, json!({ "on": true }));
    for t in (0..20_000).step_by(100) {
        rig.tick(t);
    }
    assert_eq!(rig.base.calls, vec![ApplianceCall::On]);
    assert_eq!(rig.store.count(StoreOp::Delete), 1);
}

#[test]
fn unrecognized_shape_is_dropped_and_deleted() {
    let mut rig = Rig::new();
    rig.store.insert(COMMAND, json!({ "boil": true }));
    rig.tick(3_001);
    assert!(rig.base.calls.is_empty());
    assert!(rig.store.document(COMMAND).is_none());
    assert!(
        rig.sink
            .events
            .contains(&SyncEvent::CommandDropped(CommandError::NoRecognizedKey))
    );
    assert_eq!(rig.svc.stats().commands_dropped, 1);
}

#[test]
fn fetch_failure_keeps_command_for_next_cycle() {
    let mut rig = Rig::new();
    rig.store.insert(COMMAND, json!({ "on": true }));
    rig.store
        .fail_next(StoreOp::Get, StoreError::Transport("timeout".into()));

    rig.tick(3_001);
    assert!(rig.base.calls.is_empty());
    assert!(rig.store.document(COMMAND).is_some());
    assert!(
        rig.sink
            .events
            .contains(&SyncEvent::PollFailed(StoreError::Transport("timeout".into())))
    );

    rig.tick(6_002);
    assert_eq!(rig.base.calls, vec![ApplianceCall::On]);
    assert!(rig.store.document(COMMAND).is_none());
}

#[test]
fn failed_acknowledge_redelivers() {
    let mut rig = Rig::new();
    rig.store.insert(COMMAND, json!({ "off": true }));
    rig.store
        .fail_next(StoreOp::Delete, StoreError::Transport("reset".into()));

    rig.tick(3_001);
    assert!(
        rig.sink
            .events
            .contains(&SyncEvent::AckFailed(StoreError::Transport("reset".into())))
    );
    assert!(rig.store.document(COMMAND).is_some());

    rig.tick(6_002);
    assert_eq!(rig.base.calls, vec![ApplianceCall::Off, ApplianceCall::Off]);
    assert!(rig.store.document(COMMAND).is_none());
}

#[test]
fn disconnected_appliance_skips_store_but_keeps_cadence() {
    let mut rig = Rig::new();
    rig.base.connected = false;
    rig.store.insert(COMMAND, json!({ "on": true }));
    rig.tick(3_001);
    assert_eq!(rig.checks(), 0);
    assert_eq!(rig.svc.last_poll_ms(), 3_001);

    rig.base.connected = true;
    rig.tick(4_000);
    assert_eq!(rig.checks(), 0, "cadence advanced during the skip");
    rig.tick(6_002);
    assert_eq!(rig.base.calls, vec![ApplianceCall::On]);
}
