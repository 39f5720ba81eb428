//! Status push: debounce floor, guards, wraparound and failure handling.

use kettlebridge::adapters::memory_store::{MemoryStore, StoreOp};
use kettlebridge::app::events::SyncEvent;
use kettlebridge::app::ports::{NetworkState, StoreError};
use kettlebridge::app::service::SyncService;
use kettlebridge::config::SyncConfig;
use kettlebridge::sync::SkipReason;

use crate::mock_hw::{MockBase, RecordingSink};

const STATUS: &str = "/EKG-TEST/status";

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
        self.tick_on(now, NetworkState::Up);
    }

    fn tick_on(&mut self, now: u32, network: NetworkState) {
        self.svc
            .tick(now, network, &mut self.base, &mut self.store, &mut self.sink);
    }

    fn writes(&self) -> usize {
        self.store.count(StoreOp::Set)
    }
}

#[test]
fn first_push_waits_for_first_window() {
    let mut rig = Rig::new();
    rig.tick(100);
    rig.tick(5_000);
    assert_eq!(rig.writes(), 0);
    assert!(rig.svc.is_push_pending());
    rig.tick(5_001);
    assert_eq!(rig.writes(), 1);
    assert!(!rig.svc.is_push_pending());
}

#[test]
fn identical_ticks_never_write() {
    let mut rig = Rig::new();
    rig.tick(6_000);
    assert_eq!(rig.writes(), 1);

    for t in (7_000..60_000).step_by(500) {
        rig.tick(t);
    }
    assert_eq!(rig.writes(), 1);
}

#[test]
fn burst_of_changes_collapses_into_one_write_per_window() {
    let mut rig = Rig::new();
    rig.tick(6_000);
    assert_eq!(rig.svc.last_push_ms(), 6_000);

    // Temperature climbs once a second starting 1 s after the push.
    for (i, t) in (7_000..=11_000).step_by(1_000).enumerate() {
        rig.base.current_temp = 21 + i as u8;
        rig.tick(t);
    }
    assert_eq!(rig.writes(), 1, "nothing before last push + 5000ms");

    rig.tick(11_001);
    assert_eq!(rig.writes(), 2, "exactly one push once the floor is crossed");
    assert_eq!(rig.store.document(STATUS).unwrap()["currentTemp"], 25);

    rig.tick(11_500);
    assert_eq!(rig.writes(), 2);
}

#[test]
fn pushed_document_reflects_same_tick_state() {
    let mut rig = Rig::new();
    rig.base.power = true;
    rig.base.hold = true;
    rig.base.current_temp = 77;
    rig.base.weight = 31.25;
    rig.tick(9_000);

    let doc = rig.store.document(STATUS).unwrap();
    assert_eq!(doc["isOn"], true);
    assert_eq!(doc["isHold"], true);
    assert_eq!(doc["isLifted"], false);
    assert_eq!(doc["currentTemp"], 77);
    assert_eq!(doc["targetTemp"], 96);
    assert_eq!(doc["units"], 0);
    assert_eq!(doc["weight"], 31.25);
    assert_eq!(doc["lastUpdated"], "9000");
}

#[test]
fn disconnected_appliance_never_writes_and_stays_pending() {
    let mut rig = Rig::new();
    rig.base.connected = false;
    for t in (6_000..30_000).step_by(1_000) {
        rig.tick(t);
    }
    assert_eq!(rig.writes(), 0);
    assert!(rig.svc.is_push_pending());
    assert!(
        rig.sink
            .count(|e| *e == SyncEvent::PushSkipped(SkipReason::ApplianceDisconnected))
            > 0
    );

    rig.base.connected = true;
    rig.tick(30_000);
    assert_eq!(rig.writes(), 1);
    assert!(!rig.svc.is_push_pending());
}

#[test]
fn unnamed_appliance_is_skipped() {
    let mut rig = Rig::new();
    rig.base.name.clear();
    rig.tick(6_000);
    assert_eq!(rig.writes(), 0);
    assert!(rig.svc.is_push_pending());
    assert_eq!(
        rig.sink.events.last(),
        Some(&SyncEvent::PushSkipped(SkipReason::NoIdentity))
    );
}

#[test]
fn network_down_defers_push() {
    let mut rig = Rig::new();
    rig.tick_on(6_000, NetworkState::Down);
    assert_eq!(rig.writes(), 0);
    rig.tick_on(6_050, NetworkState::Up);
    assert_eq!(rig.writes(), 1);
}

#[test]
fn failed_push_is_not_retried_inside_window() {
    let mut rig = Rig::new();
    rig.store
        .fail_next(StoreOp::Set, StoreError::Rejected("write quota".into()));
    rig.tick(6_000);
    assert_eq!(rig.writes(), 1);
    assert!(rig.store.document(STATUS).is_none());
    assert_eq!(
        rig.sink.events.last(),
        Some(&SyncEvent::PushFailed(StoreError::Rejected("write quota".into())))
    );
    assert!(!rig.svc.is_push_pending());

    rig.base.current_temp += 1;
    rig.tick(8_000);
    assert_eq!(rig.writes(), 1);
    rig.tick(11_001);
    assert_eq!(rig.writes(), 2);
    assert_eq!(rig.svc.stats().push_failures, 1);
    assert_eq!(rig.svc.stats().push_attempts, 2);
}

#[test]
fn counter_wraparound_restarts_the_window() {
    let mut rig = Rig::new();
    rig.tick(u32::MAX - 10);
    assert_eq!(rig.writes(), 1);
    assert_eq!(rig.svc.last_push_ms(), u32::MAX - 10);

    rig.base.current_temp += 1;
    rig.tick(5);
    assert_eq!(rig.writes(), 1);
    assert_eq!(rig.svc.last_push_ms(), 5);

    rig.tick(5_005);
    assert_eq!(rig.writes(), 1);
    rig.tick(5_006);
    assert_eq!(rig.writes(), 2);
}
