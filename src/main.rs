//! KettleBridge Firmware: Main Entry Point
//!
//! Fixed-period driver loop around the hexagonal sync core.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  KettleBase          LogEventSink   MemoryStore   Esp32Clock   │
//! │  (Appliance+Scale)   (EventSink)    (RemoteStore) (TimeSource) │
//! │  NetworkMonitor (station link, polled every tick)              │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              SyncService (pure logic)                  │    │
//! │  │  Shadow · Push · Poll                                  │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use kettlebridge::adapters::clock::Esp32Clock;
use kettlebridge::adapters::hardware::KettleBase;
use kettlebridge::adapters::log_sink::LogEventSink;
use kettlebridge::adapters::memory_store::MemoryStore;
use kettlebridge::adapters::network::{NetworkMonitor, probe_station_link};
use kettlebridge::adapters::sim::{SimKettle, SimScale};
use kettlebridge::app::ports::TimeSource;
use kettlebridge::app::service::SyncService;
use kettlebridge::config::SyncConfig;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  KettleBridge v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config ─────────────────────────────────────────────
    let config = SyncConfig::default();

    // ── 3. Construct adapters ─────────────────────────────────
    let clock = Esp32Clock::new();
    let mut network = NetworkMonitor::new();
    let mut sink = LogEventSink::new();

    // The BLE kettle driver and the FSR scale plug in behind the same
    // ports; until they are wired, the simulated pair drives the engine.
    let mut base = KettleBase::new(SimKettle::new("EKG-SIM"), SimScale::new(0.0));
    let mut store = MemoryStore::new();

    // ── 4. Construct sync service ─────────────────────────────
    let mut sync = SyncService::new(&config)?;
    sync.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    let mut last_ms = clock.now_ms();
    loop {
        let now = clock.now_ms();
        base.kettle.step(now.wrapping_sub(last_ms));
        last_ms = now;

        let net = network.observe(probe_station_link());
        sync.tick(now, net, &mut base, &mut store, &mut sink);

        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.loop_interval_ms,
        )));
    }
}
