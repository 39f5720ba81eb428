//! Station-link monitor.
//!
//! The driver probes the WiFi link once per tick and feeds the result in
//! here; [`NetworkMonitor`] turns it into a [`NetworkState`] and logs the
//! transitions.  Nothing subscribes to driver callbacks.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: [`probe_station_link`] asks the ESP-IDF
//!   WiFi driver whether the station is associated with an AP.
//! - **all other targets**: the probe always reports the link up.

use log::{info, warn};

use crate::app::ports::NetworkState;

pub struct NetworkMonitor {
    state: NetworkState,
    drops: u32,
}

impl Default for NetworkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkMonitor {
    pub fn new() -> Self {
        Self {
            state: NetworkState::Down,
            drops: 0,
        }
    }

    /// Record this tick's probe result and return the resulting state.
    pub fn observe(&mut self, link_up: bool) -> NetworkState {
        let next = if link_up {
            NetworkState::Up
        } else {
            NetworkState::Down
        };
        if next != self.state {
            match next {
                NetworkState::Up => info!("Network: link up"),
                NetworkState::Down => {
                    self.drops += 1;
                    warn!("Network: link down (drop #{})", self.drops);
                }
            }
            self.state = next;
        }
        self.state
    }

    pub fn state(&self) -> NetworkState {
        self.state
    }

    /// Number of up → down transitions seen.
    pub fn drops(&self) -> u32 {
        self.drops
    }
}

/// Whether the WiFi station is associated with an access point.
#[cfg(target_os = "espidf")]
pub fn probe_station_link() -> bool {
    let mut ap_info = esp_idf_svc::sys::wifi_ap_record_t::default();
    // SAFETY: called from the single control task after the WiFi driver
    // has been started; `ap_info` outlives the call.
    let ret = unsafe { esp_idf_svc::sys::esp_wifi_sta_get_ap_info(&mut ap_info) };
    ret == esp_idf_svc::sys::ESP_OK
}

/// Simulation: the link is always up.
#[cfg(not(target_os = "espidf"))]
pub fn probe_station_link() -> bool {
    true
}
