//! ESP32 clock adapter.
//!
//! Implements [`TimeSource`] as a 32-bit millisecond counter that wraps
//! like the Arduino `millis()` it replaces (~49.7 days).
//!
//! - **`target_os = "espidf"`**: wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`**: uses `std::time::Instant` for
//!   host-side testing and simulation.

use crate::app::ports::TimeSource;
use crate::sync::time::Millis;

/// Clock adapter for the ESP32 platform.
pub struct Esp32Clock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
    /// Added to the raw reading; lets simulations start near rollover.
    offset_ms: Millis,
}

impl Default for Esp32Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32Clock {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Clock whose readings are shifted by `offset_ms` (wrapping).
    pub fn with_offset(offset_ms: Millis) -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
            offset_ms,
        }
    }

    /// Microseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_us(&self) -> u64 {
        // SAFETY: esp_timer_get_time is a plain counter read with no preconditions.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since boot (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl TimeSource for Esp32Clock {
    fn now_ms(&self) -> Millis {
        // Truncation to 32 bits is the wraparound.
        ((self.uptime_us() / 1_000) as Millis).wrapping_add(self.offset_ms)
    }
}
