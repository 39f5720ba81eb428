//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements             | Connects to               |
//! |----------------|------------------------|---------------------------|
//! | `clock`        | TimeSource             | ESP32 system timer        |
//! | `hardware`     | AppliancePort          | kettle link + scale       |
//! |                | ScalePort              |                           |
//! | `log_sink`     | EventSink              | Serial log output         |
//! | `memory_store` | RemoteStore            | In-memory document map    |
//! | `network`      | NetworkState (polled)  | ESP-IDF WiFi STA          |
//! | `sim`          | AppliancePort          | Simulated kettle          |
//! |                | ScalePort              | Simulated scale           |

pub mod clock;
pub mod hardware;
pub mod log_sink;
pub mod memory_store;
pub mod network;
pub mod sim;
