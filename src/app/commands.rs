//! Inbound commands to the appliance.
//!
//! These represent operator intents fetched from the remote command
//! document that the [`CommandPoller`](crate::sync::poll::CommandPoller)
//! applies through the [`AppliancePort`](super::ports::AppliancePort).

use super::ports::AppliancePort;

/// Recognized operator commands.  All of them are idempotent, so a
/// redelivery after a crash between apply and acknowledge is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplianceCommand {
    /// Switch the heater off.  Wins over `On` if both are present.
    Off,

    /// Switch the heater on.
    On,

    /// Change the target temperature.
    SetTemp(u8),
}

impl ApplianceCommand {
    /// Drive the appliance.
    pub fn apply(self, appliance: &mut impl AppliancePort) {
        match self {
            Self::Off => appliance.off(),
            Self::On => appliance.on(),
            Self::SetTemp(temp) => appliance.set_temp(temp),
        }
    }
}
