//! Modem capability seam
//!
//! The AT-command driver for the cellular module lives outside this crate.
//! Everything the core knows about the modem passes through the narrow
//! [`ModemCapability`] interface, which keeps the bring-up logic testable
//! against a scripted stand-in and portable across module families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one blocking registration wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationOutcome {
    /// Registered on the network. Data services may come up.
    Success,
    /// The SIM demanded or rejected a PIN.
    PinError,
    /// Registration was refused for a non-PIN reason.
    RegistrationError,
}

impl RegistrationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationOutcome::Success)
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationOutcome::Success => write!(f, "Success"),
            RegistrationOutcome::PinError => write!(f, "PinError"),
            RegistrationOutcome::RegistrationError => write!(f, "RegistrationError"),
        }
    }
}

/// Handler invoked when the module announces it is materially present
/// again, typically after a power-save reset. May fire on any thread.
pub type MaterialReadyHandler = Box<dyn Fn() + Send + Sync>;

/// Interface onto the external modem driver.
///
/// Identity getters are infallible by contract: a field the driver cannot
/// produce comes back as an empty string rather than an error, and an
/// unknown signal quality comes back as `-1`.
pub trait ModemCapability: Send + Sync {
    /// Toggle AT command tracing in the driver.
    fn set_debug_mode(&self, enabled: bool);

    /// Fix the serial link speed in baud.
    fn set_link_speed(&self, baud: u32);

    /// Install the handler for the module's asynchronous material-ready
    /// signal, replacing any previous one. The driver may fire it zero or
    /// more times, from any thread. Handlers must not block and must not
    /// touch shared device state directly.
    fn on_material_ready(&self, handler: MaterialReadyHandler);

    /// Block the calling context until the driver resolves the current
    /// registration attempt.
    fn wait_for_network_ready(&self) -> RegistrationOutcome;

    /// Module product name, e.g. "EC800M".
    fn module_name(&self) -> String;

    fn imei(&self) -> String;

    fn iccid(&self) -> String;

    /// Operator name for the currently registered network.
    fn carrier_name(&self) -> String;

    /// CSQ-style signal quality: `-1` when unknown, otherwise nominally
    /// `0..=31`. Callers must tolerate values outside that range.
    fn signal_quality(&self) -> i32;

    /// Whether the module currently holds network registration.
    fn network_ready(&self) -> bool;
}
