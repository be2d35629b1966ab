// Modem module - capability seam onto the AT-command driver plus the
// scriptable simulator used by tests and the CLI

pub mod capability;
pub mod sim;

pub use capability::{MaterialReadyHandler, ModemCapability, RegistrationOutcome};
pub use sim::{SimModem, SimProfile};
