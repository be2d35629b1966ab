// Bring-up module - the registration state machine and its controller

pub mod controller;
pub mod phase;

pub use controller::BringUpController;
pub use phase::BringUpPhase;
