//! Bring-up phases
//!
//! Observable lifecycle of a network bring-up attempt. Failure phases are
//! terminal for the attempt, not the device: a fresh material-ready signal
//! from the module starts a new attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the current bring-up attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BringUpPhase {
    /// No attempt has started.
    Idle,
    /// Probing for the module and fixing link parameters.
    Detecting,
    /// Blocked on the modem's registration wait.
    RegisteringWait,
    /// The newest attempt registered successfully.
    Ready,
    /// The newest attempt ended with a SIM PIN rejection.
    PinFailed,
    /// The newest attempt ended with a registration refusal.
    RegFailed,
}

impl BringUpPhase {
    /// Whether a direct transition to `target` is part of the normal
    /// lifecycle.
    pub fn can_transition_to(&self, target: BringUpPhase) -> bool {
        use BringUpPhase::*;
        match (self, target) {
            (Idle, Detecting) => true,
            (Detecting, RegisteringWait) => true,
            (RegisteringWait, Ready) => true,
            (RegisteringWait, PinFailed) => true,
            (RegisteringWait, RegFailed) => true,
            // A material-ready signal starts a new attempt from any
            // resolved phase.
            (Ready, RegisteringWait) => true,
            (PinFailed, RegisteringWait) => true,
            (RegFailed, RegisteringWait) => true,
            _ => false,
        }
    }

    /// Whether this phase resolves an attempt.
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            BringUpPhase::Ready | BringUpPhase::PinFailed | BringUpPhase::RegFailed
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, BringUpPhase::PinFailed | BringUpPhase::RegFailed)
    }
}

impl fmt::Display for BringUpPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BringUpPhase::Idle => write!(f, "Idle"),
            BringUpPhase::Detecting => write!(f, "Detecting"),
            BringUpPhase::RegisteringWait => write!(f, "RegisteringWait"),
            BringUpPhase::Ready => write!(f, "Ready"),
            BringUpPhase::PinFailed => write!(f, "PinFailed"),
            BringUpPhase::RegFailed => write!(f, "RegFailed"),
        }
    }
}
