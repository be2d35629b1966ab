//! Device status and alert capability
//!
//! The display, audio, and application-state layers live outside this
//! crate; bring-up reaches them only through [`StatusBridge`]. Status text
//! travels as stable keys so localization stays on the device side.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================
// STATUS AND STATE KEYS
// ============================================================

/// Keys for the transient status line shown during bring-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKey {
    /// Probing the serial link for the module.
    DetectingModule,
    /// Blocked on network registration.
    RegisteringNetwork,
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKey::DetectingModule => write!(f, "detecting_module"),
            StatusKey::RegisteringNetwork => write!(f, "registering_network"),
        }
    }
}

/// Coarse application run state bring-up is allowed to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceRunState {
    Starting,
    Idle,
    Fault,
}

impl fmt::Display for DeviceRunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceRunState::Starting => write!(f, "starting"),
            DeviceRunState::Idle => write!(f, "idle"),
            DeviceRunState::Fault => write!(f, "fault"),
        }
    }
}

// ============================================================
// ALERTS
// ============================================================

/// Alert title key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertTitle {
    Error,
}

impl fmt::Display for AlertTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertTitle::Error => write!(f, "error"),
        }
    }
}

/// Machine-readable alert reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertReason {
    PinError,
    RegistrationError,
}

impl fmt::Display for AlertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertReason::PinError => write!(f, "pin_error"),
            AlertReason::RegistrationError => write!(f, "registration_error"),
        }
    }
}

/// Mood hint for the device face while the alert shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Neutral,
    Happy,
    Sad,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Neutral => write!(f, "neutral"),
            Mood::Happy => write!(f, "happy"),
            Mood::Sad => write!(f, "sad"),
        }
    }
}

/// Sound cue played with an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    PinError,
    RegistrationError,
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundCue::PinError => write!(f, "err_pin"),
            SoundCue::RegistrationError => write!(f, "err_reg"),
        }
    }
}

/// A categorized, user-visible alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: AlertTitle,
    pub reason: AlertReason,
    pub mood: Mood,
    pub sound: SoundCue,
}

impl Alert {
    /// The alert raised when the SIM demands or rejects a PIN.
    pub fn pin_error() -> Self {
        Self {
            title: AlertTitle::Error,
            reason: AlertReason::PinError,
            mood: Mood::Sad,
            sound: SoundCue::PinError,
        }
    }

    /// The alert raised when network registration is refused.
    pub fn registration_error() -> Self {
        Self {
            title: AlertTitle::Error,
            reason: AlertReason::RegistrationError,
            mood: Mood::Sad,
            sound: SoundCue::RegistrationError,
        }
    }
}

// ============================================================
// BRIDGE TRAIT
// ============================================================

/// Interface onto the device's status, alert, and run-state surfaces.
///
/// Implementations must be cheap and non-blocking: bring-up calls these
/// from its own control flow and expects them to return promptly.
pub trait StatusBridge: Send + Sync {
    /// Replace the transient status line.
    fn set_status(&self, key: StatusKey);

    /// Raise a user-visible alert.
    fn alert(&self, alert: Alert);

    /// Set the coarse application run state.
    fn set_device_state(&self, state: DeviceRunState);
}
