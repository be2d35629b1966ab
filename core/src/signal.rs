//! Signal-quality indicator mapping
//!
//! Collapses the modem's raw CSQ reading into the discrete bucket the
//! device indicator shows. The thresholds are part of the device's visual
//! contract and must not drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Discrete indicator bucket for the cellular link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalLevel {
    Off,
    Bar1,
    Bar2,
    Bar3,
    Bar4,
}

impl SignalLevel {
    /// Number of bars shown, `0` for `Off`.
    pub fn bars(&self) -> u8 {
        match self {
            SignalLevel::Off => 0,
            SignalLevel::Bar1 => 1,
            SignalLevel::Bar2 => 2,
            SignalLevel::Bar3 => 3,
            SignalLevel::Bar4 => 4,
        }
    }
}

impl fmt::Display for SignalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalLevel::Off => write!(f, "Off"),
            SignalLevel::Bar1 => write!(f, "Bar1"),
            SignalLevel::Bar2 => write!(f, "Bar2"),
            SignalLevel::Bar3 => write!(f, "Bar3"),
            SignalLevel::Bar4 => write!(f, "Bar4"),
        }
    }
}

/// Map link readiness and a CSQ-style reading to an indicator bucket.
///
/// `-1` means quality is unknown and shows as `Off` without complaint.
/// Values outside `-1..=31` are logged and also shown as `Off` rather
/// than faulting or landing in a neighboring bucket.
pub fn signal_level(network_ready: bool, csq: i32) -> SignalLevel {
    if !network_ready {
        return SignalLevel::Off;
    }
    match csq {
        -1 => SignalLevel::Off,
        0..=14 => SignalLevel::Bar1,
        15..=19 => SignalLevel::Bar2,
        20..=24 => SignalLevel::Bar3,
        25..=31 => SignalLevel::Bar4,
        other => {
            warn!("CSQ reading out of range: {}", other);
            SignalLevel::Off
        }
    }
}
