//! Board status descriptor
//!
//! A point-in-time snapshot of board and modem identity, serialized for
//! diagnostics and update eligibility checks. The key names, their order,
//! and the string encoding of `csq` are parsed by external tooling and
//! must not drift.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::modem::ModemCapability;

/// Identity snapshot reported by a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDescriptor {
    #[serde(rename = "type")]
    pub board_type: String,
    /// The module product name doubles as the hardware revision tag.
    pub revision: String,
    pub carrier: String,
    /// Raw CSQ integer, carried as a string on the wire.
    #[serde(
        serialize_with = "csq_to_string",
        deserialize_with = "csq_from_string"
    )]
    pub csq: i32,
    pub imei: String,
    pub iccid: String,
}

impl StatusDescriptor {
    /// Snapshot current values from the modem. Unavailable identity fields
    /// surface as empty strings and an unknown quality as `-1`, so the
    /// snapshot itself never fails.
    pub fn collect(board_type: &str, modem: &dyn ModemCapability) -> Self {
        Self {
            board_type: board_type.to_string(),
            revision: modem.module_name(),
            carrier: modem.carrier_name(),
            csq: modem.signal_quality(),
            imei: modem.imei(),
            iccid: modem.iccid(),
        }
    }

    /// Render the stable wire form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn csq_to_string<S>(csq: &i32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(csq)
}

fn csq_from_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<i32>().map_err(serde::de::Error::custom)
}
