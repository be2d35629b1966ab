//! Board abstraction
//!
//! The operation set every board variant supplies to the rest of the
//! device: network bring-up, transport construction, and identity
//! reporting. The application core holds a `dyn Board` and never learns
//! which hardware sits underneath.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signal::SignalLevel;
use crate::status::StatusDescriptor;
use crate::transport::{
    HttpClient, MqttClient, TransportBuildError, UdpClient, WebSocketClient,
};

// ============================================================
// ERRORS
// ============================================================

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board configuration: {0}")]
    Config(String),
}

// ============================================================
// CONFIGURATION
// ============================================================

/// Fixed board parameters, chosen per build rather than by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board type tag reported through the status descriptor.
    pub board_type: String,
    /// Serial link speed in baud.
    pub link_speed: u32,
    /// AT command tracing in the modem driver.
    pub debug_at: bool,
    /// Logical channel the secured transports bind by default.
    pub default_channel: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_type: "ec800".to_string(),
            link_speed: 115_200,
            debug_at: false,
            default_channel: 0,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.board_type.is_empty() {
            return Err(BoardError::Config("board_type must not be empty".into()));
        }
        if self.link_speed == 0 {
            return Err(BoardError::Config("link_speed must be non-zero".into()));
        }
        Ok(())
    }
}

// ============================================================
// BOARD TRAIT
// ============================================================

/// Operations a board variant exposes to the application core.
pub trait Board: Send + Sync {
    /// Fixed board type tag.
    fn board_type(&self) -> &str;

    /// Run the network bring-up sequence. Blocks the calling context until
    /// the first registration attempt resolves; failures surface as alerts
    /// through the status bridge, not as a return value.
    fn start_network(&self);

    /// Build an HTTP client over the board's network link.
    fn create_http(&self) -> Result<HttpClient, TransportBuildError>;

    /// Build a WebSocket client layered on a TLS channel over the board's
    /// network link.
    fn create_web_socket(&self) -> Result<WebSocketClient, TransportBuildError>;

    /// Build an MQTT client over the board's network link.
    fn create_mqtt(&self) -> Result<MqttClient, TransportBuildError>;

    /// Build a UDP client over the board's network link.
    fn create_udp(&self) -> Result<UdpClient, TransportBuildError>;

    /// Indicator bucket for the board's current link state. Pure and
    /// uncached; callers re-query as quality drifts.
    fn network_state_icon(&self) -> SignalLevel;

    /// Point-in-time identity snapshot for diagnostics and update
    /// eligibility checks.
    fn status_descriptor(&self) -> StatusDescriptor;

    /// Request a power-save policy change.
    fn set_power_save_mode(&self, enabled: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = BoardConfig::default();
        assert_eq!(config.board_type, "ec800");
        assert_eq!(config.link_speed, 115_200);
        assert!(!config.debug_at);
        assert_eq!(config.default_channel, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_board_type() {
        let config = BoardConfig {
            board_type: String::new(),
            ..BoardConfig::default()
        };
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }

    #[test]
    fn validate_rejects_zero_link_speed() {
        let config = BoardConfig {
            link_speed: 0,
            ..BoardConfig::default()
        };
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = BoardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
