//! Transport abstraction layer
//!
//! Core types shared by the transport factory and the client handles it
//! produces.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The protocol family a transport handle speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportKind {
    /// Plain request/response over the modem's data call.
    Http,
    /// WebSocket layered on a TLS channel.
    WebSocket,
    /// MQTT pub/sub session.
    Mqtt,
    /// Connectionless datagrams.
    Udp,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Http => write!(f, "HTTP"),
            TransportKind::WebSocket => write!(f, "WebSocket"),
            TransportKind::Mqtt => write!(f, "MQTT"),
            TransportKind::Udp => write!(f, "UDP"),
        }
    }
}

/// Logical channel index multiplexing sessions over one modem link.
///
/// The modem exposes a small set of parallel session slots; which slot a
/// transport binds is wiring, not policy, so the index travels with the
/// handle from construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub u8);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ch{}", self.0)
    }
}

/// Errors producing a transport handle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportBuildError {
    /// The modem link this factory was bound to no longer exists.
    #[error("modem link dropped")]
    LinkDropped,
    #[error("invalid transport configuration: {0}")]
    Config(String),
}
