//! Protocol client handles
//!
//! Opaque, independently owned products of the transport factory. Each
//! handle pins the modem link it was built over for its own lifetime; the
//! protocol machinery itself lives in the layers that consume these
//! handles. A freshly built handle has negotiated nothing yet, so
//! construction succeeds even while the network is down.

use std::fmt;
use std::sync::Arc;

use super::abstraction::{ChannelId, TransportKind};
use crate::modem::ModemCapability;

// ============================================================
// TLS CHANNEL
// ============================================================

/// TLS-capable byte channel bound to one logical slot of the modem link.
pub struct TlsChannel {
    link: Arc<dyn ModemCapability>,
    channel: ChannelId,
}

impl TlsChannel {
    pub fn new(link: Arc<dyn ModemCapability>, channel: ChannelId) -> Self {
        Self { link, channel }
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    /// Whether the underlying link currently holds registration.
    pub fn link_ready(&self) -> bool {
        self.link.network_ready()
    }

    /// The modem link this channel rides on.
    pub fn link(&self) -> Arc<dyn ModemCapability> {
        Arc::clone(&self.link)
    }
}

impl fmt::Debug for TlsChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsChannel")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

// ============================================================
// CLIENT HANDLES
// ============================================================

/// HTTP client over the modem's data call.
pub struct HttpClient {
    link: Arc<dyn ModemCapability>,
}

impl HttpClient {
    pub fn new(link: Arc<dyn ModemCapability>) -> Self {
        Self { link }
    }

    pub fn kind(&self) -> TransportKind {
        TransportKind::Http
    }

    pub fn link_ready(&self) -> bool {
        self.link.network_ready()
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}

/// WebSocket client layered on a [`TlsChannel`].
pub struct WebSocketClient {
    tls: TlsChannel,
}

impl WebSocketClient {
    pub fn new(tls: TlsChannel) -> Self {
        Self { tls }
    }

    pub fn kind(&self) -> TransportKind {
        TransportKind::WebSocket
    }

    pub fn channel(&self) -> ChannelId {
        self.tls.channel()
    }

    pub fn link_ready(&self) -> bool {
        self.tls.link_ready()
    }
}

impl fmt::Debug for WebSocketClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebSocketClient")
            .field("tls", &self.tls)
            .finish()
    }
}

/// MQTT client bound to one logical channel.
pub struct MqttClient {
    link: Arc<dyn ModemCapability>,
    channel: ChannelId,
}

impl MqttClient {
    pub fn new(link: Arc<dyn ModemCapability>, channel: ChannelId) -> Self {
        Self { link, channel }
    }

    pub fn kind(&self) -> TransportKind {
        TransportKind::Mqtt
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    pub fn link_ready(&self) -> bool {
        self.link.network_ready()
    }
}

impl fmt::Debug for MqttClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MqttClient")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

/// UDP client bound to one logical channel.
pub struct UdpClient {
    link: Arc<dyn ModemCapability>,
    channel: ChannelId,
}

impl UdpClient {
    pub fn new(link: Arc<dyn ModemCapability>, channel: ChannelId) -> Self {
        Self { link, channel }
    }

    pub fn kind(&self) -> TransportKind {
        TransportKind::Udp
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    pub fn link_ready(&self) -> bool {
        self.link.network_ready()
    }
}

impl fmt::Debug for UdpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UdpClient")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}
