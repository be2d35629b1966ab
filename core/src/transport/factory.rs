//! Transport factory
//!
//! Builds protocol client handles over the shared modem link. The factory
//! holds only a weak reference to the link: it can never keep the modem
//! alive on its own, and it never retains the handles it returns, so every
//! product is independently owned by its caller.

use std::sync::{Arc, Weak};
use tracing::debug;

use super::abstraction::{ChannelId, TransportBuildError, TransportKind};
use super::clients::{HttpClient, MqttClient, TlsChannel, UdpClient, WebSocketClient};
use crate::modem::ModemCapability;

pub struct TransportFactory {
    link: Weak<dyn ModemCapability>,
    default_channel: ChannelId,
}

impl TransportFactory {
    pub fn new(link: &Arc<dyn ModemCapability>, default_channel: ChannelId) -> Self {
        Self {
            link: Arc::downgrade(link),
            default_channel,
        }
    }

    /// Channel the secured transports bind when no other slot is named.
    pub fn default_channel(&self) -> ChannelId {
        self.default_channel
    }

    fn live_link(&self) -> Result<Arc<dyn ModemCapability>, TransportBuildError> {
        self.link
            .upgrade()
            .ok_or(TransportBuildError::LinkDropped)
    }

    pub fn create_http(&self) -> Result<HttpClient, TransportBuildError> {
        let link = self.live_link()?;
        debug!("building {} client", TransportKind::Http);
        Ok(HttpClient::new(link))
    }

    /// WebSocket rides a TLS channel on the default slot.
    pub fn create_web_socket(&self) -> Result<WebSocketClient, TransportBuildError> {
        let link = self.live_link()?;
        debug!(
            "building {} client on {}",
            TransportKind::WebSocket,
            self.default_channel
        );
        let tls = TlsChannel::new(link, self.default_channel);
        Ok(WebSocketClient::new(tls))
    }

    pub fn create_mqtt(&self) -> Result<MqttClient, TransportBuildError> {
        let link = self.live_link()?;
        debug!(
            "building {} client on {}",
            TransportKind::Mqtt,
            self.default_channel
        );
        Ok(MqttClient::new(link, self.default_channel))
    }

    pub fn create_udp(&self) -> Result<UdpClient, TransportBuildError> {
        let link = self.live_link()?;
        debug!(
            "building {} client on {}",
            TransportKind::Udp,
            self.default_channel
        );
        Ok(UdpClient::new(link, self.default_channel))
    }
}
