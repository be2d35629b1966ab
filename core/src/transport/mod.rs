// Transport module - factory and client handles over the modem link

pub mod abstraction;
pub mod clients;
pub mod factory;

pub use abstraction::{ChannelId, TransportBuildError, TransportKind};
pub use clients::{HttpClient, MqttClient, TlsChannel, UdpClient, WebSocketClient};
pub use factory::TransportFactory;
