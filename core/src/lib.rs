// CellBridge Core - cellular network bring-up and transport provisioning
//
// Takes a cellular module from power-on to network-ready, reports progress
// and failure to the rest of the device, and hands out protocol transports
// bound to the live modem link.

pub mod board;
pub mod bringup;
pub mod modem;
pub mod platform;
pub mod signal;
pub mod status;
pub mod transport;

pub use board::{Board, BoardConfig, BoardError, CellularBoard};
pub use bringup::{BringUpController, BringUpPhase};
pub use modem::{MaterialReadyHandler, ModemCapability, RegistrationOutcome, SimModem, SimProfile};
pub use platform::{
    Alert, AlertReason, AlertTitle, DeviceRunState, Mood, Scheduler, SoundCue, StatusBridge,
    StatusKey, Task, TaskQueue,
};
pub use signal::{signal_level, SignalLevel};
pub use status::StatusDescriptor;
pub use transport::{
    ChannelId, HttpClient, MqttClient, TlsChannel, TransportBuildError, TransportFactory,
    TransportKind, UdpClient, WebSocketClient,
};
