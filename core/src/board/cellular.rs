//! Cellular board variant
//!
//! A board whose network access is a cellular module on a serial link.
//! Wires the bring-up controller, the transport factory, and the status
//! reporting over one shared modem capability.

use std::sync::Arc;
use tracing::{debug, info};

use super::abstraction::{Board, BoardConfig, BoardError};
use crate::bringup::{BringUpController, BringUpPhase};
use crate::modem::ModemCapability;
use crate::platform::{Scheduler, StatusBridge};
use crate::signal::{signal_level, SignalLevel};
use crate::status::StatusDescriptor;
use crate::transport::{
    ChannelId, HttpClient, MqttClient, TransportBuildError, TransportFactory, UdpClient,
    WebSocketClient,
};

pub struct CellularBoard {
    config: BoardConfig,
    modem: Arc<dyn ModemCapability>,
    controller: BringUpController,
    factory: TransportFactory,
}

impl CellularBoard {
    pub fn new(
        config: BoardConfig,
        modem: Arc<dyn ModemCapability>,
        scheduler: Arc<dyn Scheduler>,
        bridge: Arc<dyn StatusBridge>,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        let controller = BringUpController::new(
            config.clone(),
            Arc::clone(&modem),
            scheduler,
            bridge,
        );
        let factory = TransportFactory::new(&modem, ChannelId(config.default_channel));
        info!("cellular board ready (type {})", config.board_type);
        Ok(Self {
            config,
            modem,
            controller,
            factory,
        })
    }

    /// Phase of the newest bring-up attempt.
    pub fn bring_up_phase(&self) -> BringUpPhase {
        self.controller.phase()
    }

    /// Handle onto the shared bring-up state, for observers.
    pub fn controller(&self) -> BringUpController {
        self.controller.clone()
    }
}

impl Board for CellularBoard {
    fn board_type(&self) -> &str {
        &self.config.board_type
    }

    fn start_network(&self) {
        self.controller.start_network();
    }

    fn create_http(&self) -> Result<HttpClient, TransportBuildError> {
        self.factory.create_http()
    }

    fn create_web_socket(&self) -> Result<WebSocketClient, TransportBuildError> {
        self.factory.create_web_socket()
    }

    fn create_mqtt(&self) -> Result<MqttClient, TransportBuildError> {
        self.factory.create_mqtt()
    }

    fn create_udp(&self) -> Result<UdpClient, TransportBuildError> {
        self.factory.create_udp()
    }

    fn network_state_icon(&self) -> SignalLevel {
        signal_level(self.modem.network_ready(), self.modem.signal_quality())
    }

    fn status_descriptor(&self) -> StatusDescriptor {
        StatusDescriptor::collect(&self.config.board_type, self.modem.as_ref())
    }

    fn set_power_save_mode(&self, enabled: bool) {
        // TODO: forward to the modem driver once it exposes a power-save
        // command.
        debug!("power save mode request ignored (enabled = {})", enabled);
    }
}
