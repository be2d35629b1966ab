//! Network bring-up controller
//!
//! Drives the modem from power-on to network-ready and owns the policy
//! for what happens when it cannot: raise one alert and stop. There is no
//! internal retry loop. The only path to another attempt is the module's
//! own material-ready signal, which arrives on a foreign thread and is
//! re-queued onto the main context before it may touch device state.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::phase::BringUpPhase;
use crate::board::BoardConfig;
use crate::modem::{ModemCapability, RegistrationOutcome};
use crate::platform::{Alert, DeviceRunState, Scheduler, StatusBridge, StatusKey};

struct ControllerInner {
    config: BoardConfig,
    modem: Arc<dyn ModemCapability>,
    scheduler: Arc<dyn Scheduler>,
    bridge: Arc<dyn StatusBridge>,
    phase: RwLock<BringUpPhase>,
    attempts: AtomicU64,
}

impl ControllerInner {
    fn transition(&self, to: BringUpPhase) {
        let mut phase = self.phase.write();
        if !phase.can_transition_to(to) {
            warn!("irregular bring-up transition: {} -> {}", *phase, to);
        }
        debug!("bring-up phase: {} -> {}", *phase, to);
        *phase = to;
    }

    /// Run one blocking registration wait and resolve it. Serialized by
    /// construction: the initial call runs inline on the main context and
    /// re-attempts run from the scheduler drain on the same context.
    fn wait_for_network_ready(&self) -> BringUpPhase {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        self.transition(BringUpPhase::RegisteringWait);
        self.bridge.set_status(StatusKey::RegisteringNetwork);

        let resolved = match self.modem.wait_for_network_ready() {
            RegistrationOutcome::PinError => {
                warn!("registration attempt {} failed: PIN error", attempt);
                self.bridge.alert(Alert::pin_error());
                BringUpPhase::PinFailed
            }
            RegistrationOutcome::RegistrationError => {
                warn!("registration attempt {} failed: network refused", attempt);
                self.bridge.alert(Alert::registration_error());
                BringUpPhase::RegFailed
            }
            RegistrationOutcome::Success => {
                info!("Modem module: {}", self.modem.module_name());
                info!("Modem IMEI: {}", self.modem.imei());
                info!("Modem ICCID: {}", self.modem.iccid());
                BringUpPhase::Ready
            }
        };

        self.transition(resolved);
        resolved
    }
}

/// Cheap handle over the shared bring-up state.
///
/// Clones observe the same attempt counter and phase.
#[derive(Clone)]
pub struct BringUpController {
    inner: Arc<ControllerInner>,
}

impl BringUpController {
    pub fn new(
        config: BoardConfig,
        modem: Arc<dyn ModemCapability>,
        scheduler: Arc<dyn Scheduler>,
        bridge: Arc<dyn StatusBridge>,
    ) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                config,
                modem,
                scheduler,
                bridge,
                phase: RwLock::new(BringUpPhase::Idle),
                attempts: AtomicU64::new(0),
            }),
        }
    }

    /// Phase of the newest attempt.
    pub fn phase(&self) -> BringUpPhase {
        *self.inner.phase.read()
    }

    /// Registration attempts started so far, including the one in flight.
    pub fn attempts(&self) -> u64 {
        self.inner.attempts.load(Ordering::SeqCst)
    }

    /// Run the bring-up sequence: fix link parameters, arm the
    /// material-ready handler, then run the first registration wait inline
    /// on the calling context.
    pub fn start_network(&self) {
        let inner = &self.inner;
        inner.transition(BringUpPhase::Detecting);
        inner.bridge.set_status(StatusKey::DetectingModule);
        inner.modem.set_debug_mode(inner.config.debug_at);
        inner.modem.set_link_speed(inner.config.link_speed);

        // The raw material-ready callback runs on the driver's thread.
        // Hand the new attempt to the main context; once there, drop the
        // run state back to idle before waiting again.
        let hook = Arc::clone(inner);
        inner.modem.on_material_ready(Box::new(move || {
            info!("modem material ready, queueing re-attempt");
            let deferred = Arc::clone(&hook);
            hook.scheduler.schedule(Box::new(move || {
                deferred.bridge.set_device_state(DeviceRunState::Idle);
                deferred.wait_for_network_ready();
            }));
        }));

        inner.wait_for_network_ready();
    }

    /// Run one registration wait on the calling context and return the
    /// resolved phase.
    pub fn wait_for_network_ready(&self) -> BringUpPhase {
        self.inner.wait_for_network_ready()
    }
}
