//! Simulated modem
//!
//! An in-memory `ModemCapability` driven entirely by a script. Tests and
//! the diagnostic CLI use it in place of real hardware: registration waits
//! resolve from a queue of pre-loaded outcomes, and the material-ready
//! signal fires on demand.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

use super::capability::{MaterialReadyHandler, ModemCapability, RegistrationOutcome};

/// Identity and signal values the simulated modem reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimProfile {
    pub module_name: String,
    pub imei: String,
    pub iccid: String,
    pub carrier: String,
    pub signal_quality: i32,
}

impl Default for SimProfile {
    fn default() -> Self {
        Self {
            module_name: "EC800M".to_string(),
            imei: "123456789012345".to_string(),
            iccid: "89860000000000000000".to_string(),
            carrier: "TestCarrier".to_string(),
            signal_quality: 18,
        }
    }
}

struct SimState {
    profile: SimProfile,
    outcomes: VecDeque<RegistrationOutcome>,
    network_ready: bool,
    debug_mode: Option<bool>,
    link_speed: Option<u32>,
    wait_calls: u32,
}

/// Scriptable modem double.
///
/// Registration waits pop outcomes front-to-back; the last scripted
/// outcome repeats once the queue is down to one entry, and an empty
/// script resolves as `Success`. A `Success` wait flips `network_ready`
/// on, a failed one flips it off.
pub struct SimModem {
    state: Mutex<SimState>,
    ready_handler: Mutex<Option<Arc<dyn Fn() + Send + Sync>>>,
}

impl SimModem {
    pub fn new() -> Self {
        Self::with_profile(SimProfile::default())
    }

    pub fn with_profile(profile: SimProfile) -> Self {
        Self {
            state: Mutex::new(SimState {
                profile,
                outcomes: VecDeque::new(),
                network_ready: false,
                debug_mode: None,
                link_speed: None,
                wait_calls: 0,
            }),
            ready_handler: Mutex::new(None),
        }
    }

    /// Append an outcome to the registration script.
    pub fn push_outcome(&self, outcome: RegistrationOutcome) {
        self.state.lock().outcomes.push_back(outcome);
    }

    pub fn set_signal_quality(&self, csq: i32) {
        self.state.lock().profile.signal_quality = csq;
    }

    pub fn set_network_ready(&self, ready: bool) {
        self.state.lock().network_ready = ready;
    }

    /// Fire the material-ready signal, as the driver would after the module
    /// re-announces itself. Runs the installed handler on the calling
    /// thread; a no-op when no handler is installed.
    pub fn fire_material_ready(&self) {
        let handler = self.ready_handler.lock().clone();
        match handler {
            Some(handler) => handler(),
            None => debug!("material-ready fired with no handler installed"),
        }
    }

    /// Last value passed to `set_debug_mode`, if any.
    pub fn debug_mode(&self) -> Option<bool> {
        self.state.lock().debug_mode
    }

    /// Last value passed to `set_link_speed`, if any.
    pub fn link_speed(&self) -> Option<u32> {
        self.state.lock().link_speed
    }

    /// Number of registration waits served so far.
    pub fn wait_calls(&self) -> u32 {
        self.state.lock().wait_calls
    }

    pub fn has_material_ready_handler(&self) -> bool {
        self.ready_handler.lock().is_some()
    }
}

impl Default for SimModem {
    fn default() -> Self {
        Self::new()
    }
}

impl ModemCapability for SimModem {
    fn set_debug_mode(&self, enabled: bool) {
        self.state.lock().debug_mode = Some(enabled);
    }

    fn set_link_speed(&self, baud: u32) {
        self.state.lock().link_speed = Some(baud);
    }

    fn on_material_ready(&self, handler: MaterialReadyHandler) {
        *self.ready_handler.lock() = Some(Arc::from(handler));
    }

    fn wait_for_network_ready(&self) -> RegistrationOutcome {
        let mut state = self.state.lock();
        state.wait_calls += 1;
        let outcome = if state.outcomes.len() > 1 {
            state.outcomes.pop_front().unwrap_or(RegistrationOutcome::Success)
        } else {
            state
                .outcomes
                .front()
                .copied()
                .unwrap_or(RegistrationOutcome::Success)
        };
        state.network_ready = outcome.is_success();
        debug!("simulated registration wait resolved: {}", outcome);
        outcome
    }

    fn module_name(&self) -> String {
        self.state.lock().profile.module_name.clone()
    }

    fn imei(&self) -> String {
        self.state.lock().profile.imei.clone()
    }

    fn iccid(&self) -> String {
        self.state.lock().profile.iccid.clone()
    }

    fn carrier_name(&self) -> String {
        self.state.lock().profile.carrier.clone()
    }

    fn signal_quality(&self) -> i32 {
        self.state.lock().profile.signal_quality
    }

    fn network_ready(&self) -> bool {
        self.state.lock().network_ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn default_profile_reports_identity() {
        let modem = SimModem::new();
        assert_eq!(modem.module_name(), "EC800M");
        assert_eq!(modem.imei(), "123456789012345");
        assert_eq!(modem.iccid(), "89860000000000000000");
        assert_eq!(modem.carrier_name(), "TestCarrier");
        assert_eq!(modem.signal_quality(), 18);
        assert!(!modem.network_ready());
    }

    #[test]
    fn empty_script_resolves_success() {
        let modem = SimModem::new();
        assert_eq!(
            modem.wait_for_network_ready(),
            RegistrationOutcome::Success
        );
        assert!(modem.network_ready());
        assert_eq!(modem.wait_calls(), 1);
    }

    #[test]
    fn script_plays_in_order_and_last_repeats() {
        let modem = SimModem::new();
        modem.push_outcome(RegistrationOutcome::PinError);
        modem.push_outcome(RegistrationOutcome::RegistrationError);
        modem.push_outcome(RegistrationOutcome::Success);

        assert_eq!(
            modem.wait_for_network_ready(),
            RegistrationOutcome::PinError
        );
        assert!(!modem.network_ready());
        assert_eq!(
            modem.wait_for_network_ready(),
            RegistrationOutcome::RegistrationError
        );
        assert_eq!(
            modem.wait_for_network_ready(),
            RegistrationOutcome::Success
        );
        // Last entry repeats for every wait after the script runs out.
        assert_eq!(
            modem.wait_for_network_ready(),
            RegistrationOutcome::Success
        );
        assert!(modem.network_ready());
        assert_eq!(modem.wait_calls(), 4);
    }

    #[test]
    fn link_settings_are_recorded() {
        let modem = SimModem::new();
        assert_eq!(modem.debug_mode(), None);
        assert_eq!(modem.link_speed(), None);
        modem.set_debug_mode(false);
        modem.set_link_speed(115_200);
        assert_eq!(modem.debug_mode(), Some(false));
        assert_eq!(modem.link_speed(), Some(115_200));
    }

    #[test]
    fn material_ready_replaces_handler_and_fires_repeatedly() {
        let modem = SimModem::new();
        modem.fire_material_ready();

        let stale = Arc::new(AtomicU32::new(0));
        let live = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&stale);
        modem.on_material_ready(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let counter = Arc::clone(&live);
        modem.on_material_ready(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert!(modem.has_material_ready_handler());

        modem.fire_material_ready();
        modem.fire_material_ready();
        assert_eq!(stale.load(Ordering::SeqCst), 0);
        assert_eq!(live.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn material_ready_fires_across_threads() {
        let modem = Arc::new(SimModem::new());
        let hits = Arc::new(AtomicU32::new(0));

        let counter = Arc::clone(&hits);
        modem.on_material_ready(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let remote = Arc::clone(&modem);
        let handle = std::thread::spawn(move || remote.fire_material_ready());
        handle.join().unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
