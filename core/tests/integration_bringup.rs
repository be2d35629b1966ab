//! Integration tests: full bring-up lifecycle over the scripted modem.
//!
//! These tests exercise the public `CellularBoard` API end-to-end: link
//! configuration, the blocking registration wait, alert-and-stop failure
//! policy, and material-ready recovery through the main-context task queue.
//! No hardware, no threads unless a test says so.
//!
//! Run with:
//!   cargo test --test integration_bringup

use parking_lot::Mutex;
use std::sync::Arc;

use cellbridge_core::{
    Alert, Board, BoardConfig, BringUpPhase, CellularBoard, DeviceRunState, ModemCapability,
    RegistrationOutcome, SimModem, StatusBridge, StatusKey, TaskQueue,
};

// ============================================================================
// Helpers
// ============================================================================

/// Records every call the bring-up layer makes on the device surfaces.
#[derive(Default)]
struct RecordingBridge {
    statuses: Mutex<Vec<StatusKey>>,
    alerts: Mutex<Vec<Alert>>,
    states: Mutex<Vec<DeviceRunState>>,
}

impl StatusBridge for RecordingBridge {
    fn set_status(&self, key: StatusKey) {
        self.statuses.lock().push(key);
    }

    fn alert(&self, alert: Alert) {
        self.alerts.lock().push(alert);
    }

    fn set_device_state(&self, state: DeviceRunState) {
        self.states.lock().push(state);
    }
}

/// Stand up a board over a scripted modem.
fn make_board(
    outcomes: &[RegistrationOutcome],
) -> (
    Arc<SimModem>,
    Arc<TaskQueue>,
    Arc<RecordingBridge>,
    CellularBoard,
) {
    let modem = Arc::new(SimModem::new());
    for outcome in outcomes {
        modem.push_outcome(*outcome);
    }
    let queue = Arc::new(TaskQueue::new());
    let bridge = Arc::new(RecordingBridge::default());
    let board = CellularBoard::new(
        BoardConfig::default(),
        modem.clone(),
        queue.clone(),
        bridge.clone(),
    )
    .expect("default board config must validate");
    (modem, queue, bridge, board)
}

// ============================================================================
// Test 1: Happy-path bring-up
// ============================================================================

/// A single successful registration takes the board from Idle to Ready,
/// announces both bring-up stages in order, fixes the link parameters, and
/// raises no alert.
#[test]
fn test_successful_bringup_reaches_ready() {
    let (modem, queue, bridge, board) = make_board(&[RegistrationOutcome::Success]);

    assert_eq!(board.bring_up_phase(), BringUpPhase::Idle);
    board.start_network();

    assert_eq!(board.bring_up_phase(), BringUpPhase::Ready);
    assert!(modem.network_ready(), "modem must report registration");
    assert_eq!(
        modem.debug_mode(),
        Some(false),
        "AT tracing must be off by default"
    );
    assert_eq!(modem.link_speed(), Some(115_200));
    assert_eq!(
        *bridge.statuses.lock(),
        vec![StatusKey::DetectingModule, StatusKey::RegisteringNetwork],
        "bring-up must announce detection before registration"
    );
    assert!(bridge.alerts.lock().is_empty(), "success must not alert");
    assert!(
        bridge.states.lock().is_empty(),
        "the initial attempt must not touch the run state"
    );
    assert_eq!(queue.pending(), 0);
}

// ============================================================================
// Test 2: PIN failure alerts once and stops
// ============================================================================

/// A PIN rejection resolves the attempt as PinFailed, raises exactly the
/// PIN alert, and schedules nothing: bring-up has no retry loop of its own.
#[test]
fn test_pin_failure_alerts_and_stops() {
    let (modem, queue, bridge, board) = make_board(&[RegistrationOutcome::PinError]);

    board.start_network();

    assert_eq!(board.bring_up_phase(), BringUpPhase::PinFailed);
    assert_eq!(*bridge.alerts.lock(), vec![Alert::pin_error()]);
    assert_eq!(modem.wait_calls(), 1, "no spontaneous retry after failure");
    assert_eq!(queue.pending(), 0, "failure must not queue deferred work");
}

// ============================================================================
// Test 3: Registration failure alerts once and stops
// ============================================================================

#[test]
fn test_registration_failure_alerts_and_stops() {
    let (modem, queue, bridge, board) =
        make_board(&[RegistrationOutcome::RegistrationError]);

    board.start_network();

    assert_eq!(board.bring_up_phase(), BringUpPhase::RegFailed);
    assert_eq!(*bridge.alerts.lock(), vec![Alert::registration_error()]);
    assert_eq!(modem.wait_calls(), 1);
    assert_eq!(queue.pending(), 0);
}

// ============================================================================
// Test 4: Material-ready recovery runs on the main context
// ============================================================================

/// After a failed attempt, the module's material-ready signal queues a new
/// attempt instead of running it inline. Draining the queue drops the run
/// state to idle, repeats the registration wait, and reaches Ready without
/// repeating the old alert.
#[test]
fn test_material_ready_recovers_via_queue() {
    let (modem, queue, bridge, board) = make_board(&[
        RegistrationOutcome::RegistrationError,
        RegistrationOutcome::Success,
    ]);

    board.start_network();
    assert_eq!(board.bring_up_phase(), BringUpPhase::RegFailed);

    modem.fire_material_ready();
    assert_eq!(queue.pending(), 1, "the new attempt must be deferred");
    assert_eq!(
        modem.wait_calls(),
        1,
        "no registration wait may run before the drain"
    );
    assert!(bridge.states.lock().is_empty());

    assert_eq!(queue.run_pending(), 1);
    assert_eq!(board.bring_up_phase(), BringUpPhase::Ready);
    assert_eq!(modem.wait_calls(), 2);
    assert_eq!(
        *bridge.states.lock(),
        vec![DeviceRunState::Idle],
        "recovery must reset the run state before waiting"
    );
    assert_eq!(
        bridge.alerts.lock().len(),
        1,
        "recovery must not repeat the failure alert"
    );
}

// ============================================================================
// Test 5: Repeated material-ready signals queue one attempt each
// ============================================================================

/// Two material-ready firings before a drain queue two deferred attempts,
/// no more. The drain runs both; the phase reflects the newest attempt.
#[test]
fn test_double_material_ready_queues_two_attempts() {
    let (modem, queue, bridge, board) = make_board(&[
        RegistrationOutcome::PinError,
        RegistrationOutcome::RegistrationError,
        RegistrationOutcome::Success,
    ]);

    board.start_network();
    assert_eq!(board.bring_up_phase(), BringUpPhase::PinFailed);

    modem.fire_material_ready();
    modem.fire_material_ready();
    assert_eq!(queue.pending(), 2);

    assert_eq!(queue.run_pending(), 2);
    assert_eq!(modem.wait_calls(), 3);
    assert_eq!(board.bring_up_phase(), BringUpPhase::Ready);
    assert_eq!(
        *bridge.states.lock(),
        vec![DeviceRunState::Idle, DeviceRunState::Idle]
    );
    // One alert per failed attempt: the initial PIN failure and the
    // deferred registration refusal.
    assert_eq!(
        *bridge.alerts.lock(),
        vec![Alert::pin_error(), Alert::registration_error()]
    );
    assert_eq!(board.controller().attempts(), 3);
}

// ============================================================================
// Test 6: Material-ready from a foreign thread only schedules
// ============================================================================

/// The raw material-ready callback may fire on the driver's own thread.
/// It must hand off through the scheduler rather than mutate device state
/// from that thread.
#[test]
fn test_material_ready_from_foreign_thread_defers() {
    let (modem, queue, bridge, board) = make_board(&[
        RegistrationOutcome::RegistrationError,
        RegistrationOutcome::Success,
    ]);

    board.start_network();

    let remote = Arc::clone(&modem);
    std::thread::spawn(move || remote.fire_material_ready())
        .join()
        .expect("driver thread must not panic");

    // The foreign thread queued the attempt but ran nothing.
    assert_eq!(queue.pending(), 1);
    assert_eq!(modem.wait_calls(), 1);
    assert!(bridge.states.lock().is_empty());

    queue.run_pending();
    assert_eq!(board.bring_up_phase(), BringUpPhase::Ready);
}

// ============================================================================
// Test 7: Ready board re-registers on a fresh material-ready signal
// ============================================================================

/// A material-ready signal after a successful bring-up starts a fresh
/// attempt: the phase drops into RegisteringWait and resolves again, and
/// the attempt counter advances.
#[test]
fn test_material_ready_after_success_reattempts() {
    let (modem, queue, _bridge, board) = make_board(&[RegistrationOutcome::Success]);

    board.start_network();
    assert_eq!(board.controller().attempts(), 1);

    modem.fire_material_ready();
    queue.run_pending();

    assert_eq!(board.bring_up_phase(), BringUpPhase::Ready);
    assert_eq!(board.controller().attempts(), 2);
    assert_eq!(modem.wait_calls(), 2);
}
