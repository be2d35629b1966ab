// Demo: Cellular Network Bring-Up
//
// Walks the board through a refused registration, a material-ready
// recovery, and transport construction over the recovered link. Every
// device-facing callback is printed as it happens.

use cellbridge_core::{
    Alert, Board, BoardConfig, CellularBoard, DeviceRunState, RegistrationOutcome, SimModem,
    StatusBridge, StatusKey, TaskQueue,
};
use std::sync::Arc;

struct ConsoleBridge;

impl StatusBridge for ConsoleBridge {
    fn set_status(&self, key: StatusKey) {
        println!("   [bridge] status -> {}", key);
    }

    fn alert(&self, alert: Alert) {
        println!(
            "   [bridge] ALERT {} (mood {}, sound {})",
            alert.reason, alert.mood, alert.sound
        );
    }

    fn set_device_state(&self, state: DeviceRunState) {
        println!("   [bridge] run state -> {}", state);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("CellBridge Bring-Up Demo");
    println!("========================\n");

    // The scripted modem refuses the first registration, then succeeds.
    let modem = Arc::new(SimModem::new());
    modem.push_outcome(RegistrationOutcome::RegistrationError);
    modem.push_outcome(RegistrationOutcome::Success);

    let queue = Arc::new(TaskQueue::new());
    let board = CellularBoard::new(
        BoardConfig::default(),
        modem.clone(),
        queue.clone(),
        Arc::new(ConsoleBridge),
    )?;

    println!("Step 1: Initial bring-up (network will refuse)");
    println!("----------------------------------------------");
    board.start_network();
    println!("   phase: {}\n", board.bring_up_phase());

    println!("Step 2: Module announces material ready");
    println!("---------------------------------------");
    modem.fire_material_ready();
    println!("   {} attempt(s) queued for the main context", queue.pending());
    let ran = queue.run_pending();
    println!("   drained {} task(s)", ran);
    println!("   phase: {}\n", board.bring_up_phase());

    println!("Step 3: Reporting surfaces");
    println!("--------------------------");
    println!("   icon:       {}", board.network_state_icon());
    println!("   descriptor: {}\n", board.status_descriptor().to_json()?);

    println!("Step 4: Transports over the live link");
    println!("-------------------------------------");
    let http = board.create_http()?;
    let ws = board.create_web_socket()?;
    let mqtt = board.create_mqtt()?;
    let udp = board.create_udp()?;
    println!("   built {}", http.kind());
    println!("   built {} on {}", ws.kind(), ws.channel());
    println!("   built {} on {}", mqtt.kind(), mqtt.channel());
    println!("   built {} on {}", udp.kind(), udp.channel());

    println!("\nDemo Complete!");
    println!("==============");
    println!("Try the integration tests for more:");
    println!("  cargo test --test integration_bringup -- --nocapture\n");

    Ok(())
}
