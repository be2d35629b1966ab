// Terminal status bridge
//
// Renders status, alert, and run-state callbacks as terminal lines,
// standing in for the device display and speaker during diagnostics.

use cellbridge_core::{Alert, DeviceRunState, StatusBridge, StatusKey};
use colored::*;

pub struct PrintBridge;

impl StatusBridge for PrintBridge {
    fn set_status(&self, key: StatusKey) {
        println!("  {} {}", "status".dimmed(), key.to_string().bright_cyan());
    }

    fn alert(&self, alert: Alert) {
        println!(
            "  {} {} (mood {}, sound {})",
            "ALERT".bright_red().bold(),
            alert.reason.to_string().bright_yellow(),
            alert.mood,
            alert.sound
        );
    }

    fn set_device_state(&self, state: DeviceRunState) {
        println!(
            "  {} {}",
            "state".dimmed(),
            state.to_string().bright_green()
        );
    }
}
