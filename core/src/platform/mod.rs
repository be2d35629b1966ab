//! Platform integration layer
//!
//! This module provides:
//! - The status/alert/run-state bridge onto the device surfaces
//! - Main-context task scheduling for work arriving on foreign threads

pub mod bridge;
pub mod scheduler;

pub use bridge::{
    Alert, AlertReason, AlertTitle, DeviceRunState, Mood, SoundCue, StatusBridge, StatusKey,
};
pub use scheduler::{Scheduler, Task, TaskQueue};
