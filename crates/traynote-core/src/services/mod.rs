//! Core services: the orchestrator and its command surface.
//!
//! Services orchestrate between ports and domain logic and never know about
//! concrete host implementations.

mod app_core;
mod commands;
mod config;

pub use app_core::AppCore;
pub use commands::{CommandError, NewValue, SettingsData, ShortcutData, UI_PROCESS, UiLogLevel};
pub use config::AppConfig;
