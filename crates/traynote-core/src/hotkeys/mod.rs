//! Global hotkey ownership.
//!
//! - `coordinator` - the persisted "toggle editor" accelerator
//! - `focus` - accelerators that only live while a window has focus

mod coordinator;
mod focus;

use thiserror::Error;

pub use coordinator::HotkeyCoordinator;
pub use focus::{FocusBinding, FocusHotkeys};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HotkeyError {
    /// The accelerator is malformed or owned elsewhere. Nothing stays registered.
    #[error("Shortcut '{accelerator}' can't be registered: {reason}")]
    Conflict { accelerator: String, reason: String },

    /// A shortcut representation was supplied without an accelerator.
    #[error("A shortcut representation needs an accelerator")]
    MissingAccelerator,
}
