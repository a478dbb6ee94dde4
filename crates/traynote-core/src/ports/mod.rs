//! Port definitions (trait abstractions) for the native host.
//!
//! Ports define the interfaces that the core expects from the platform:
//! windows, tray, global hotkeys, OS settings, the file system, the clock
//! and the UI transport. They use only domain types.
//!
//! # Design Rules
//!
//! - No toolkit types in any signature
//! - Calls are synchronous; native callbacks come back through the event bus
//! - Every port is `Send + Sync` so adapters can share one host object

pub mod clock;
pub mod fs;
pub mod hotkey;
pub mod system;
pub mod ui;
pub mod window;

use std::sync::Arc;

use thiserror::Error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fs::{FileSystem, StdFileSystem};
pub use hotkey::{HotkeyAction, HotkeyRegistrar};
pub use system::{LoginItemPort, ThemePort, ThemeSource};
pub use ui::{UiMessage, UiNotifier};
pub use window::{TrayHost, WindowHandle, WindowHost, WindowKind, WindowOptions};

/// Container for all host capabilities.
///
/// Adapters build one of these in their composition root and hand it to
/// `AppCore::start`. A single host object may back several fields.
#[derive(Clone)]
pub struct HostPorts {
    pub fs: Arc<dyn FileSystem>,
    pub windows: Arc<dyn WindowHost>,
    pub tray: Arc<dyn TrayHost>,
    pub hotkeys: Arc<dyn HotkeyRegistrar>,
    pub theme: Arc<dyn ThemePort>,
    pub login_items: Arc<dyn LoginItemPort>,
    pub ui: Arc<dyn UiNotifier>,
    pub clock: Arc<dyn Clock>,
}

/// Failures reported by a host capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The accelerator is malformed or owned by another process.
    #[error("Accelerator '{0}' is not available")]
    AcceleratorUnavailable(String),

    /// The handle does not name a live window.
    #[error("Unknown window handle {0}")]
    UnknownWindow(u64),

    /// Any other native failure.
    #[error("Host operation failed: {0}")]
    Failed(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, serialized
/// command errors).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    #[error(transparent)]
    Notes(#[from] crate::notes::NoteError),

    #[error(transparent)]
    Hotkey(#[from] crate::hotkeys::HotkeyError),

    #[error(transparent)]
    Window(#[from] crate::windows::WindowError),

    #[error(transparent)]
    Path(#[from] crate::paths::PathError),

    #[error(transparent)]
    Host(#[from] HostError),
}
