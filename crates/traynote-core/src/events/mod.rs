//! Events flowing through the core.
//!
//! # Structure
//!
//! - `change` - setting change notifications, delivered synchronously by the
//!   settings store to per-key listeners
//! - `bus` - host events (tray, hotkeys, window lifecycle) queued by adapters
//!   and dispatched on the control thread

mod bus;
mod change;

use serde::{Deserialize, Serialize};

pub use bus::{EventBus, EventPublisher};
pub use change::{ChangeEvent, ChangeListener, ChangeListeners};

use crate::ports::{HotkeyAction, WindowKind};
use crate::tray::TrayEvent;

/// Host events, in the order the native side produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum AppEvent {
    /// Tray icon click or tray menu item.
    Tray(TrayEvent),

    /// A registered global hotkey was pressed.
    HotkeyPressed(HotkeyAction),

    WindowFocused(WindowKind),

    WindowBlurred(WindowKind),

    WindowMinimized(WindowKind),

    /// The user asked to close a window. The core decides whether to allow it.
    WindowCloseRequested(WindowKind),

    /// The native window is gone.
    WindowClosed(WindowKind),

    /// The application is about to exit.
    Quitting,
}
