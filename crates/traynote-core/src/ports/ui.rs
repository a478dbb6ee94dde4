//! Outbound notifications to the rendered UI pages.

use serde::Serialize;

use super::window::WindowKind;

/// Messages pushed from the core to a window's UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UiMessage {
    /// The save shortcut was pressed while the editor had focus.
    SaveShortcutPressed,
}

impl UiMessage {
    /// Channel name used by the UI transport.
    pub const fn channel(self) -> &'static str {
        match self {
            Self::SaveShortcutPressed => "saveShortcutPressed",
        }
    }
}

/// Transport to the UI layer.
pub trait UiNotifier: Send + Sync {
    fn notify(&self, window: WindowKind, message: UiMessage);
}

