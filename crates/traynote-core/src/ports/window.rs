//! Native window and tray capabilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HostError;
use crate::windows::geometry::{Bounds, Position};

/// The two application windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// The note editor; created once and hidden instead of closed.
    Editor,
    /// The settings page; destroyed on close and recreated on demand.
    Settings,
}

impl WindowKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "editor" => Ok(Self::Editor),
            "settings" => Ok(Self::Settings),
            other => Err(format!("unknown window '{other}' (expected editor or settings)")),
        }
    }
}

/// Opaque handle to a native window owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// Creation parameters for a native window.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct WindowOptions {
    pub kind: WindowKind,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub movable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    pub fullscreenable: bool,
    pub visible_on_all_workspaces: bool,
    /// Show immediately after creation.
    pub show: bool,
}

impl WindowOptions {
    /// Fixed-size editor window, hidden at creation.
    pub const fn editor() -> Self {
        Self {
            kind: WindowKind::Editor,
            width: 400,
            height: 400,
            resizable: false,
            movable: false,
            minimizable: false,
            maximizable: false,
            fullscreenable: false,
            visible_on_all_workspaces: true,
            show: false,
        }
    }

    /// Settings window, shown at creation.
    pub const fn settings() -> Self {
        Self {
            kind: WindowKind::Settings,
            width: 600,
            height: 700,
            resizable: true,
            movable: true,
            minimizable: true,
            maximizable: true,
            fullscreenable: false,
            visible_on_all_workspaces: false,
            show: true,
        }
    }
}

/// Native window primitives.
///
/// Calls are synchronous. Events produced by the native side (focus, blur,
/// close requests) are delivered separately through the event bus.
pub trait WindowHost: Send + Sync {
    fn create(&self, options: &WindowOptions) -> Result<WindowHandle, HostError>;

    fn show(&self, handle: WindowHandle) -> Result<(), HostError>;

    fn hide(&self, handle: WindowHandle) -> Result<(), HostError>;

    /// Bring a visible window to the front and give it focus.
    fn focus(&self, handle: WindowHandle) -> Result<(), HostError>;

    /// Un-minimize a window.
    fn restore(&self, handle: WindowHandle) -> Result<(), HostError>;

    /// Destroy the native window.
    fn close(&self, handle: WindowHandle) -> Result<(), HostError>;

    fn set_position(&self, handle: WindowHandle, position: Position) -> Result<(), HostError>;

    /// Current on-screen bounds. The user may have resized the window since
    /// it was created.
    fn window_bounds(&self, handle: WindowHandle) -> Result<Bounds, HostError>;
}

/// Tray icon primitives.
pub trait TrayHost: Send + Sync {
    /// Current screen bounds of the tray icon.
    fn bounds(&self) -> Bounds;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_kind_parses_case_insensitively() {
        assert_eq!("Editor".parse::<WindowKind>(), Ok(WindowKind::Editor));
        assert_eq!(" settings ".parse::<WindowKind>(), Ok(WindowKind::Settings));
        assert!("tray".parse::<WindowKind>().is_err());
    }

    #[test]
    fn test_editor_options_are_fixed_and_hidden() {
        let options = WindowOptions::editor();
        assert_eq!((options.width, options.height), (400, 400));
        assert!(!options.show);
        assert!(!options.movable && !options.resizable);
        assert!(options.visible_on_all_workspaces);
    }
}
