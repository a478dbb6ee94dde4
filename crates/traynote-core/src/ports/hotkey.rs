//! Global hotkey capability.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HostError;

/// What a registered accelerator does when pressed.
///
/// The host reports presses back through the event bus tagged with the
/// action it was registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotkeyAction {
    /// Show or hide the editor window.
    ToggleEditor,
    /// Ask the editor UI to save the current note.
    SaveNote,
    /// Hide the editor window.
    HideEditor,
    /// Swallow the reload shortcut.
    BlockReload,
    /// Close the settings window.
    CloseSettings,
    /// Temporary registration used to test an accelerator's availability.
    Probe,
}

impl HotkeyAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToggleEditor => "toggle-editor",
            Self::SaveNote => "save-note",
            Self::HideEditor => "hide-editor",
            Self::BlockReload => "block-reload",
            Self::CloseSettings => "close-settings",
            Self::Probe => "probe",
        }
    }
}

impl fmt::Display for HotkeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotkeyAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "toggle-editor" | "toggle" => Ok(Self::ToggleEditor),
            "save-note" | "save" => Ok(Self::SaveNote),
            "hide-editor" | "hide" => Ok(Self::HideEditor),
            "block-reload" | "reload" => Ok(Self::BlockReload),
            "close-settings" => Ok(Self::CloseSettings),
            "probe" => Ok(Self::Probe),
            other => Err(format!("unknown hotkey action '{other}'")),
        }
    }
}

/// OS-level global hotkey registration.
#[cfg_attr(test, mockall::automock)]
pub trait HotkeyRegistrar: Send + Sync {
    /// Register `accelerator` for `action`.
    ///
    /// Fails when the accelerator is malformed or owned by another process.
    fn register(&self, accelerator: &str, action: HotkeyAction) -> Result<(), HostError>;

    /// Best-effort removal. Unknown accelerators are ignored.
    fn unregister(&self, accelerator: &str);

    fn is_registered(&self, accelerator: &str) -> bool;

    fn unregister_all(&self);
}
