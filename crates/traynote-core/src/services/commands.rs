//! Inbound command surface used by the UI transport.
//!
//! Each command maps onto one store operation and forwards its result or
//! error unchanged, in a serializable shape.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::app_core::AppCore;
use crate::hotkeys::HotkeyError;
use crate::notes::{NoteError, StoredNote};
use crate::paths::PathError;
use crate::ports::{CoreError, HostError};
use crate::settings::{SettingOption, SettingValue, SettingsDocument, SettingsError, keys};
use crate::windows::WindowError;

/// Serializable command error.
///
/// Produces JSON like `{"type": "InvalidValue", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CommandError {
    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Shortcut unavailable: {0}")]
    HotkeyConflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Persist failed: {0}")]
    Persist(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SettingsError> for CommandError {
    fn from(err: SettingsError) -> Self {
        let message = err.to_string();
        match err {
            SettingsError::UnknownKey(_) => Self::UnknownKey(message),
            SettingsError::InvalidValue { .. } => Self::InvalidValue(message),
            SettingsError::Persist { .. } => Self::Persist(message),
            SettingsError::CorruptConfig { .. } => Self::Internal(message),
        }
    }
}

impl From<NoteError> for CommandError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::StorageUnavailable { .. } => Self::StorageUnavailable(err.to_string()),
            NoteError::InvalidTitle(_) => Self::InvalidInput(err.to_string()),
        }
    }
}

impl From<HotkeyError> for CommandError {
    fn from(err: HotkeyError) -> Self {
        match err {
            HotkeyError::Conflict { .. } => Self::HotkeyConflict(err.to_string()),
            HotkeyError::MissingAccelerator => Self::InvalidInput(err.to_string()),
        }
    }
}

impl From<WindowError> for CommandError {
    fn from(err: WindowError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<PathError> for CommandError {
    fn from(err: PathError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<HostError> for CommandError {
    fn from(err: HostError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Settings(e) => e.into(),
            CoreError::Notes(e) => e.into(),
            CoreError::Hotkey(e) => e.into(),
            CoreError::Window(e) => e.into(),
            CoreError::Path(e) => e.into(),
            CoreError::Host(e) => e.into(),
        }
    }
}

/// Response of `getSettingsData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsData {
    pub settings: SettingsDocument,
}

/// Response of the toggle and path commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewValue<T> {
    pub new_value: T,
}

/// Request of `setGlobalShortcut`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutData {
    pub accelerator: Option<String>,
    pub representation: Option<String>,
}

/// Severity the UI attaches to a `log` message.
///
/// `track` is a startup milestone reported by the UI and is logged at info.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLogLevel {
    #[default]
    Info,
    Warn,
    Debug,
    Error,
    Track,
}

impl UiLogLevel {
    /// Unknown or missing levels log at info.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|level| level.trim().to_ascii_lowercase()).as_deref() {
            Some("warn" | "warning") => Self::Warn,
            Some("debug") => Self::Debug,
            Some("error") => Self::Error,
            Some("track") => Self::Track,
            _ => Self::Info,
        }
    }
}

/// Process name UI log lines are tagged with.
pub const UI_PROCESS: &str = "renderer";

impl AppCore {
    /// `log(level, message)`: a line from the UI, written to the app log.
    pub fn log_from_ui(&self, level: UiLogLevel, message: &str) {
        match level {
            UiLogLevel::Info => info!(process = UI_PROCESS, "{message}"),
            UiLogLevel::Warn => warn!(process = UI_PROCESS, "{message}"),
            UiLogLevel::Debug => debug!(process = UI_PROCESS, "{message}"),
            UiLogLevel::Error => error!(process = UI_PROCESS, "{message}"),
            UiLogLevel::Track => info!(process = UI_PROCESS, milestone = message, "UI milestone"),
        }
    }

    /// `getSettingsData()`
    pub fn get_settings_data(&self) -> SettingsData {
        SettingsData {
            settings: self.document().clone(),
        }
    }

    /// `getSettingOptions()`
    pub fn get_setting_options(&self) -> BTreeMap<String, Vec<SettingOption>> {
        self.settings().schema().all_options().clone()
    }

    /// `changeSetting(key, value)`
    pub fn change_setting(&mut self, key: &str, value: SettingValue) -> Result<(), CommandError> {
        self.settings_mut().set(key, value).map_err(|err| {
            error!(key = %key, error = %err, "Setting change rejected");
            CommandError::from(err)
        })
    }

    /// `storeNote(content, title?)`
    ///
    /// The returned future owns everything it needs, so the caller can spawn
    /// it and go on handling events.
    pub fn store_note(
        &self,
        content: String,
        title: Option<String>,
    ) -> impl Future<Output = Result<StoredNote, CommandError>> + Send + 'static {
        let notes = Arc::clone(self.notes());
        async move {
            notes
                .store(content, title.as_deref())
                .await
                .map_err(CommandError::from)
        }
    }

    /// `toggleLaunchOnStartup()`
    pub fn toggle_launch_on_startup(&mut self) -> Result<NewValue<bool>, CommandError> {
        self.toggle_flag(keys::LAUNCH_ON_STARTUP)
    }

    /// `toggleTheme()`
    pub fn toggle_theme(&mut self) -> Result<NewValue<bool>, CommandError> {
        self.toggle_flag(keys::DARK_THEME)
    }

    fn toggle_flag(&mut self, key: &str) -> Result<NewValue<bool>, CommandError> {
        let new_value = !self.document().flag(key);
        self.change_setting(key, SettingValue::Bool(new_value))?;
        Ok(NewValue { new_value })
    }

    /// `setNotePath(path)`, with the folder the user picked.
    pub fn set_note_path(&mut self, path: &str) -> Result<NewValue<String>, CommandError> {
        if path.trim().is_empty() {
            return Err(PathError::EmptyPath.into());
        }
        self.change_setting(keys::NOTE_PATH, SettingValue::from(path))?;
        Ok(NewValue {
            new_value: path.to_string(),
        })
    }

    /// `setGlobalShortcut({accelerator, representation})`
    ///
    /// An accelerator is probed first and only persisted if it is free. Both
    /// fields empty clears the shortcut.
    pub fn set_global_shortcut(&mut self, data: ShortcutData) -> Result<(), CommandError> {
        let accelerator = data.accelerator.filter(|a| !a.is_empty());
        let representation = data.representation.filter(|r| !r.is_empty());

        match (accelerator, representation) {
            (Some(accelerator), representation) => {
                self.toggle_hotkey().probe(&accelerator)?;
                self.change_setting(keys::GLOBAL_SHORTCUT_ACCELERATOR, accelerator.into())?;
                self.change_setting(
                    keys::GLOBAL_SHORTCUT_REPRESENTATION,
                    SettingValue::from(representation),
                )?;
            }
            (None, None) => {
                debug!("Clearing global shortcut");
                self.change_setting(keys::GLOBAL_SHORTCUT_ACCELERATOR, SettingValue::Null)?;
                self.change_setting(keys::GLOBAL_SHORTCUT_REPRESENTATION, SettingValue::Null)?;
            }
            (None, Some(_)) => return Err(HotkeyError::MissingAccelerator.into()),
        }
        Ok(())
    }
}
