//! Settings store error types.

use std::path::PathBuf;

use thiserror::Error;

use super::value::SettingValue;

/// Errors raised by the settings store.
///
/// `CorruptConfig` and `Persist` are fatal during startup. `UnknownKey` and
/// `InvalidValue` are caller errors and never mutate state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The persisted document could not be read or parsed.
    #[error("Couldn't read or parse settings file {path}: {reason}")]
    CorruptConfig { path: PathBuf, reason: String },

    /// The key is not part of the schema.
    #[error("Can't find a setting option for '{0}'")]
    UnknownKey(String),

    /// The value is not legal for the key.
    #[error("The value {value} is not legit for setting '{key}'")]
    InvalidValue { key: String, value: SettingValue },

    /// Writing the document to disk failed.
    #[error("Couldn't save settings to {path}: {reason}")]
    Persist { path: PathBuf, reason: String },
}
