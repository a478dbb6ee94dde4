//! CLI-specific error types and mappings.
//!
//! Core and command errors are mapped onto sysexits-style exit codes.

use thiserror::Error;
use traynote_core::{CommandError, CoreError, HotkeyError, NoteError, PathError, SettingsError};

#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// A value or key the core rejected.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (stdin, note directory, settings file).
    #[error("IO error: {0}")]
    Io(String),

    /// Settings file or data directory unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested shortcut is taken.
    #[error("Shortcut error: {0}")]
    Shortcut(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments
    /// - 64-78: see sysexits.h
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::Shortcut(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Settings(SettingsError::CorruptConfig { .. }) | CoreError::Path(_) => {
                Self::Config(err.to_string())
            }
            CoreError::Settings(SettingsError::Persist { .. })
            | CoreError::Notes(NoteError::StorageUnavailable { .. }) => Self::Io(err.to_string()),
            CoreError::Notes(NoteError::InvalidTitle(_)) => Self::Arguments(err.to_string()),
            CoreError::Settings(_) => Self::Arguments(err.to_string()),
            CoreError::Hotkey(HotkeyError::Conflict { .. }) => Self::Shortcut(err.to_string()),
            CoreError::Hotkey(HotkeyError::MissingAccelerator) => Self::Arguments(err.to_string()),
            CoreError::Window(_) | CoreError::Host(_) => Self::Core(err.to_string()),
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::UnknownKey(msg)
            | CommandError::InvalidValue(msg)
            | CommandError::InvalidInput(msg) => Self::Arguments(msg),
            CommandError::HotkeyConflict(msg) => Self::Shortcut(msg),
            CommandError::StorageUnavailable(msg) | CommandError::Persist(msg) => Self::Io(msg),
            CommandError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
