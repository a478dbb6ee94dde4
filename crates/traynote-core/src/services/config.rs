//! Runtime configuration handed to `AppCore` by the composition root.

use std::path::PathBuf;

use crate::paths::{PathError, default_notes_dir, settings_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the persisted settings document.
    pub settings_path: PathBuf,
    /// Note directory used when `notePath` is unset.
    pub default_notes_dir: PathBuf,
    /// Keeps the editor visible on blur and leaves the reload shortcut alone.
    pub dev_mode: bool,
}

impl AppConfig {
    pub fn new(settings_path: impl Into<PathBuf>, default_notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            default_notes_dir: default_notes_dir.into(),
            dev_mode: false,
        }
    }

    /// Configuration from the platform paths.
    pub fn with_defaults() -> Result<Self, PathError> {
        Ok(Self::new(settings_path()?, default_notes_dir()?))
    }

    #[must_use]
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }
}
