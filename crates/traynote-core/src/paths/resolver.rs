//! All resolved paths in one struct, for diagnostics and the `paths` command.

use std::path::PathBuf;

use super::{PathError, data_root, default_notes_dir, logs_dir, settings_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// The persisted settings document.
    pub settings_path: PathBuf,
    /// Rolling log files.
    pub logs_dir: PathBuf,
    /// Note directory used while `notePath` is unset.
    pub default_notes_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            settings_path: settings_path()?,
            logs_dir: logs_dir()?,
            default_notes_dir: default_notes_dir()?,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "settings_path = {}", self.settings_path.display())?;
        writeln!(f, "logs_dir = {}", self.logs_dir.display())?;
        write!(f, "default_notes_dir = {}", self.default_notes_dir.display())
    }
}
