//! Platform-specific root directories.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "TRAYNOTE_DATA_DIR";

/// Get the root directory for application data (settings, logs).
///
/// Resolution order:
/// 1. `TRAYNOTE_DATA_DIR` environment variable
/// 2. System config directory (e.g., `~/.config/traynote`), created on demand
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return normalize_user_path(&path);
        }
    }

    let root = dirs::config_dir().ok_or(PathError::NoConfigDir)?.join("traynote");

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Directory notes go to until the user picks one.
///
/// `~/Documents/traynote` on most systems. Not created here; the note store
/// creates it on first use.
pub fn default_notes_dir() -> Result<PathBuf, PathError> {
    let documents = match dirs::document_dir() {
        Some(dir) => dir,
        None => dirs::home_dir().ok_or(PathError::NoHomeDir)?.join("Documents"),
    };
    Ok(documents.join("traynote"))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed == "~" {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        dirs::home_dir().ok_or(PathError::NoHomeDir)?.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
