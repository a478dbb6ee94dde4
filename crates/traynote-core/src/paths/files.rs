//! Files and directories under the data root.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::data_root;

pub const SETTINGS_FILE_NAME: &str = "appSettings.json";

/// `<data_root>/appSettings.json`
pub fn settings_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(SETTINGS_FILE_NAME))
}

/// `<data_root>/logs`
pub fn logs_dir() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("logs"))
}
