//! Path utilities for traynote data directories.
//!
//! - Settings file and log locations under the data root
//! - The default note directory
//!
//! Returns `PathBuf` and `PathError`; no terminal I/O happens here.

mod error;
mod files;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use error::PathError;
pub use files::{SETTINGS_FILE_NAME, logs_dir, settings_path};
pub use platform::{DATA_DIR_ENV, data_root, default_notes_dir, normalize_user_path};
pub use resolver::ResolvedPaths;
