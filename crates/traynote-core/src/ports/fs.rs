//! File-system capability used by the settings and note stores.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Minimal file-system surface the core needs.
///
/// Implementations must make `write` replace the whole file; readers never
/// observe a partially written document.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create `path`. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// `std::fs` backed implementation.
///
/// Writes go to a hidden sibling first and are renamed into place.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub const fn new() -> Self {
        Self
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "file".into(), |name| name.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let staging = staging_path(path);
        fs::write(&staging, contents)?;
        if let Err(err) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
