//! Note persistence: markdown files in a configurable directory.

use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::ports::{Clock, FileSystem};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteError {
    /// The note directory or file could not be written. `path` is the
    /// attempted location.
    #[error("Couldn't save note at {path}: {reason}")]
    StorageUnavailable { path: PathBuf, reason: String },

    /// The title would not name a file directly inside the note directory.
    #[error("'{0}' can't be used as a note title")]
    InvalidTitle(String),
}

/// Where a note ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNote {
    pub file_path: PathBuf,
}

/// File name for a note.
///
/// A non-empty title is used verbatim with `.md` appended; otherwise the
/// local time is used at second resolution.
pub fn note_file_name(title: Option<&str>, now: NaiveDateTime) -> String {
    match title.filter(|t| !t.is_empty()) {
        Some(title) => format!("{title}.md"),
        None => format!("Note_{}.md", now.format("%Y-%m-%d_%H-%M-%S")),
    }
}

/// Check that `title` names exactly one file inside the note directory.
///
/// Separators, `.`/`..` and absolute paths are refused.
pub fn check_title(title: &str) -> Result<(), NoteError> {
    let mut components = Path::new(title).components();
    let single_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if single_name && !title.chars().any(std::path::is_separator) {
        Ok(())
    } else {
        Err(NoteError::InvalidTitle(title.to_string()))
    }
}

/// Writes notes into the configured directory.
///
/// The directory can be changed at any time; a note already being written
/// keeps the directory it started with.
pub struct NoteStore {
    store_path: RwLock<PathBuf>,
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
}

impl NoteStore {
    pub fn new(store_path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store_path: RwLock::new(store_path.into()),
            fs,
            clock,
        }
    }

    /// Change the target directory. Nothing is checked until the next write.
    pub fn set_store_path(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        debug!(path = %path.display(), "Path for storing notes set");
        *self.store_path.write().unwrap_or_else(PoisonError::into_inner) = path;
    }

    pub fn store_path(&self) -> PathBuf {
        self.store_path
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Create the note directory and its parents if needed.
    pub fn ensure_directory(&self) -> Result<(), NoteError> {
        ensure_directory(self.fs.as_ref(), &self.store_path())
    }

    /// Write `content` as a note.
    ///
    /// The file name is fixed when this is called; the write itself runs on
    /// the blocking pool. Existing files with the same name are overwritten.
    /// Concurrent calls are not ordered against each other.
    pub async fn store(&self, content: String, title: Option<&str>) -> Result<StoredNote, NoteError> {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            check_title(title).inspect_err(|err| error!(error = %err, "Refusing note title"))?;
        }

        let directory = self.store_path();
        let file_path = directory.join(note_file_name(title, self.clock.now()));
        let fs = Arc::clone(&self.fs);

        let target = file_path.clone();
        let written = tokio::task::spawn_blocking(move || {
            ensure_directory(fs.as_ref(), &directory)?;
            fs.write(&target, content.as_bytes())
                .map_err(|e| storage_unavailable(&target, &e))
        })
        .await
        .map_err(|e| storage_unavailable(&file_path, &e))?;

        match written {
            Ok(()) => {
                debug!(path = %file_path.display(), "Saved note");
                Ok(StoredNote { file_path })
            }
            Err(err) => {
                error!(error = %err, "Couldn't save note");
                // Report the note path even when the directory was the problem.
                Err(match err {
                    NoteError::StorageUnavailable { reason, .. } => NoteError::StorageUnavailable {
                        path: file_path,
                        reason,
                    },
                    other @ NoteError::InvalidTitle(_) => other,
                })
            }
        }
    }
}

fn storage_unavailable(path: &Path, reason: &dyn std::fmt::Display) -> NoteError {
    NoteError::StorageUnavailable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn ensure_directory(fs: &dyn FileSystem, directory: &Path) -> Result<(), NoteError> {
    if fs.exists(directory) {
        return Ok(());
    }
    fs.create_dir_all(directory).map_err(|e| {
        error!(path = %directory.display(), error = %e, "Couldn't create directory for notes");
        storage_unavailable(directory, &e)
    })?;
    debug!(path = %directory.display(), "Created directory for notes");
    Ok(())
}
