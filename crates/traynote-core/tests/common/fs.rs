//! File system wrapper that counts writes and can be told to fail them.

#![allow(dead_code)]

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use traynote_core::{FileSystem, StdFileSystem};

#[derive(Default)]
pub struct FlakyFs {
    inner: StdFileSystem,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl FlakyFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl FileSystem for FlakyFs {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.inner.read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "disk is read-only"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(path, contents)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.inner.create_dir_all(path)
    }
}
