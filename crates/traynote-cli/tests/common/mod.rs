//! Shared setup for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;
use traynote_cli::{CliConfig, CliContext, bootstrap};

/// A data directory with notes kept inside it.
pub struct Sandbox {
    pub dir: TempDir,
    pub config: CliConfig,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::with_data_dir(dir.path())
            .unwrap()
            .notes_dir(dir.path().join("notes"));
        Self { dir, config }
    }

    pub fn boot(&self) -> CliContext {
        bootstrap(&self.config).unwrap()
    }

    pub fn notes_dir(&self) -> &Path {
        &self.config.paths.default_notes_dir
    }

    pub fn settings_json(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(&self.config.paths.settings_path).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}
