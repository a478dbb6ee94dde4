//! CLI bootstrap - the composition root.
//!
//! The only place where concrete ports are instantiated for the CLI: the
//! standard file system, the system clock and a [`HeadlessHost`] standing in
//! for windows, tray, shortcuts and OS settings. Handlers receive the
//! composed [`CliContext`] and delegate to `AppCore`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use traynote_core::paths::{SETTINGS_FILE_NAME, default_notes_dir, normalize_user_path};
use traynote_core::{
    AppConfig, AppCore, FileSystem, HostPorts, HotkeyRegistrar, LoginItemPort, ResolvedPaths,
    StdFileSystem, SystemClock, ThemePort, TrayHost, UiNotifier, WindowHost,
};

use crate::error::CliError;
use crate::host::HeadlessHost;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub paths: ResolvedPaths,
    pub dev_mode: bool,
    /// What the headless host reports as the OS appearance.
    pub prefers_dark: bool,
}

impl CliConfig {
    /// Config from the platform paths.
    pub fn with_defaults() -> Result<Self, CliError> {
        Ok(Self::from_paths(ResolvedPaths::resolve()?))
    }

    /// Config with settings and logs under `data_dir` instead of the
    /// platform location. The default note directory is unchanged.
    pub fn with_data_dir(data_dir: &Path) -> Result<Self, CliError> {
        let root = normalize_user_path(&data_dir.to_string_lossy())?;
        Ok(Self::from_paths(ResolvedPaths {
            settings_path: root.join(SETTINGS_FILE_NAME),
            logs_dir: root.join("logs"),
            default_notes_dir: default_notes_dir()?,
            data_root: root,
        }))
    }

    pub const fn from_paths(paths: ResolvedPaths) -> Self {
        Self {
            paths,
            dev_mode: false,
            prefers_dark: false,
        }
    }

    #[must_use]
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    #[must_use]
    pub fn notes_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.paths.default_notes_dir = dir.into();
        self
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig::new(&self.paths.settings_path, &self.paths.default_notes_dir)
            .dev_mode(self.dev_mode)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub app: AppCore,
    pub host: Arc<HeadlessHost>,
}

impl CliContext {
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut AppCore {
        &mut self.app
    }
}

/// Build the headless host and boot the core against it.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let host = HeadlessHost::new(config.prefers_dark, config.dev_mode);

    let ports = HostPorts {
        fs: Arc::new(StdFileSystem::new()) as Arc<dyn FileSystem>,
        windows: Arc::clone(&host) as Arc<dyn WindowHost>,
        tray: Arc::clone(&host) as Arc<dyn TrayHost>,
        hotkeys: Arc::clone(&host) as Arc<dyn HotkeyRegistrar>,
        theme: Arc::clone(&host) as Arc<dyn ThemePort>,
        login_items: Arc::clone(&host) as Arc<dyn LoginItemPort>,
        ui: Arc::clone(&host) as Arc<dyn UiNotifier>,
        clock: Arc::new(SystemClock),
    };

    let app = AppCore::start(config.app_config(), ports)?;
    host.attach(app.publisher());
    debug!(settings = %config.paths.settings_path.display(), "CLI context ready");

    Ok(CliContext { app, host })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_moves_settings_and_logs() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::with_data_dir(dir.path()).unwrap();

        assert_eq!(config.paths.data_root, dir.path());
        assert_eq!(config.paths.settings_path, dir.path().join("appSettings.json"));
        assert_eq!(config.paths.logs_dir, dir.path().join("logs"));
    }

    #[test]
    fn test_app_config_carries_dev_mode() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::with_data_dir(dir.path())
            .unwrap()
            .notes_dir(dir.path().join("notes"))
            .dev_mode(true);

        let app_config = config.app_config();
        assert!(app_config.dev_mode);
        assert_eq!(app_config.default_notes_dir, dir.path().join("notes"));
    }
}
