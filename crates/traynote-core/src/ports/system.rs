//! OS settings the orchestrator keeps in sync with the settings document.

use serde::{Deserialize, Serialize};

use super::HostError;

/// Theme requested from the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Light,
    Dark,
}

impl ThemeSource {
    pub const fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Native theme capability.
#[cfg_attr(test, mockall::automock)]
pub trait ThemePort: Send + Sync {
    /// Whether the system currently prefers a dark appearance.
    fn prefers_dark(&self) -> bool;

    fn set_theme_source(&self, source: ThemeSource);
}

/// Login item ("open at login") capability.
#[cfg_attr(test, mockall::automock)]
pub trait LoginItemPort: Send + Sync {
    fn set_open_at_login(&self, enabled: bool) -> Result<(), HostError>;
}
