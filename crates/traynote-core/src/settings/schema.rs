//! Setting option schema and the built-in defaults.
//!
//! The schema pairs every key with its enumerated options and its default.
//! Defaults drive migration on load (missing keys are healed, unknown keys
//! are pruned); options drive validation on `set`.

use std::collections::BTreeMap;

use serde::Serialize;

use super::value::{SettingValue, SettingsDocument};

/// Keys of the built-in settings.
///
/// Keep this namespace flat. Nested values would defeat the key-level
/// migration performed on load.
pub mod keys {
    pub const LAUNCH_ON_STARTUP: &str = "launchOnStartup";
    pub const NOTE_PATH: &str = "notePath";
    pub const DARK_THEME: &str = "darkTheme";
    pub const GLOBAL_SHORTCUT_ACCELERATOR: &str = "globalShortcutAccelerator";
    pub const GLOBAL_SHORTCUT_REPRESENTATION: &str = "globalShortcutRepresentation";
}

/// One legal value for a setting, with the label shown by the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingOption {
    pub value: SettingValue,
    pub label: String,
}

impl SettingOption {
    pub fn new(value: impl Into<SettingValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options and defaults for every known setting.
#[derive(Debug, Clone, Default)]
pub struct SettingsSchema {
    options: BTreeMap<String, Vec<SettingOption>>,
    defaults: SettingsDocument,
}

impl SettingsSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting with its default value and ordered options.
    #[must_use]
    pub fn setting(
        mut self,
        key: &str,
        default: impl Into<SettingValue>,
        options: Vec<SettingOption>,
    ) -> Self {
        self.defaults.insert(key, default.into());
        self.options.insert(key.to_string(), options);
        self
    }

    /// The schema of the application.
    ///
    /// `prefers_dark` seeds the `darkTheme` default from the system theme.
    pub fn builtin(prefers_dark: bool) -> Self {
        Self::new()
            .setting(
                keys::LAUNCH_ON_STARTUP,
                true,
                vec![SettingOption::new(true, "Yes"), SettingOption::new(false, "No")],
            )
            .setting(
                keys::NOTE_PATH,
                SettingValue::Null,
                vec![SettingOption::new("", "Folder path for notes")],
            )
            .setting(
                keys::DARK_THEME,
                prefers_dark,
                vec![
                    SettingOption::new(false, "light"),
                    SettingOption::new(true, "dark"),
                ],
            )
            .setting(
                keys::GLOBAL_SHORTCUT_ACCELERATOR,
                SettingValue::Null,
                vec![SettingOption::new("", "Shortcut to open note window")],
            )
            .setting(
                keys::GLOBAL_SHORTCUT_REPRESENTATION,
                SettingValue::Null,
                vec![SettingOption::new("", "Representation of shortcut key")],
            )
    }

    pub const fn defaults(&self) -> &SettingsDocument {
        &self.defaults
    }

    pub fn options(&self, key: &str) -> Option<&[SettingOption]> {
        self.options.get(key).map(Vec::as_slice)
    }

    pub const fn all_options(&self) -> &BTreeMap<String, Vec<SettingOption>> {
        &self.options
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.options.contains_key(key) && self.defaults.contains_key(key)
    }

    /// Whether `value` is legal for `key`.
    ///
    /// A value is legal when it is `null`, equals one of the enumerated
    /// option values, or is a string while at least one option value of the
    /// key is a string. The last rule holds even for keys that mix string and
    /// non-string options.
    pub fn accepts(&self, key: &str, value: &SettingValue) -> bool {
        let Some(options) = self.options.get(key) else {
            return false;
        };

        value.is_null()
            || options
                .iter()
                .any(|option| option.value == *value || (option.value.is_text() && value.is_text()))
    }
}
