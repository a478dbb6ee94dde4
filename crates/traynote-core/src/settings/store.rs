//! The authoritative settings document and its on-disk form.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::error::SettingsError;
use super::schema::SettingsSchema;
use super::value::{SettingValue, SettingsDocument};
use crate::events::{ChangeEvent, ChangeListener, ChangeListeners};
use crate::ports::FileSystem;

/// Owns the settings document.
///
/// Every mutation goes validate, persist, swap, notify, and completes before
/// `set` returns. The store is driven from one control thread and does no
/// locking of its own.
pub struct SettingsStore {
    path: PathBuf,
    schema: SettingsSchema,
    data: SettingsDocument,
    fs: Arc<dyn FileSystem>,
    listeners: ChangeListeners,
}

impl SettingsStore {
    /// Load the document at `path`, reconciling it against the schema defaults.
    ///
    /// - No file: the defaults are written and returned.
    /// - Unreadable file, non-object JSON, or a known key holding a number,
    ///   array or object: `CorruptConfig`.
    /// - Otherwise defaults are merged under the parsed values, unknown keys
    ///   are dropped, and the result is written back if it differs from what
    ///   was read.
    pub fn load(
        path: impl Into<PathBuf>,
        schema: SettingsSchema,
        fs: Arc<dyn FileSystem>,
    ) -> Result<Self, SettingsError> {
        let path = path.into();

        let data = if fs.exists(&path) {
            let parsed = read_document(fs.as_ref(), &path)?;
            let merged = merge_with_defaults(&path, schema.defaults(), &parsed)?;

            if merged.to_json() != Value::Object(parsed) {
                info!(path = %path.display(), "Settings file out of date with schema, rewriting");
                persist(fs.as_ref(), &path, &merged)?;
            }
            merged
        } else {
            info!(path = %path.display(), "No settings file, writing defaults");
            let defaults = schema.defaults().clone();
            persist(fs.as_ref(), &path, &defaults)?;
            defaults
        };

        debug!(path = %path.display(), keys = data.len(), "Settings loaded");

        Ok(Self {
            path,
            schema,
            data,
            fs,
            listeners: ChangeListeners::new(),
        })
    }

    /// Read-only view of the in-memory document.
    pub const fn get(&self) -> &SettingsDocument {
        &self.data
    }

    pub const fn schema(&self) -> &SettingsSchema {
        &self.schema
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a listener for changes of `key`.
    ///
    /// Listeners for the same key are invoked in registration order.
    pub fn subscribe(
        &mut self,
        key: &str,
        listener: impl Fn(&ChangeEvent) + Send + Sync + 'static,
    ) -> Result<(), SettingsError> {
        if !self.schema.is_known(key) {
            return Err(SettingsError::UnknownKey(key.to_string()));
        }
        let listener: ChangeListener = Box::new(listener);
        self.listeners.subscribe(key, listener);
        Ok(())
    }

    /// Validate, persist, then apply and announce a new value for `key`.
    ///
    /// On any error the in-memory document and the file are unchanged and no
    /// event is emitted. Setting a key to its current value still persists
    /// and emits.
    pub fn set(&mut self, key: &str, value: impl Into<SettingValue>) -> Result<(), SettingsError> {
        let value = value.into();

        if !self.schema.is_known(key) {
            return Err(SettingsError::UnknownKey(key.to_string()));
        }
        if !self.schema.accepts(key, &value) {
            return Err(SettingsError::InvalidValue {
                key: key.to_string(),
                value,
            });
        }

        let candidate = self.data.with(key, value.clone());
        persist(self.fs.as_ref(), &self.path, &candidate)?;

        let previous = std::mem::replace(&mut self.data, candidate);
        let old_value = previous.get(key).cloned().unwrap_or(SettingValue::Null);

        debug!(key = %key, old = %old_value, new = %value, "Setting changed");

        self.listeners.emit(&ChangeEvent {
            key: key.to_string(),
            old_value,
            new_value: value,
        });
        Ok(())
    }
}

fn read_document(fs: &dyn FileSystem, path: &Path) -> Result<Map<String, Value>, SettingsError> {
    let corrupt = |reason: String| SettingsError::CorruptConfig {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs.read_to_string(path).map_err(|e| corrupt(e.to_string()))?;
    match serde_json::from_str::<Value>(&content).map_err(|e| corrupt(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(corrupt(format!("expected a JSON object, found {other}"))),
    }
}

fn merge_with_defaults(
    path: &Path,
    defaults: &SettingsDocument,
    parsed: &Map<String, Value>,
) -> Result<SettingsDocument, SettingsError> {
    defaults
        .iter()
        .map(|(key, default)| {
            let value = match parsed.get(key) {
                None => default.clone(),
                Some(raw) => {
                    SettingValue::from_json(raw).ok_or_else(|| SettingsError::CorruptConfig {
                        path: path.to_path_buf(),
                        reason: format!("unsupported value {raw} for '{key}'"),
                    })?
                }
            };
            Ok((key.to_string(), value))
        })
        .collect()
}

fn persist(fs: &dyn FileSystem, path: &Path, document: &SettingsDocument) -> Result<(), SettingsError> {
    let failed = |reason: String| SettingsError::Persist {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent).map_err(|e| failed(e.to_string()))?;
    }
    let json = serde_json::to_string_pretty(document).map_err(|e| failed(e.to_string()))?;
    fs.write(path, json.as_bytes()).map_err(|e| failed(e.to_string()))
}
