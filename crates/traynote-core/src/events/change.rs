//! Setting change notifications.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::settings::SettingValue;

/// Emitted after a successful `set`, once the new document is persisted and
/// swapped into memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub key: String,
    pub old_value: SettingValue,
    pub new_value: SettingValue,
}

impl ChangeEvent {
    /// Event name used when forwarding to a UI transport, e.g. `change:darkTheme`.
    pub fn event_name(&self) -> String {
        format!("change:{}", self.key)
    }
}

pub type ChangeListener = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Per-key listener registry.
///
/// Listeners for a key run in registration order. There is no unsubscribe;
/// subscriptions live as long as the registry.
#[derive(Default)]
pub struct ChangeListeners {
    by_key: HashMap<String, Vec<ChangeListener>>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, key: impl Into<String>, listener: ChangeListener) {
        self.by_key.entry(key.into()).or_default().push(listener);
    }

    pub fn emit(&self, event: &ChangeEvent) {
        if let Some(listeners) = self.by_key.get(&event.key) {
            for listener in listeners {
                listener(event);
            }
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.by_key.get(key).map_or(0, Vec::len)
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, listeners) in &self.by_key {
            map.entry(key, &listeners.len());
        }
        map.finish()
    }
}
