//! Ownership of the single "toggle editor" global hotkey.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::HotkeyError;
use crate::ports::{HotkeyAction, HotkeyRegistrar};

/// Maps one logical action to at most one registered accelerator.
///
/// Shared between the settings change listener and the command surface, so
/// the current binding sits behind a mutex.
pub struct HotkeyCoordinator {
    registrar: Arc<dyn HotkeyRegistrar>,
    action: HotkeyAction,
    current: Mutex<Option<String>>,
}

impl HotkeyCoordinator {
    pub fn new(registrar: Arc<dyn HotkeyRegistrar>, action: HotkeyAction) -> Self {
        Self {
            registrar,
            action,
            current: Mutex::new(None),
        }
    }

    fn current(&self) -> MutexGuard<'_, Option<String>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the active binding.
    ///
    /// The previous accelerator is always released first. When `accelerator`
    /// cannot be registered the coordinator ends up with no binding at all.
    pub fn apply_binding(&self, accelerator: Option<&str>) -> Result<(), HotkeyError> {
        let mut current = self.current();

        if let Some(old) = current.take() {
            self.registrar.unregister(&old);
            debug!(accelerator = %old, action = %self.action, "Released global shortcut");
        }

        let Some(accelerator) = accelerator else {
            return Ok(());
        };

        match self.registrar.register(accelerator, self.action) {
            Ok(()) => {
                debug!(accelerator = %accelerator, action = %self.action, "Registered global shortcut");
                *current = Some(accelerator.to_string());
                Ok(())
            }
            Err(err) => {
                warn!(accelerator = %accelerator, error = %err, "Global shortcut could not be registered");
                Err(HotkeyError::Conflict {
                    accelerator: accelerator.to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Check that `accelerator` could be registered, without keeping it.
    ///
    /// The accelerator this coordinator already owns counts as available.
    pub fn probe(&self, accelerator: &str) -> Result<(), HotkeyError> {
        if self.current().as_deref() == Some(accelerator) {
            return Ok(());
        }

        self.registrar
            .register(accelerator, HotkeyAction::Probe)
            .map_err(|err| HotkeyError::Conflict {
                accelerator: accelerator.to_string(),
                reason: err.to_string(),
            })?;
        self.registrar.unregister(accelerator);
        debug!(accelerator = %accelerator, "Shortcut probe succeeded");
        Ok(())
    }

    pub fn current_binding(&self) -> Option<String> {
        self.current().clone()
    }

    /// Drop the binding without registering anything new.
    pub fn release(&self) {
        // Infallible: no new accelerator is registered.
        let _ = self.apply_binding(None);
    }
}
