//! Hotkeys that only exist while a particular window has focus.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ports::{HotkeyAction, HotkeyRegistrar};

/// One accelerator of a focus-scoped set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusBinding {
    pub accelerator: &'static str,
    pub action: HotkeyAction,
}

const fn binding(accelerator: &'static str, action: HotkeyAction) -> FocusBinding {
    FocusBinding {
        accelerator,
        action,
    }
}

/// A set of accelerators registered on focus and released on blur.
///
/// Accelerators that are already registered by someone else are skipped,
/// and on blur only the accelerators this set registered are released.
pub struct FocusHotkeys {
    registrar: Arc<dyn HotkeyRegistrar>,
    bindings: Vec<FocusBinding>,
    registered: Vec<&'static str>,
}

impl FocusHotkeys {
    pub fn new(registrar: Arc<dyn HotkeyRegistrar>, bindings: Vec<FocusBinding>) -> Self {
        Self {
            registrar,
            bindings,
            registered: Vec::new(),
        }
    }

    /// Editor set: save, two ways to dismiss, and a reload blocker outside
    /// dev mode.
    pub fn editor(registrar: Arc<dyn HotkeyRegistrar>, dev_mode: bool) -> Self {
        let mut bindings = vec![
            binding("Cmd+S", HotkeyAction::SaveNote),
            binding("Cmd+Q", HotkeyAction::HideEditor),
            binding("Cmd+W", HotkeyAction::HideEditor),
        ];
        if !dev_mode {
            bindings.push(binding("Cmd+R", HotkeyAction::BlockReload));
        }
        Self::new(registrar, bindings)
    }

    /// Settings window set: close on `Cmd+Q`.
    pub fn settings(registrar: Arc<dyn HotkeyRegistrar>) -> Self {
        Self::new(registrar, vec![binding("Cmd+Q", HotkeyAction::CloseSettings)])
    }

    pub fn bindings(&self) -> &[FocusBinding] {
        &self.bindings
    }

    /// Accelerators currently held by this set.
    pub fn registered(&self) -> &[&'static str] {
        &self.registered
    }

    pub fn is_active(&self) -> bool {
        !self.registered.is_empty()
    }

    pub fn on_focus(&mut self) {
        for binding in &self.bindings {
            if self.registered.contains(&binding.accelerator) {
                continue;
            }
            if self.registrar.is_registered(binding.accelerator) {
                debug!(accelerator = binding.accelerator, "Focus shortcut already taken, skipping");
                continue;
            }
            match self.registrar.register(binding.accelerator, binding.action) {
                Ok(()) => self.registered.push(binding.accelerator),
                Err(err) => {
                    warn!(accelerator = binding.accelerator, error = %err, "Focus shortcut registration failed");
                }
            }
        }
        debug!(count = self.registered.len(), "Focus shortcuts registered");
    }

    pub fn on_blur(&mut self) {
        for accelerator in self.registered.drain(..) {
            self.registrar.unregister(accelerator);
        }
        debug!("Focus shortcuts released");
    }
}
