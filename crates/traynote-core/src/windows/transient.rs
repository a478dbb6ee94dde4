//! The settings window: created on demand, destroyed on close.

use std::sync::Arc;

use tracing::debug;

use super::WindowError;
use super::persistent::CloseDecision;
use crate::hotkeys::FocusHotkeys;
use crate::ports::{WindowHandle, WindowHost, WindowOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientState {
    /// No native window exists.
    Absent,
    Visible,
    Minimized,
}

pub struct TransientWindow {
    host: Arc<dyn WindowHost>,
    options: WindowOptions,
    handle: Option<WindowHandle>,
    state: TransientState,
    focus: FocusHotkeys,
}

impl TransientWindow {
    pub fn new(host: Arc<dyn WindowHost>, options: WindowOptions, focus: FocusHotkeys) -> Self {
        Self {
            host,
            options,
            handle: None,
            state: TransientState::Absent,
            focus,
        }
    }

    pub const fn state(&self) -> TransientState {
        self.state
    }

    pub const fn handle(&self) -> Option<WindowHandle> {
        self.handle
    }

    pub const fn focus_hotkeys(&self) -> &FocusHotkeys {
        &self.focus
    }

    /// Create, re-raise or restore the window depending on its state.
    pub fn request_show(&mut self) -> Result<(), WindowError> {
        match (self.state, self.handle) {
            (TransientState::Visible, Some(handle)) => {
                self.host.show(handle)?;
                self.host.focus(handle)?;
                debug!(window = %self.options.kind, "Window raised");
            }
            (TransientState::Minimized, Some(handle)) => {
                self.host.restore(handle)?;
                self.state = TransientState::Visible;
                debug!(window = %self.options.kind, "Window restored");
            }
            _ => {
                let handle = self.host.create(&self.options)?;
                if !self.options.show {
                    self.host.show(handle)?;
                }
                self.handle = Some(handle);
                self.state = TransientState::Visible;
                debug!(window = %self.options.kind, handle = handle.0, "Window created");
            }
        }
        Ok(())
    }

    pub fn on_minimized(&mut self) {
        if self.handle.is_some() {
            self.state = TransientState::Minimized;
        }
    }

    pub fn on_focus(&mut self) {
        if self.handle.is_none() {
            return;
        }
        if self.state == TransientState::Minimized {
            self.state = TransientState::Visible;
        }
        self.focus.on_focus();
    }

    pub fn on_blur(&mut self) {
        self.focus.on_blur();
    }

    /// User close requests are never vetoed.
    pub const fn handle_close_request(&self) -> CloseDecision {
        CloseDecision::Allow
    }

    /// The host reports the native window is gone.
    pub fn on_closed(&mut self) {
        self.focus.on_blur();
        self.handle = None;
        self.state = TransientState::Absent;
        debug!(window = %self.options.kind, "Window closed");
    }

    /// Close the window if it exists.
    ///
    /// The controller is `Absent` afterwards even when the host reports an
    /// error.
    pub fn close(&mut self) -> Result<(), WindowError> {
        let Some(handle) = self.handle else {
            return Ok(());
        };
        let result = self.host.close(handle);
        self.on_closed();
        result.map_err(WindowError::from)
    }
}
