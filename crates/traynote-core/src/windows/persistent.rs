//! The editor window: created once, hidden instead of closed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::WindowError;
use super::geometry::{Bounds, position_below_anchor};
use crate::hotkeys::FocusHotkeys;
use crate::ports::{WindowHandle, WindowHost, WindowOptions};

/// Visibility of the persistent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistentState {
    Hidden,
    Visible,
}

/// Outcome of an OS close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Allow,
    Veto,
}

/// Set once the application is shutting down; lifts the close veto.
///
/// Hosts that must answer close requests synchronously from a native
/// callback keep a clone and consult it directly.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn close_decision(&self) -> CloseDecision {
        if self.is_set() {
            CloseDecision::Allow
        } else {
            CloseDecision::Veto
        }
    }
}

pub struct PersistentWindow {
    host: Arc<dyn WindowHost>,
    options: WindowOptions,
    handle: Option<WindowHandle>,
    state: PersistentState,
    shutdown: ShutdownFlag,
    focus: FocusHotkeys,
    dev_mode: bool,
}

impl PersistentWindow {
    /// Create the native window, hidden.
    pub fn create(
        host: Arc<dyn WindowHost>,
        options: WindowOptions,
        focus: FocusHotkeys,
        dev_mode: bool,
    ) -> Result<Self, WindowError> {
        let handle = host.create(&options)?;
        debug!(window = %options.kind, handle = handle.0, "Persistent window created");

        Ok(Self {
            host,
            options,
            handle: Some(handle),
            state: PersistentState::Hidden,
            shutdown: ShutdownFlag::new(),
            focus,
            dev_mode,
        })
    }

    fn live_handle(&self) -> Result<WindowHandle, WindowError> {
        self.handle.ok_or(WindowError::Closed(self.options.kind))
    }

    pub const fn state(&self) -> PersistentState {
        self.state
    }

    pub const fn is_destroyed(&self) -> bool {
        self.handle.is_none()
    }

    pub fn shutdown_flag(&self) -> ShutdownFlag {
        self.shutdown.clone()
    }

    pub const fn focus_hotkeys(&self) -> &FocusHotkeys {
        &self.focus
    }

    pub fn toggle(&mut self, anchor: Bounds) -> Result<(), WindowError> {
        match self.state {
            PersistentState::Hidden => self.show(anchor),
            PersistentState::Visible => self.hide(),
        }
    }

    /// Move below `anchor` and show. The position is recomputed from the
    /// window's current width every time, so the window follows the tray
    /// icon across screens and resizes.
    pub fn show(&mut self, anchor: Bounds) -> Result<(), WindowError> {
        let handle = self.live_handle()?;
        let width = self.host.window_bounds(handle)?.width;
        let position = position_below_anchor(anchor, width);

        self.host.set_position(handle, position)?;
        debug!(x = position.x, y = position.y, "Editor window positioned");

        self.host.show(handle)?;
        self.state = PersistentState::Visible;
        Ok(())
    }

    pub fn hide(&mut self) -> Result<(), WindowError> {
        let handle = self.live_handle()?;
        self.host.hide(handle)?;
        self.state = PersistentState::Hidden;
        debug!("Editor window hidden");
        Ok(())
    }

    pub fn on_focus(&mut self) {
        if self.handle.is_some() {
            self.focus.on_focus();
        }
    }

    /// Release the focus set and, outside dev mode, hide a visible window.
    pub fn on_blur(&mut self) -> Result<(), WindowError> {
        self.focus.on_blur();
        if self.state == PersistentState::Visible && !self.dev_mode && self.handle.is_some() {
            self.hide()?;
        }
        Ok(())
    }

    /// Closing is refused until shutdown has begun.
    pub fn handle_close_request(&self) -> CloseDecision {
        let decision = self.shutdown.close_decision();
        debug!(?decision, "Editor close requested");
        decision
    }

    /// The host reports the native window is gone.
    pub fn on_closed(&mut self) {
        self.focus.on_blur();
        self.handle = None;
        self.state = PersistentState::Hidden;
        debug!("Editor window closed");
    }

    /// Lift the close veto and destroy the window.
    pub fn force_close(&mut self) -> Result<(), WindowError> {
        debug!("Closing the editor window will be forced");
        self.shutdown.set();
        self.focus.on_blur();

        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        self.state = PersistentState::Hidden;
        self.host.close(handle)?;
        Ok(())
    }
}
