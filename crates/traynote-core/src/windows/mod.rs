//! Window lifecycle controllers.
//!
//! - `persistent` - the editor: `Hidden`/`Visible`, close vetoed until shutdown
//! - `transient` - the settings page: `Absent`/`Visible`/`Minimized`
//! - `geometry` - tray-relative positioning

pub mod geometry;
mod persistent;
mod transient;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

pub use geometry::{Bounds, Position, position_below_anchor};
pub use persistent::{CloseDecision, PersistentState, PersistentWindow, ShutdownFlag};
pub use transient::{TransientState, TransientWindow};

use crate::ports::{HostError, TrayHost, WindowKind};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WindowError {
    /// The window was destroyed and can't be used again.
    #[error("The {0} window has been closed")]
    Closed(WindowKind),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Both windows plus the tray they are anchored to.
pub struct WindowSet {
    pub editor: PersistentWindow,
    pub settings: TransientWindow,
    tray: Arc<dyn TrayHost>,
}

impl WindowSet {
    pub fn new(editor: PersistentWindow, settings: TransientWindow, tray: Arc<dyn TrayHost>) -> Self {
        Self {
            editor,
            settings,
            tray,
        }
    }

    /// Toggle the editor below the tray icon's current position.
    pub fn toggle_editor(&mut self) -> Result<(), WindowError> {
        let anchor = self.tray.bounds();
        self.editor.toggle(anchor)
    }

    pub fn show_settings(&mut self) -> Result<(), WindowError> {
        self.settings.request_show()
    }

    /// Close the settings window, then force the editor closed.
    ///
    /// A failure closing the settings window is logged and does not stop
    /// the editor from closing.
    pub fn quit(&mut self) -> Result<(), WindowError> {
        debug!("Quitting, closing all windows");
        if let Err(err) = self.settings.close() {
            warn!(error = %err, "Settings window did not close cleanly");
        }
        self.editor.force_close()
    }

    pub fn handle_close_request(&self, kind: WindowKind) -> CloseDecision {
        match kind {
            WindowKind::Editor => self.editor.handle_close_request(),
            WindowKind::Settings => self.settings.handle_close_request(),
        }
    }

    pub fn on_focus(&mut self, kind: WindowKind) {
        match kind {
            WindowKind::Editor => self.editor.on_focus(),
            WindowKind::Settings => self.settings.on_focus(),
        }
    }

    pub fn on_blur(&mut self, kind: WindowKind) -> Result<(), WindowError> {
        match kind {
            WindowKind::Editor => self.editor.on_blur(),
            WindowKind::Settings => {
                self.settings.on_blur();
                Ok(())
            }
        }
    }
}
