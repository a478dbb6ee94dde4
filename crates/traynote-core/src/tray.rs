//! Tray icon events, menu layout, and the tray observer.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::windows::{WindowError, WindowSet};

/// What the user did with the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrayEvent {
    /// Left click on the icon.
    Clicked,
    /// "Settings" menu item.
    ShowSettings,
    /// "Quit" menu item.
    Quit,
}

/// One item of the tray context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrayMenuItem {
    pub label: &'static str,
    pub accelerator: &'static str,
    pub event: TrayEvent,
}

/// The tray context menu, in display order.
pub const TRAY_MENU: [TrayMenuItem; 2] = [
    TrayMenuItem {
        label: "Settings",
        accelerator: "Command+,",
        event: TrayEvent::ShowSettings,
    },
    TrayMenuItem {
        label: "Quit",
        accelerator: "Command+Q",
        event: TrayEvent::Quit,
    },
];

/// Template image for the tray icon. Dev builds use a distinct icon.
pub const fn icon_file_name(dev_mode: bool) -> &'static str {
    if dev_mode {
        "trayIconDevTemplate.png"
    } else {
        "trayIconTemplate.png"
    }
}

pub type TrayHandler = Box<dyn FnMut(&mut WindowSet) -> Result<(), WindowError> + Send>;

/// Observer for tray events.
///
/// Handlers for an event run in registration order. A failing handler is
/// logged and does not stop the ones after it.
#[derive(Default)]
pub struct Tray {
    handlers: Vec<(TrayEvent, TrayHandler)>,
}

impl Tray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        event: TrayEvent,
        handler: impl FnMut(&mut WindowSet) -> Result<(), WindowError> + Send + 'static,
    ) {
        self.handlers.push((event, Box::new(handler)));
    }

    pub fn emit(&mut self, event: TrayEvent, windows: &mut WindowSet) {
        for (_, handler) in self.handlers.iter_mut().filter(|(e, _)| *e == event) {
            if let Err(err) = handler(windows) {
                error!(?event, error = %err, "Tray handler failed");
            }
        }
    }

    pub fn handler_count(&self, event: TrayEvent) -> usize {
        self.handlers.iter().filter(|(e, _)| *e == event).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = TRAY_MENU.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["Settings", "Quit"]);
        assert_eq!(TRAY_MENU[1].event, TrayEvent::Quit);
    }

    #[test]
    fn test_icon_differs_in_dev_mode() {
        assert_ne!(icon_file_name(true), icon_file_name(false));
    }

    #[test]
    fn test_handler_count_per_event() {
        let mut tray = Tray::new();
        tray.subscribe(TrayEvent::Clicked, |_| Ok(()));
        tray.subscribe(TrayEvent::Clicked, |_| Ok(()));
        tray.subscribe(TrayEvent::Quit, |_| Ok(()));

        assert_eq!(tray.handler_count(TrayEvent::Clicked), 2);
        assert_eq!(tray.handler_count(TrayEvent::ShowSettings), 0);
    }
}
