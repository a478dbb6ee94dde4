//! A host without a display.
//!
//! Windows, the tray icon and global shortcuts exist only as bookkeeping;
//! every call is logged. Closing a window reports `WindowClosed` back
//! through the event bus the way a native host would.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::{debug, info};
use traynote_core::tray::icon_file_name;
use traynote_core::{
    AppEvent, Bounds, EventPublisher, HostError, HotkeyAction, HotkeyRegistrar, LoginItemPort,
    Position, TRAY_MENU, ThemePort, ThemeSource, TrayHost, UiMessage, UiNotifier, WindowHandle,
    WindowHost, WindowKind, WindowOptions,
};

/// Where the headless tray icon pretends to sit.
pub const HEADLESS_TRAY_BOUNDS: Bounds = Bounds::new(1200, 0, 22, 22);

#[derive(Debug, Clone, Copy)]
struct HeadlessWindow {
    kind: WindowKind,
    bounds: Bounds,
}

pub struct HeadlessHost {
    prefers_dark: bool,
    next_handle: AtomicU64,
    windows: Mutex<HashMap<WindowHandle, HeadlessWindow>>,
    shortcuts: Mutex<HashMap<String, HotkeyAction>>,
    login_item: Mutex<Option<bool>>,
    publisher: OnceLock<EventPublisher>,
}

impl HeadlessHost {
    pub fn new(prefers_dark: bool, dev_mode: bool) -> Arc<Self> {
        info!(
            icon = icon_file_name(dev_mode),
            menu = ?TRAY_MENU.map(|item| item.label),
            "Headless tray ready"
        );
        Arc::new(Self {
            prefers_dark,
            next_handle: AtomicU64::new(1),
            windows: Mutex::new(HashMap::new()),
            shortcuts: Mutex::new(HashMap::new()),
            login_item: Mutex::new(None),
            publisher: OnceLock::new(),
        })
    }

    /// Route `WindowClosed` notifications to the running core.
    pub fn attach(&self, publisher: EventPublisher) {
        if self.publisher.set(publisher).is_err() {
            debug!("Host already attached to an event bus");
        }
    }

    pub fn live_windows(&self) -> Vec<WindowKind> {
        let mut kinds: Vec<WindowKind> = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|window| window.kind)
            .collect();
        kinds.sort_by_key(|kind| kind.as_str());
        kinds
    }

    /// Accelerators currently held, sorted.
    pub fn registered_shortcuts(&self) -> Vec<String> {
        let mut accelerators: Vec<String> = self
            .shortcuts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        accelerators.sort();
        accelerators
    }

    /// Last login-item state the core asked for.
    pub fn login_item(&self) -> Option<bool> {
        *self.login_item.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn window(&self, handle: WindowHandle) -> Result<HeadlessWindow, HostError> {
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&handle)
            .copied()
            .ok_or(HostError::UnknownWindow(handle.0))
    }

    fn kind_of(&self, handle: WindowHandle) -> Result<WindowKind, HostError> {
        self.window(handle).map(|window| window.kind)
    }
}

impl WindowHost for HeadlessHost {
    fn create(&self, options: &WindowOptions) -> Result<WindowHandle, HostError> {
        let handle = WindowHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                handle,
                HeadlessWindow {
                    kind: options.kind,
                    bounds: Bounds::new(0, 0, options.width, options.height),
                },
            );
        info!(
            window = %options.kind,
            handle = handle.0,
            width = options.width,
            height = options.height,
            "Window created"
        );
        Ok(handle)
    }

    fn show(&self, handle: WindowHandle) -> Result<(), HostError> {
        let kind = self.kind_of(handle)?;
        info!(window = %kind, "Window shown");
        Ok(())
    }

    fn hide(&self, handle: WindowHandle) -> Result<(), HostError> {
        let kind = self.kind_of(handle)?;
        info!(window = %kind, "Window hidden");
        Ok(())
    }

    fn focus(&self, handle: WindowHandle) -> Result<(), HostError> {
        let kind = self.kind_of(handle)?;
        info!(window = %kind, "Window focused");
        Ok(())
    }

    fn restore(&self, handle: WindowHandle) -> Result<(), HostError> {
        let kind = self.kind_of(handle)?;
        info!(window = %kind, "Window restored");
        Ok(())
    }

    fn close(&self, handle: WindowHandle) -> Result<(), HostError> {
        let kind = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle)
            .ok_or(HostError::UnknownWindow(handle.0))?
            .kind;
        info!(window = %kind, "Window closed");

        if let Some(publisher) = self.publisher.get() {
            publisher.publish(AppEvent::WindowClosed(kind));
        }
        Ok(())
    }

    fn set_position(&self, handle: WindowHandle, position: Position) -> Result<(), HostError> {
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);
        let window = windows
            .get_mut(&handle)
            .ok_or(HostError::UnknownWindow(handle.0))?;
        window.bounds.x = position.x;
        window.bounds.y = position.y;
        info!(window = %window.kind, x = position.x, y = position.y, "Window moved");
        Ok(())
    }

    fn window_bounds(&self, handle: WindowHandle) -> Result<Bounds, HostError> {
        self.window(handle).map(|window| window.bounds)
    }
}

impl TrayHost for HeadlessHost {
    fn bounds(&self) -> Bounds {
        HEADLESS_TRAY_BOUNDS
    }
}

impl HotkeyRegistrar for HeadlessHost {
    fn register(&self, accelerator: &str, action: HotkeyAction) -> Result<(), HostError> {
        let mut shortcuts = self.shortcuts.lock().unwrap_or_else(PoisonError::into_inner);
        if accelerator.trim().is_empty() || shortcuts.contains_key(accelerator) {
            return Err(HostError::AcceleratorUnavailable(accelerator.to_string()));
        }
        shortcuts.insert(accelerator.to_string(), action);
        info!(accelerator, %action, "Shortcut registered");
        Ok(())
    }

    fn unregister(&self, accelerator: &str) {
        let removed = self
            .shortcuts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(accelerator);
        if removed.is_some() {
            info!(accelerator, "Shortcut unregistered");
        }
    }

    fn is_registered(&self, accelerator: &str) -> bool {
        self.shortcuts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(accelerator)
    }

    fn unregister_all(&self) {
        self.shortcuts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        info!("All shortcuts unregistered");
    }
}

impl ThemePort for HeadlessHost {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn set_theme_source(&self, source: ThemeSource) {
        info!(?source, "Theme source set");
    }
}

impl LoginItemPort for HeadlessHost {
    fn set_open_at_login(&self, enabled: bool) -> Result<(), HostError> {
        *self.login_item.lock().unwrap_or_else(PoisonError::into_inner) = Some(enabled);
        info!(enabled, "Open at login set");
        Ok(())
    }
}

impl UiNotifier for HeadlessHost {
    fn notify(&self, window: WindowKind, message: UiMessage) {
        info!(%window, channel = message.channel(), "UI message sent");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traynote_core::EventBus;

    #[test]
    fn test_close_reports_window_closed() {
        let host = HeadlessHost::new(false, false);
        let bus = EventBus::new();
        host.attach(bus.publisher());

        let handle = host.create(&WindowOptions::settings()).unwrap();
        host.close(handle).unwrap();

        assert_eq!(bus.drain(), vec![AppEvent::WindowClosed(WindowKind::Settings)]);
        assert!(host.live_windows().is_empty());
    }

    #[test]
    fn test_moves_are_reflected_in_bounds() {
        let host = HeadlessHost::new(false, false);
        let handle = host.create(&WindowOptions::editor()).unwrap();

        host.set_position(handle, Position { x: 822, y: 22 }).unwrap();

        assert_eq!(host.window_bounds(handle), Ok(Bounds::new(822, 22, 400, 400)));
    }

    #[test]
    fn test_unknown_handle_is_rejected() {
        let host = HeadlessHost::new(false, false);
        assert_eq!(
            host.show(WindowHandle(9)),
            Err(HostError::UnknownWindow(9))
        );
    }

    #[test]
    fn test_shortcut_can_only_be_held_once() {
        let host = HeadlessHost::new(false, false);
        host.register("Alt+N", HotkeyAction::ToggleEditor).unwrap();
        assert!(host.register("Alt+N", HotkeyAction::Probe).is_err());

        host.unregister("Alt+N");
        assert!(!host.is_registered("Alt+N"));
        assert!(host.register("", HotkeyAction::Probe).is_err());
    }
}
