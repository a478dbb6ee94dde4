//! A host that records every call and keeps just enough state to answer
//! the core's questions.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use traynote_core::{
    AppConfig, Bounds, FileSystem, FixedClock, HostError, HostPorts, HotkeyAction,
    HotkeyRegistrar, LoginItemPort, Position, ThemePort, ThemeSource, TrayHost, UiMessage,
    UiNotifier, WindowHandle, WindowHost, WindowKind, WindowOptions,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Create(WindowKind, WindowHandle),
    Show(WindowHandle),
    Hide(WindowHandle),
    Focus(WindowHandle),
    Restore(WindowHandle),
    Close(WindowHandle),
    SetPosition(WindowHandle, Position),
    Register(String, HotkeyAction),
    Unregister(String),
    UnregisterAll,
    Theme(ThemeSource),
    LoginItem(bool),
    Notify(WindowKind, UiMessage),
}

pub struct RecordingHost {
    calls: Mutex<Vec<HostCall>>,
    next_handle: AtomicU64,
    live: Mutex<HashMap<WindowHandle, WindowKind>>,
    sizes: Mutex<HashMap<WindowHandle, (u32, u32)>>,
    registered: Mutex<HashMap<String, HotkeyAction>>,
    taken: Mutex<HashSet<String>>,
    tray_bounds: Mutex<Bounds>,
    prefers_dark: AtomicBool,
}

impl RecordingHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            next_handle: AtomicU64::new(1),
            live: Mutex::new(HashMap::new()),
            sizes: Mutex::new(HashMap::new()),
            registered: Mutex::new(HashMap::new()),
            taken: Mutex::new(HashSet::new()),
            tray_bounds: Mutex::new(Bounds::new(1000, 0, 22, 22)),
            prefers_dark: AtomicBool::new(false),
        })
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Simulate another application owning `accelerator`.
    pub fn take_accelerator(&self, accelerator: &str) {
        self.taken.lock().unwrap().insert(accelerator.to_string());
    }

    pub fn set_tray_bounds(&self, bounds: Bounds) {
        *self.tray_bounds.lock().unwrap() = bounds;
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.prefers_dark.store(dark, Ordering::SeqCst);
    }

    pub fn registered_action(&self, accelerator: &str) -> Option<HotkeyAction> {
        self.registered.lock().unwrap().get(accelerator).copied()
    }

    pub fn registered_count(&self) -> usize {
        self.registered.lock().unwrap().len()
    }

    pub fn live_windows(&self) -> Vec<WindowKind> {
        self.live.lock().unwrap().values().copied().collect()
    }

    pub fn handle_of(&self, kind: WindowKind) -> Option<WindowHandle> {
        self.live
            .lock()
            .unwrap()
            .iter()
            .find(|(_, k)| **k == kind)
            .map(|(handle, _)| *handle)
    }

    /// Simulate the user resizing a live window.
    pub fn resize(&self, kind: WindowKind, width: u32, height: u32) {
        let handle = self.handle_of(kind).unwrap();
        self.sizes.lock().unwrap().insert(handle, (width, height));
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_live(&self, handle: WindowHandle) -> Result<(), HostError> {
        if self.live.lock().unwrap().contains_key(&handle) {
            Ok(())
        } else {
            Err(HostError::UnknownWindow(handle.0))
        }
    }

    /// Every port backed by this host, with the given file system and a
    /// clock frozen at `now`.
    pub fn ports(self: &Arc<Self>, fs: Arc<dyn FileSystem>, now: NaiveDateTime) -> HostPorts {
        HostPorts {
            fs,
            windows: Arc::clone(self) as Arc<dyn WindowHost>,
            tray: Arc::clone(self) as Arc<dyn TrayHost>,
            hotkeys: Arc::clone(self) as Arc<dyn HotkeyRegistrar>,
            theme: Arc::clone(self) as Arc<dyn ThemePort>,
            login_items: Arc::clone(self) as Arc<dyn LoginItemPort>,
            ui: Arc::clone(self) as Arc<dyn UiNotifier>,
            clock: Arc::new(FixedClock(now)),
        }
    }
}

impl WindowHost for RecordingHost {
    fn create(&self, options: &WindowOptions) -> Result<WindowHandle, HostError> {
        let handle = WindowHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));
        self.live.lock().unwrap().insert(handle, options.kind);
        self.sizes
            .lock()
            .unwrap()
            .insert(handle, (options.width, options.height));
        self.record(HostCall::Create(options.kind, handle));
        Ok(handle)
    }

    fn show(&self, handle: WindowHandle) -> Result<(), HostError> {
        self.check_live(handle)?;
        self.record(HostCall::Show(handle));
        Ok(())
    }

    fn hide(&self, handle: WindowHandle) -> Result<(), HostError> {
        self.check_live(handle)?;
        self.record(HostCall::Hide(handle));
        Ok(())
    }

    fn focus(&self, handle: WindowHandle) -> Result<(), HostError> {
        self.check_live(handle)?;
        self.record(HostCall::Focus(handle));
        Ok(())
    }

    fn restore(&self, handle: WindowHandle) -> Result<(), HostError> {
        self.check_live(handle)?;
        self.record(HostCall::Restore(handle));
        Ok(())
    }

    fn close(&self, handle: WindowHandle) -> Result<(), HostError> {
        self.check_live(handle)?;
        self.live.lock().unwrap().remove(&handle);
        self.record(HostCall::Close(handle));
        Ok(())
    }

    fn set_position(&self, handle: WindowHandle, position: Position) -> Result<(), HostError> {
        self.check_live(handle)?;
        self.record(HostCall::SetPosition(handle, position));
        Ok(())
    }

    fn window_bounds(&self, handle: WindowHandle) -> Result<Bounds, HostError> {
        self.check_live(handle)?;
        let (width, height) = self.sizes.lock().unwrap()[&handle];
        Ok(Bounds::new(0, 0, width, height))
    }
}

impl TrayHost for RecordingHost {
    fn bounds(&self) -> Bounds {
        *self.tray_bounds.lock().unwrap()
    }
}

impl HotkeyRegistrar for RecordingHost {
    fn register(&self, accelerator: &str, action: HotkeyAction) -> Result<(), HostError> {
        let mut registered = self.registered.lock().unwrap();
        if self.taken.lock().unwrap().contains(accelerator) || registered.contains_key(accelerator)
        {
            return Err(HostError::AcceleratorUnavailable(accelerator.to_string()));
        }
        registered.insert(accelerator.to_string(), action);
        drop(registered);
        self.record(HostCall::Register(accelerator.to_string(), action));
        Ok(())
    }

    fn unregister(&self, accelerator: &str) {
        self.registered.lock().unwrap().remove(accelerator);
        self.record(HostCall::Unregister(accelerator.to_string()));
    }

    fn is_registered(&self, accelerator: &str) -> bool {
        self.registered.lock().unwrap().contains_key(accelerator)
    }

    fn unregister_all(&self) {
        self.registered.lock().unwrap().clear();
        self.record(HostCall::UnregisterAll);
    }
}

impl ThemePort for RecordingHost {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::SeqCst)
    }

    fn set_theme_source(&self, source: ThemeSource) {
        self.record(HostCall::Theme(source));
    }
}

impl LoginItemPort for RecordingHost {
    fn set_open_at_login(&self, enabled: bool) -> Result<(), HostError> {
        self.record(HostCall::LoginItem(enabled));
        Ok(())
    }
}

impl UiNotifier for RecordingHost {
    fn notify(&self, window: WindowKind, message: UiMessage) {
        self.record(HostCall::Notify(window, message));
    }
}

/// Config with everything under `root`.
pub fn config_in(root: &Path) -> AppConfig {
    AppConfig::new(root.join("appSettings.json"), root.join("notes"))
}
