//! The orchestrator: wires settings changes and host events to the stores,
//! the hotkey coordinator and the window controllers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use super::config::AppConfig;
use crate::events::{AppEvent, EventBus, EventPublisher};
use crate::hotkeys::{FocusHotkeys, HotkeyCoordinator};
use crate::notes::NoteStore;
use crate::ports::{
    CoreError, HostPorts, HotkeyAction, LoginItemPort, ThemeSource, UiMessage, WindowKind,
    WindowOptions,
};
use crate::settings::{SettingValue, SettingsDocument, SettingsSchema, SettingsStore, keys};
use crate::tray::{Tray, TrayEvent};
use crate::windows::{
    CloseDecision, PersistentWindow, TransientWindow, WindowError, WindowSet,
};

/// The running application core.
///
/// Owns the settings store, the note store, both window controllers and the
/// tray observer. Everything here runs on one control thread; host callbacks
/// reach it through [`EventPublisher`].
pub struct AppCore {
    config: AppConfig,
    ports: HostPorts,
    settings: SettingsStore,
    notes: Arc<NoteStore>,
    toggle_hotkey: Arc<HotkeyCoordinator>,
    windows: WindowSet,
    tray: Tray,
    bus: EventBus,
}

fn track(milestone: &str, started: Instant) {
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(milestone, elapsed_ms, "Startup milestone");
}

/// Accelerator stored in the document; empty strings count as unset.
fn stored_accelerator(value: Option<&SettingValue>) -> Option<&str> {
    value.and_then(SettingValue::as_str).filter(|s| !s.is_empty())
}

fn apply_login_item(login_items: &dyn LoginItemPort, enabled: bool) {
    match login_items.set_open_at_login(enabled) {
        Ok(()) => debug!(enabled, "Login item updated"),
        Err(err) => error!(enabled, error = %err, "Couldn't update login item"),
    }
}

impl AppCore {
    /// Boot the core.
    ///
    /// Settings load failures and an unusable note directory are fatal. A
    /// stored accelerator that can't be registered is logged and skipped.
    pub fn start(config: AppConfig, ports: HostPorts) -> Result<Self, CoreError> {
        let started = Instant::now();
        track("app_core:start", started);

        let schema = SettingsSchema::builtin(ports.theme.prefers_dark());
        let mut settings =
            SettingsStore::load(&config.settings_path, schema, Arc::clone(&ports.fs))?;
        track("settings:loaded", started);

        if settings.get().text(keys::NOTE_PATH).is_none_or(str::is_empty) {
            let fallback = config.default_notes_dir.to_string_lossy().into_owned();
            info!(path = %fallback, "No note path configured, using default");
            settings.set(keys::NOTE_PATH, fallback)?;
        }

        let note_dir = PathBuf::from(settings.get().text(keys::NOTE_PATH).unwrap_or_default());
        let notes = Arc::new(NoteStore::new(
            note_dir,
            Arc::clone(&ports.fs),
            Arc::clone(&ports.clock),
        ));
        notes.ensure_directory()?;
        track("notes:ready", started);

        Self::subscribe_note_path(&mut settings, &notes)?;
        Self::sync_theme(&mut settings, &ports)?;
        Self::sync_login_item(&mut settings, &ports)?;

        let toggle_hotkey = Arc::new(HotkeyCoordinator::new(
            Arc::clone(&ports.hotkeys),
            HotkeyAction::ToggleEditor,
        ));
        Self::sync_toggle_hotkey(&mut settings, &toggle_hotkey)?;
        track("hotkeys:ready", started);

        let editor = PersistentWindow::create(
            Arc::clone(&ports.windows),
            WindowOptions::editor(),
            FocusHotkeys::editor(Arc::clone(&ports.hotkeys), config.dev_mode),
            config.dev_mode,
        )?;
        let settings_window = TransientWindow::new(
            Arc::clone(&ports.windows),
            WindowOptions::settings(),
            FocusHotkeys::settings(Arc::clone(&ports.hotkeys)),
        );
        let windows = WindowSet::new(editor, settings_window, Arc::clone(&ports.tray));
        track("windows:ready", started);

        let mut tray = Tray::new();
        tray.subscribe(TrayEvent::Clicked, WindowSet::toggle_editor);
        tray.subscribe(TrayEvent::ShowSettings, WindowSet::show_settings);
        tray.subscribe(TrayEvent::Quit, WindowSet::quit);
        track("app_core:ready", started);

        Ok(Self {
            config,
            ports,
            settings,
            notes,
            toggle_hotkey,
            windows,
            tray,
            bus: EventBus::new(),
        })
    }

    fn subscribe_note_path(
        settings: &mut SettingsStore,
        notes: &Arc<NoteStore>,
    ) -> Result<(), CoreError> {
        let notes = Arc::clone(notes);
        settings.subscribe(keys::NOTE_PATH, move |event| {
            match event.new_value.as_str().filter(|p| !p.is_empty()) {
                Some(path) => notes.set_store_path(path),
                None => warn!("Note path cleared, keeping the previous directory"),
            }
        })?;
        Ok(())
    }

    fn sync_theme(settings: &mut SettingsStore, ports: &HostPorts) -> Result<(), CoreError> {
        let dark = settings.get().flag(keys::DARK_THEME);
        ports.theme.set_theme_source(ThemeSource::from_dark_flag(dark));

        let theme = Arc::clone(&ports.theme);
        settings.subscribe(keys::DARK_THEME, move |event| {
            let dark = event.new_value.as_bool().unwrap_or(false);
            theme.set_theme_source(ThemeSource::from_dark_flag(dark));
            debug!(dark, "Theme changed");
        })?;
        Ok(())
    }

    fn sync_login_item(settings: &mut SettingsStore, ports: &HostPorts) -> Result<(), CoreError> {
        apply_login_item(
            ports.login_items.as_ref(),
            settings.get().flag(keys::LAUNCH_ON_STARTUP),
        );

        let login_items = Arc::clone(&ports.login_items);
        settings.subscribe(keys::LAUNCH_ON_STARTUP, move |event| {
            apply_login_item(
                login_items.as_ref(),
                event.new_value.as_bool().unwrap_or(false),
            );
        })?;
        Ok(())
    }

    fn sync_toggle_hotkey(
        settings: &mut SettingsStore,
        coordinator: &Arc<HotkeyCoordinator>,
    ) -> Result<(), CoreError> {
        let stored = stored_accelerator(settings.get().get(keys::GLOBAL_SHORTCUT_ACCELERATOR));
        if let Err(err) = coordinator.apply_binding(stored) {
            warn!(error = %err, "Stored global shortcut could not be registered");
        }

        let coordinator = Arc::clone(coordinator);
        settings.subscribe(keys::GLOBAL_SHORTCUT_ACCELERATOR, move |event| {
            if let Err(err) = coordinator.apply_binding(stored_accelerator(Some(&event.new_value))) {
                error!(error = %err, "Global shortcut change could not be applied");
            }
        })?;
        Ok(())
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handle for host callbacks to queue events.
    pub fn publisher(&self) -> EventPublisher {
        self.bus.publisher()
    }

    pub const fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub(crate) fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    pub const fn notes(&self) -> &Arc<NoteStore> {
        &self.notes
    }

    pub const fn toggle_hotkey(&self) -> &Arc<HotkeyCoordinator> {
        &self.toggle_hotkey
    }

    pub const fn windows(&self) -> &WindowSet {
        &self.windows
    }

    pub const fn document(&self) -> &SettingsDocument {
        self.settings.get()
    }

    /// False once the editor window has been destroyed.
    pub const fn is_running(&self) -> bool {
        !self.windows.editor.is_destroyed()
    }

    /// Answer a close request synchronously.
    ///
    /// Allowed settings-window closes are carried out here; the host only
    /// reports the final `WindowClosed`.
    pub fn handle_close_request(&mut self, kind: WindowKind) -> Result<CloseDecision, CoreError> {
        let decision = self.windows.handle_close_request(kind);
        if decision == CloseDecision::Allow && kind == WindowKind::Settings {
            self.windows.settings.close()?;
        }
        Ok(decision)
    }

    /// Handle one host event.
    pub fn dispatch(&mut self, event: AppEvent) -> Result<(), CoreError> {
        debug!(?event, "Dispatching host event");
        match event {
            AppEvent::Tray(tray_event) => self.tray.emit(tray_event, &mut self.windows),
            AppEvent::HotkeyPressed(action) => self.on_hotkey(action)?,
            AppEvent::WindowFocused(kind) => self.windows.on_focus(kind),
            AppEvent::WindowBlurred(kind) => self.windows.on_blur(kind)?,
            AppEvent::WindowMinimized(WindowKind::Settings) => {
                self.windows.settings.on_minimized();
            }
            AppEvent::WindowMinimized(WindowKind::Editor) => {
                debug!("Editor can't be minimized, ignoring");
            }
            AppEvent::WindowCloseRequested(kind) => {
                let decision = self.handle_close_request(kind)?;
                debug!(window = %kind, ?decision, "Close request answered");
            }
            AppEvent::WindowClosed(WindowKind::Settings) => self.windows.settings.on_closed(),
            AppEvent::WindowClosed(WindowKind::Editor) => self.windows.editor.on_closed(),
            AppEvent::Quitting => self.on_quitting(),
        }
        Ok(())
    }

    /// Drain the bus and dispatch everything queued so far.
    ///
    /// Failures are logged per event; returns how many events were handled.
    pub fn run_pending(&mut self) -> usize {
        let events = self.bus.drain();
        let count = events.len();
        for event in events {
            if let Err(err) = self.dispatch(event) {
                error!(?event, error = %err, "Host event failed");
            }
        }
        count
    }

    fn on_hotkey(&mut self, action: HotkeyAction) -> Result<(), WindowError> {
        match action {
            HotkeyAction::ToggleEditor => self.windows.toggle_editor(),
            HotkeyAction::SaveNote => {
                self.ports
                    .ui
                    .notify(WindowKind::Editor, UiMessage::SaveShortcutPressed);
                Ok(())
            }
            HotkeyAction::HideEditor => self.windows.editor.hide(),
            HotkeyAction::CloseSettings => self.windows.settings.close(),
            HotkeyAction::BlockReload | HotkeyAction::Probe => {
                debug!(%action, "Shortcut swallowed");
                Ok(())
            }
        }
    }

    fn on_quitting(&self) {
        info!("Application quitting, releasing all shortcuts");
        self.toggle_hotkey.release();
        self.ports.hotkeys.unregister_all();
    }
}
