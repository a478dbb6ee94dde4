//! Core of traynote, a tray-resident note taker.
//!
//! The crate owns the persisted settings document and everything that reacts
//! to it: the note store, the global toggle hotkey, the theme and login-item
//! flags, and the show/hide/close state of the editor and settings windows.
//! Native windows, tray, hotkeys and the file system are reached through the
//! traits in [`ports`]; adapters implement them and call [`AppCore::start`].

#![deny(unused_crate_dependencies)]

pub mod events;
pub mod hotkeys;
pub mod notes;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;
pub mod tray;
pub mod windows;

pub use events::{AppEvent, ChangeEvent, EventBus, EventPublisher};
pub use hotkeys::{FocusHotkeys, HotkeyCoordinator, HotkeyError};
pub use notes::{NoteError, NoteStore, StoredNote, check_title, note_file_name};
pub use paths::{PathError, ResolvedPaths, data_root, default_notes_dir, logs_dir, settings_path};
pub use ports::{
    Clock, CoreError, FileSystem, FixedClock, HostError, HostPorts, HotkeyAction,
    HotkeyRegistrar, LoginItemPort, StdFileSystem, SystemClock, ThemePort,
    ThemeSource, TrayHost, UiMessage, UiNotifier, WindowHandle, WindowHost, WindowKind,
    WindowOptions,
};
pub use services::{
    AppConfig, AppCore, CommandError, NewValue, SettingsData, ShortcutData, UI_PROCESS, UiLogLevel,
};
pub use settings::{
    SettingOption, SettingValue, SettingsDocument, SettingsError, SettingsSchema, SettingsStore,
    keys,
};
pub use tray::{TRAY_MENU, Tray, TrayEvent};
pub use windows::{
    Bounds, CloseDecision, PersistentState, PersistentWindow, Position, ShutdownFlag,
    TransientState, TransientWindow, WindowError, WindowSet,
};
