//! Orchestrator behavior: startup wiring, settings reactions, host events
//! and the command surface.

mod common;

use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use common::host::{HostCall, RecordingHost, config_in};
use tempfile::{TempDir, tempdir};
use traynote_core::{
    AppCore, AppEvent, Bounds, CloseDecision, CommandError, CoreError, HotkeyAction, HotkeyError,
    PersistentState, Position, SettingValue, SettingsError, ShortcutData, StdFileSystem,
    ThemeSource, TransientState, TrayEvent, UiMessage, WindowKind, keys,
};

fn frozen_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 2)
        .unwrap()
        .and_hms_opt(8, 9, 5)
        .unwrap()
}

fn boot(host: &Arc<RecordingHost>, root: &Path) -> AppCore {
    AppCore::start(
        config_in(root),
        host.ports(Arc::new(StdFileSystem::new()), frozen_now()),
    )
    .unwrap()
}

fn started() -> (AppCore, Arc<RecordingHost>, TempDir) {
    let dir = tempdir().unwrap();
    let host = RecordingHost::new();
    let app = boot(&host, dir.path());
    (app, host, dir)
}

fn write_settings(root: &Path, accelerator: &str) {
    let document = serde_json::json!({
        "launchOnStartup": false,
        "notePath": root.join("stored-notes").to_string_lossy(),
        "darkTheme": false,
        "globalShortcutAccelerator": accelerator,
        "globalShortcutRepresentation": "⌘⇧N"
    });
    std::fs::write(root.join("appSettings.json"), document.to_string()).unwrap();
}

#[test]
fn start_applies_settings_to_host() {
    let (app, host, dir) = started();

    let calls = host.calls();
    assert!(calls.contains(&HostCall::Theme(ThemeSource::Light)));
    assert!(calls.contains(&HostCall::LoginItem(true)));
    assert!(calls.iter().any(|c| matches!(c, HostCall::Create(WindowKind::Editor, _))));

    let notes_dir = dir.path().join("notes");
    assert_eq!(app.document().text(keys::NOTE_PATH), Some(notes_dir.to_str().unwrap()));
    assert!(notes_dir.is_dir());
    assert_eq!(app.windows().editor.state(), PersistentState::Hidden);
    assert_eq!(app.windows().settings.state(), TransientState::Absent);
    assert!(app.is_running());
}

#[test]
fn dark_system_theme_seeds_default() {
    let dir = tempdir().unwrap();
    let host = RecordingHost::new();
    host.set_prefers_dark(true);

    let app = boot(&host, dir.path());

    assert!(app.document().flag(keys::DARK_THEME));
    assert!(host.calls().contains(&HostCall::Theme(ThemeSource::Dark)));
}

#[test]
fn stored_settings_are_honored() {
    let dir = tempdir().unwrap();
    write_settings(dir.path(), "Cmd+Shift+N");
    let host = RecordingHost::new();

    let app = boot(&host, dir.path());

    assert_eq!(host.registered_action("Cmd+Shift+N"), Some(HotkeyAction::ToggleEditor));
    assert!(host.calls().contains(&HostCall::LoginItem(false)));
    assert_eq!(app.notes().store_path(), dir.path().join("stored-notes"));
    assert!(dir.path().join("stored-notes").is_dir());
}

#[test]
fn taken_accelerator_at_start_is_not_fatal() {
    let dir = tempdir().unwrap();
    write_settings(dir.path(), "Cmd+Shift+N");
    let host = RecordingHost::new();
    host.take_accelerator("Cmd+Shift+N");

    let app = boot(&host, dir.path());

    assert_eq!(app.toggle_hotkey().current_binding(), None);
    assert!(app.is_running());
}

#[test]
fn corrupt_settings_file_is_fatal() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("appSettings.json"), "not json").unwrap();
    let host = RecordingHost::new();

    let result = AppCore::start(
        config_in(dir.path()),
        host.ports(Arc::new(StdFileSystem::new()), frozen_now()),
    );

    assert!(matches!(
        result,
        Err(CoreError::Settings(SettingsError::CorruptConfig { .. }))
    ));
}

#[test]
fn accelerator_change_moves_registration() {
    let (mut app, host, _dir) = started();

    app.change_setting(keys::GLOBAL_SHORTCUT_ACCELERATOR, "Cmd+Shift+N".into())
        .unwrap();
    app.change_setting(keys::GLOBAL_SHORTCUT_ACCELERATOR, "Cmd+Alt+N".into())
        .unwrap();

    assert_eq!(host.registered_action("Cmd+Shift+N"), None);
    assert_eq!(host.registered_action("Cmd+Alt+N"), Some(HotkeyAction::ToggleEditor));
    assert_eq!(app.toggle_hotkey().current_binding().as_deref(), Some("Cmd+Alt+N"));

    app.change_setting(keys::GLOBAL_SHORTCUT_ACCELERATOR, SettingValue::Null)
        .unwrap();
    assert_eq!(app.toggle_hotkey().current_binding(), None);
    assert_eq!(host.registered_count(), 0);
}

#[test]
fn conflicting_binding_leaves_nothing_registered() {
    let (app, host, _dir) = started();
    app.toggle_hotkey().apply_binding(Some("Cmd+Alt+N")).unwrap();
    host.take_accelerator("Cmd+Shift+N");

    let result = app.toggle_hotkey().apply_binding(Some("Cmd+Shift+N"));

    assert!(matches!(result, Err(HotkeyError::Conflict { .. })));
    assert_eq!(app.toggle_hotkey().current_binding(), None);
    assert_eq!(host.registered_count(), 0);
}

#[test]
fn tray_click_toggles_editor_at_tray_position() {
    let (mut app, host, _dir) = started();
    host.set_tray_bounds(Bounds::new(1200, 0, 24, 24));
    let handle = host.handle_of(WindowKind::Editor).unwrap();

    app.publisher().publish(AppEvent::Tray(TrayEvent::Clicked));
    assert_eq!(app.run_pending(), 1);

    assert_eq!(app.windows().editor.state(), PersistentState::Visible);
    assert!(host.calls().contains(&HostCall::SetPosition(handle, Position { x: 824, y: 24 })));

    app.dispatch(AppEvent::Tray(TrayEvent::Clicked)).unwrap();
    assert_eq!(app.windows().editor.state(), PersistentState::Hidden);
}

#[test]
fn quit_closes_settings_then_editor() {
    let (mut app, host, _dir) = started();
    app.dispatch(AppEvent::Tray(TrayEvent::ShowSettings)).unwrap();
    let settings = app.windows().settings.handle().unwrap();
    let editor = host.handle_of(WindowKind::Editor).unwrap();
    host.clear_calls();

    app.dispatch(AppEvent::Tray(TrayEvent::Quit)).unwrap();

    let closes: Vec<_> = host
        .calls()
        .into_iter()
        .filter(|c| matches!(c, HostCall::Close(_)))
        .collect();
    assert_eq!(closes, vec![HostCall::Close(settings), HostCall::Close(editor)]);
    assert!(!app.is_running());
    assert!(host.live_windows().is_empty());
}

#[test]
fn hotkeys_drive_editor_and_settings() {
    let (mut app, host, _dir) = started();
    app.dispatch(AppEvent::HotkeyPressed(HotkeyAction::ToggleEditor))
        .unwrap();
    assert_eq!(app.windows().editor.state(), PersistentState::Visible);

    app.dispatch(AppEvent::HotkeyPressed(HotkeyAction::SaveNote))
        .unwrap();
    assert!(host.calls().contains(&HostCall::Notify(
        WindowKind::Editor,
        UiMessage::SaveShortcutPressed
    )));

    app.dispatch(AppEvent::HotkeyPressed(HotkeyAction::HideEditor))
        .unwrap();
    assert_eq!(app.windows().editor.state(), PersistentState::Hidden);

    app.dispatch(AppEvent::Tray(TrayEvent::ShowSettings)).unwrap();
    app.dispatch(AppEvent::HotkeyPressed(HotkeyAction::CloseSettings))
        .unwrap();
    assert_eq!(app.windows().settings.state(), TransientState::Absent);
}

#[test]
fn close_requests_follow_window_rules() {
    let (mut app, host, _dir) = started();
    app.dispatch(AppEvent::Tray(TrayEvent::ShowSettings)).unwrap();

    assert_eq!(
        app.handle_close_request(WindowKind::Editor).unwrap(),
        CloseDecision::Veto
    );
    assert!(app.is_running());

    app.dispatch(AppEvent::WindowCloseRequested(WindowKind::Settings))
        .unwrap();
    assert_eq!(app.windows().settings.state(), TransientState::Absent);
    assert_eq!(host.live_windows(), vec![WindowKind::Editor]);
}

#[test]
fn focus_events_scope_shortcuts() {
    let (mut app, host, _dir) = started();
    app.dispatch(AppEvent::Tray(TrayEvent::Clicked)).unwrap();

    app.dispatch(AppEvent::WindowFocused(WindowKind::Editor)).unwrap();
    assert_eq!(host.registered_action("Cmd+S"), Some(HotkeyAction::SaveNote));

    app.dispatch(AppEvent::WindowBlurred(WindowKind::Editor)).unwrap();
    assert_eq!(host.registered_action("Cmd+S"), None);
    assert_eq!(app.windows().editor.state(), PersistentState::Hidden);
}

#[test]
fn quitting_releases_every_shortcut() {
    let (mut app, host, _dir) = started();
    app.change_setting(keys::GLOBAL_SHORTCUT_ACCELERATOR, "Cmd+Shift+N".into())
        .unwrap();

    app.dispatch(AppEvent::Quitting).unwrap();

    assert!(host.calls().contains(&HostCall::UnregisterAll));
    assert_eq!(host.registered_count(), 0);
    assert_eq!(app.toggle_hotkey().current_binding(), None);
}

#[test]
fn set_global_shortcut_persists_both_fields() {
    let (mut app, host, _dir) = started();

    app.set_global_shortcut(ShortcutData {
        accelerator: Some("Cmd+Shift+N".to_string()),
        representation: Some("⌘⇧N".to_string()),
    })
    .unwrap();

    assert_eq!(app.document().text(keys::GLOBAL_SHORTCUT_ACCELERATOR), Some("Cmd+Shift+N"));
    assert_eq!(app.document().text(keys::GLOBAL_SHORTCUT_REPRESENTATION), Some("⌘⇧N"));
    assert_eq!(host.registered_action("Cmd+Shift+N"), Some(HotkeyAction::ToggleEditor));
}

#[test]
fn set_global_shortcut_rejects_taken_accelerator() {
    let (mut app, host, _dir) = started();
    host.take_accelerator("Cmd+Shift+N");
    let before = app.get_settings_data();

    let result = app.set_global_shortcut(ShortcutData {
        accelerator: Some("Cmd+Shift+N".to_string()),
        representation: Some("⌘⇧N".to_string()),
    });

    assert!(matches!(result, Err(CommandError::HotkeyConflict(_))));
    assert_eq!(app.get_settings_data(), before);
}

#[test]
fn set_global_shortcut_clears_and_validates() {
    let (mut app, host, _dir) = started();
    app.set_global_shortcut(ShortcutData {
        accelerator: Some("Cmd+Shift+N".to_string()),
        representation: Some("⌘⇧N".to_string()),
    })
    .unwrap();

    app.set_global_shortcut(ShortcutData::default()).unwrap();
    assert_eq!(
        app.document().get(keys::GLOBAL_SHORTCUT_ACCELERATOR),
        Some(&SettingValue::Null)
    );
    assert_eq!(host.registered_count(), 0);

    let result = app.set_global_shortcut(ShortcutData {
        accelerator: None,
        representation: Some("⌘⇧N".to_string()),
    });
    assert!(matches!(result, Err(CommandError::InvalidInput(_))));
}

#[test]
fn toggles_flip_flags_and_notify_host() {
    let (mut app, host, _dir) = started();

    assert!(app.toggle_theme().unwrap().new_value);
    assert!(!app.toggle_launch_on_startup().unwrap().new_value);

    let calls = host.calls();
    assert!(calls.contains(&HostCall::Theme(ThemeSource::Dark)));
    assert!(calls.contains(&HostCall::LoginItem(false)));
}

#[test]
fn change_setting_forwards_validation_errors() {
    let (mut app, _host, _dir) = started();

    let unknown = app.change_setting("fontSize", SettingValue::Bool(true));
    let invalid = app.change_setting(keys::DARK_THEME, "dark".into());

    assert!(matches!(unknown, Err(CommandError::UnknownKey(_))));
    assert!(matches!(invalid, Err(CommandError::InvalidValue(_))));
    assert!(matches!(app.set_note_path("  "), Err(CommandError::InvalidInput(_))));
}

#[test]
fn setting_options_expose_schema() {
    let (app, _host, _dir) = started();

    let options = app.get_setting_options();

    assert_eq!(options.len(), 5);
    assert_eq!(options[keys::DARK_THEME][1].label, "dark");
}

#[tokio::test]
async fn store_note_uses_timestamp_name() {
    let (app, _host, dir) = started();

    let stored = app.store_note("hello".to_string(), None).await.unwrap();

    let expected = dir.path().join("notes").join("Note_2024-03-02_08-09-05.md");
    assert_eq!(stored.file_path, expected);
    assert_eq!(std::fs::read_to_string(expected).unwrap(), "hello");
}

#[tokio::test]
async fn note_path_change_redirects_notes() {
    let (mut app, _host, dir) = started();
    let elsewhere = dir.path().join("elsewhere");

    app.set_note_path(elsewhere.to_str().unwrap()).unwrap();
    let stored = app
        .store_note("# Groceries".to_string(), Some("Groceries".to_string()))
        .await
        .unwrap();

    assert_eq!(stored.file_path, elsewhere.join("Groceries.md"));
    assert!(stored.file_path.is_file());
}

#[tokio::test]
async fn null_note_path_keeps_previous_directory() {
    let (mut app, _host, dir) = started();

    app.change_setting(keys::NOTE_PATH, SettingValue::Null).unwrap();
    let stored = app.store_note("x".to_string(), Some("kept".to_string())).await.unwrap();

    assert_eq!(stored.file_path, dir.path().join("notes").join("kept.md"));
}
