//! The line protocol read by `traynote run`.
//!
//! Each line is one host event or one settings-page command:
//!
//! ```text
//! click | settings | quit
//! hotkey <action>
//! focus|blur|minimize|close <window>
//! set <key> <value>
//! shortcut [<accelerator> [<representation>]]
//! note [--title <title>] <content>
//! log [info|warn|debug|error|track] <message>
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use thiserror::Error;
use traynote_core::{
    AppEvent, HotkeyAction, SettingValue, ShortcutData, TrayEvent, UiLogLevel, WindowKind,
};

use crate::values::parse_setting_value;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Forward to the core's event bus.
    Event(AppEvent),
    /// `changeSetting`
    Set { key: String, value: SettingValue },
    /// `setGlobalShortcut`
    Shortcut(ShortcutData),
    /// `storeNote`
    Note {
        title: Option<String>,
        content: String,
    },
    /// `log`
    Log { level: UiLogLevel, message: String },
}

impl SessionCommand {
    /// Parse one input line. `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Self>, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let command = match verb {
            "click" => Self::Event(AppEvent::Tray(TrayEvent::Clicked)),
            "settings" => Self::Event(AppEvent::Tray(TrayEvent::ShowSettings)),
            "quit" => Self::Event(AppEvent::Tray(TrayEvent::Quit)),
            "hotkey" => {
                let action = required(rest, "hotkey", "an action")?
                    .parse::<HotkeyAction>()
                    .map_err(SessionError::InvalidArgument)?;
                Self::Event(AppEvent::HotkeyPressed(action))
            }
            "focus" => Self::Event(AppEvent::WindowFocused(window(rest, "focus")?)),
            "blur" => Self::Event(AppEvent::WindowBlurred(window(rest, "blur")?)),
            "minimize" => Self::Event(AppEvent::WindowMinimized(window(rest, "minimize")?)),
            "close" => Self::Event(AppEvent::WindowCloseRequested(window(rest, "close")?)),
            "set" => {
                let (key, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(SessionError::MissingArgument {
                        command: "set",
                        argument: "a key and a value",
                    })?;
                Self::Set {
                    key: key.to_string(),
                    value: parse_setting_value(value.trim()),
                }
            }
            "shortcut" => {
                let mut parts = rest.splitn(2, char::is_whitespace);
                let accelerator = parts.next().filter(|a| !a.is_empty()).map(str::to_string);
                let representation = parts.next().map(|r| r.trim().to_string());
                Self::Shortcut(ShortcutData {
                    accelerator,
                    representation,
                })
            }
            "note" => parse_note(rest)?,
            "log" => parse_log(required(rest, "log", "a message")?),
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, SessionError> {
    if rest.is_empty() {
        Err(SessionError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn window(rest: &str, command: &'static str) -> Result<WindowKind, SessionError> {
    required(rest, command, "a window (editor or settings)")?
        .parse()
        .map_err(SessionError::InvalidArgument)
}

fn parse_note(rest: &str) -> Result<SessionCommand, SessionError> {
    let (title, content) = match rest.strip_prefix("--title") {
        Some(after) => {
            let after = after.trim_start();
            let (title, content) = after.split_once(char::is_whitespace).ok_or(
                SessionError::MissingArgument {
                    command: "note",
                    argument: "a title and content",
                },
            )?;
            (Some(title.to_string()), content.trim())
        }
        None => (None, rest),
    };

    Ok(SessionCommand::Note {
        title,
        content: required(content, "note", "content")?.to_string(),
    })
}

/// A leading level word is optional; without one the message logs at info.
fn parse_log(rest: &str) -> SessionCommand {
    const LEVELS: [&str; 6] = ["info", "warn", "warning", "debug", "error", "track"];

    let (first, after) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(first, after)| (first, after.trim()));
    let named = LEVELS.contains(&first.to_ascii_lowercase().as_str());

    if named && !after.is_empty() {
        SessionCommand::Log {
            level: UiLogLevel::parse(Some(first)),
            message: after.to_string(),
        }
    } else {
        SessionCommand::Log {
            level: UiLogLevel::Info,
            message: rest.to_string(),
        }
    }
}
