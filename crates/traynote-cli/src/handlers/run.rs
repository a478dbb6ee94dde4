//! `traynote run`: a headless tray session.
//!
//! Host events are read line by line (see [`crate::session`]), published on
//! the core's event bus and dispatched right away. The session ends once the
//! editor window is destroyed. End of input quits the app the same way the
//! tray "Quit" item does.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use traynote_core::{AppEvent, TrayEvent};

use crate::bootstrap::CliContext;
use crate::session::SessionCommand;

/// What happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank input lines read.
    pub lines: usize,
    /// Host events dispatched by the core.
    pub events: usize,
    /// Lines that failed to parse or were refused by the core.
    pub rejected: usize,
}

pub async fn execute(ctx: &mut CliContext) -> Result<()> {
    let summary = drive(ctx, BufReader::new(tokio::io::stdin())).await?;
    info!(
        lines = summary.lines,
        events = summary.events,
        rejected = summary.rejected,
        "Session ended"
    );
    Ok(())
}

/// Feed `reader` to the core until the app stops running.
pub async fn drive<R>(ctx: &mut CliContext, reader: R) -> Result<SessionSummary>
where
    R: AsyncBufRead + Unpin,
{
    let publisher = ctx.app().publisher();
    let mut lines = reader.lines();
    let mut summary = SessionSummary::default();

    while ctx.app().is_running() {
        let Some(line) = lines.next_line().await? else {
            info!("Input closed, quitting");
            publisher.publish(AppEvent::Tray(TrayEvent::Quit));
            summary.events += ctx.app_mut().run_pending();
            break;
        };

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                summary.lines += 1;
                summary.rejected += 1;
                warn!(line = %line.trim(), error = %err, "Ignoring input line");
                continue;
            }
        };
        summary.lines += 1;

        let outcome = match command {
            SessionCommand::Event(event) => {
                publisher.publish(event);
                summary.events += ctx.app_mut().run_pending();
                Ok(())
            }
            SessionCommand::Set { key, value } => ctx.app_mut().change_setting(&key, value),
            SessionCommand::Shortcut(data) => ctx.app_mut().set_global_shortcut(data),
            SessionCommand::Note { title, content } => {
                ctx.app().store_note(content, title).await.map(|stored| {
                    info!(path = %stored.file_path.display(), "Note saved");
                })
            }
            SessionCommand::Log { level, message } => {
                ctx.app().log_from_ui(level, &message);
                Ok(())
            }
        };

        if let Err(err) = outcome {
            summary.rejected += 1;
            warn!(error = %err, "Command refused");
        }
    }

    publisher.publish(AppEvent::Quitting);
    summary.events += ctx.app_mut().run_pending();
    Ok(summary)
}
