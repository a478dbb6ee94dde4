//! Subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or change application settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Save notes into the configured note directory
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },
    /// Show resolved data, settings, log and note paths
    Paths,
    /// Run the tray session headless, reading host events from stdin
    Run,
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print every setting as `key = value`
    Show,
    /// Print the allowed values of each setting
    Options,
    /// Change one setting
    Set {
        /// Setting key, e.g. darkTheme
        key: String,
        /// JSON literal (true, false, null, "text"); anything else is taken as text
        value: String,
    },
}

#[derive(Subcommand)]
pub enum NoteCommand {
    /// Write a note and print where it went
    Save {
        /// File name without extension; defaults to a timestamp
        #[arg(short, long)]
        title: Option<String>,
        /// Note text; read from stdin when omitted
        content: Option<String>,
    },
}
