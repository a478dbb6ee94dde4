//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the tray note taker.
#[derive(Parser)]
#[command(name = "traynote")]
#[command(about = "Take quick notes from the menu bar")]
#[command(version)]
pub struct Cli {
    /// Keep the editor open on blur and leave the reload shortcut alone
    #[arg(long, global = true)]
    pub dev: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    pub debug: bool,

    /// Override the directory holding settings and logs
    #[arg(long = "data-dir", env = "TRAYNOTE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
