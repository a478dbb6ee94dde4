//! Command-line adapter for traynote.
//!
//! The binary is the composition root: it resolves paths, builds a
//! [`HeadlessHost`] and boots `AppCore` against it. Handlers stay thin and
//! only format what the core returns.

#![deny(unused_crate_dependencies)]

// Used by the binary target only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod host;
pub mod logging;
pub mod parser;
pub mod session;
pub mod values;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, NoteCommand, SettingsCommand};
pub use error::CliError;
pub use host::HeadlessHost;
pub use parser::Cli;
pub use session::{SessionCommand, SessionError};
