//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics.

use anyhow::Result;

use crate::bootstrap::CliConfig;

/// Print every path the CLI uses in `key = value` format.
pub fn execute(config: &CliConfig) -> Result<()> {
    println!("{}", config.paths);
    Ok(())
}
