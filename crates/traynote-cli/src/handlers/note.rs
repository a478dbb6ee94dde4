//! `traynote note save`

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Save `content`, or stdin when it is absent, and print the file path.
pub async fn save(ctx: &CliContext, title: Option<String>, content: Option<String>) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read note from stdin")?;
            buffer
        }
    };

    let stored = ctx
        .app()
        .store_note(content, title)
        .await
        .map_err(CliError::from)?;
    println!("{}", stored.file_path.display());
    Ok(())
}
