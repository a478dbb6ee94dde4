//! traynote binary - the composition root for the command line.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::error;

use traynote_cli::bootstrap::{CliConfig, bootstrap};
use traynote_cli::commands::{Commands, NoteCommand, SettingsCommand};
use traynote_cli::handlers;
use traynote_cli::logging::init_tracing;
use traynote_cli::{Cli, CliError};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before anything reads TRAYNOTE_DATA_DIR
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %format!("{err:#}"), "Command failed");
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.data_dir {
        Some(dir) => CliConfig::with_data_dir(dir)?,
        None => CliConfig::with_defaults()?,
    }
    .dev_mode(cli.dev);

    let _guard = init_tracing(&config.paths.logs_dir, cli.debug);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Paths must work even when the settings file is broken
    if matches!(command, Commands::Paths) {
        return handlers::paths::execute(&config);
    }

    let mut ctx = bootstrap(&config)?;

    match command {
        Commands::Settings { command } => match command {
            SettingsCommand::Show => handlers::settings::show(&ctx)?,
            SettingsCommand::Options => handlers::settings::options(&ctx)?,
            SettingsCommand::Set { key, value } => {
                handlers::settings::set(&mut ctx, &key, &value)?;
            }
        },
        Commands::Note { command } => match command {
            NoteCommand::Save { title, content } => {
                handlers::note::save(&ctx, title, content).await?;
            }
        },
        Commands::Run => handlers::run::execute(&mut ctx).await?,
        Commands::Paths => handlers::paths::execute(&config)?,
    }

    Ok(())
}
