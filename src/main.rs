//! quicknote - Summarize a keyword with a local language model
//!
//! Entry point for the quicknote CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quicknote::cli::{commands, Cli, Commands};
use quicknote::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            commands::write_completions(shell, &mut std::io::stdout());
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Serve { host, port } => {
                    commands::serve(&settings, host, port).await?;
                }
                Commands::Summarize { keyword, model } => {
                    commands::summarize_keyword(&settings, &keyword, &model).await?;
                }
                Commands::Note { file, model } => {
                    commands::insert_note_summary(&settings, &file, &model).await?;
                }
                Commands::Doctor { json } => {
                    commands::run_doctor(&settings, json).await?;
                }
                Commands::Config(config_cmd) => {
                    commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
