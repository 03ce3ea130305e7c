use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::{AppConfig, Portfolio};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A personal portfolio that lives in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content file to show instead of the configured or bundled one
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Config file (defaults to ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Open on the story page
        #[arg(long)]
        story: bool,
    },
    /// Print the career timeline
    Story {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the project grid
    Projects,
    /// Write a default config and content file
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config and content and print a summary
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let command = cli.command.unwrap_or(Commands::Run { story: false });

    // Init repairs a broken config, so it must not need to load one
    if let Commands::Init { force } = command {
        init_logging(&AppConfig::default(), false)?;
        return commands::init::run(&config_path, force);
    }

    let config = Arc::new(AppConfig::load_from(&config_path)?);
    init_logging(&config, matches!(command, Commands::Run { .. }))?;

    let portfolio = Portfolio::resolve(&config, cli.content.as_deref())
        .context("failed to load portfolio content")?;

    match command {
        Commands::Run { story } => commands::run::run(config, Arc::new(portfolio), story).await,
        Commands::Story { json } => commands::story::run(&portfolio, json),
        Commands::Projects => commands::projects::run(&portfolio),
        Commands::Check => commands::check::run(&config, &portfolio),
        Commands::Init { .. } => Ok(()),
    }
}

/// The TUI owns the terminal, so it logs to a file; subcommands log to stderr
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
