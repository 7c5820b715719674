use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promodeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "promodeck")]
#[command(version, about = "An animated promo-page presenter for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to present (shorthand for `run --deck`)
    #[arg(short, long)]
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a deck (the default command)
    Run {
        /// Deck file; falls back to the configured deck, then the
        /// built-in sample
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },
    /// Parse and validate a deck file without presenting it
    Check {
        /// Deck file to check
        file: PathBuf,
    },
    /// Write the built-in sample deck as a starting template
    Init {
        /// Destination file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(config, deck.or(cli.deck)),
        None => commands::run::run(config, cli.deck),
        Some(Commands::Check { file }) => commands::check::run(&file),
        Some(Commands::Init { file }) => commands::init::run(&file),
    }
}
