mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use doodle_core::DoodleConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doodle")]
#[command(about = "Read Doodle scheduling polls from the command line")]
struct Cli {
    /// Log more (-v for debug, -vv for trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of ~/.config/doodle/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a summary of a poll
    Show {
        /// Poll URL (https://doodle.com/poll/...) or poll id
        poll: String,
    },
    /// List the poll's participants, one per line
    Participants {
        /// Poll URL or poll id
        poll: String,
    },
    /// List the poll's finalized slots
    Final {
        /// Poll URL or poll id
        poll: String,
    },
    /// Print the poll JSON as returned by Doodle
    Raw {
        /// Poll URL or poll id
        poll: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => DoodleConfig::load_from(path)?,
        None => DoodleConfig::load()?,
    };
    tracing::debug!(provider = %config.provider_url, "Loaded configuration");

    match cli.command {
        Commands::Show { poll } => commands::show::run(&config, &poll),
        Commands::Participants { poll } => commands::participants::run(&config, &poll),
        Commands::Final { poll } => commands::final_slots::run(&config, &poll),
        Commands::Raw { poll } => commands::raw::run(&config, &poll),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,doodle_core={},doodle={}", level, level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
