mod api;
mod board;
mod config;
mod render;
mod serve;
mod stats;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sigboard_sessions::{view, BaseLocation, SessionLoader};

use crate::config::ProjectConfig;

/// Base location used when neither the CLI nor the config file names one.
const DEFAULT_BASE: &str = "./data";

#[derive(Parser, Debug)]
#[command(
    name = "sigboard",
    about = "Dashboard for diagnostic session records",
    version
)]
struct Cli {
    /// Base location for the manifest and session files (directory or URL)
    #[arg(short, long)]
    base: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormatChoice,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the dashboard in the terminal
    Board {
        /// Pre-select a country filter
        #[arg(short, long)]
        country: Option<String>,

        /// Pick countries interactively to toggle the filter
        #[arg(short, long)]
        interactive: bool,

        /// Print the statistics as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },

    /// Print aggregate statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the dashboard API over HTTP
    Serve {
        /// Port to bind the API server on
        #[arg(short, long, default_value_t = 7171)]
        port: u16,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatChoice {
    Pretty,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = ProjectConfig::load(&working_dir)?.unwrap_or_default();

    let base = cli
        .base
        .or_else(|| config.base.clone())
        .unwrap_or_else(|| DEFAULT_BASE.to_string());
    let limit = config.limit.unwrap_or(view::RECENT_LIMIT);

    let loader = SessionLoader::new(BaseLocation::parse(&base));

    match cli.command {
        Command::Board {
            country,
            interactive,
            json,
        } => board::handle_board_command(&loader, country, interactive, json, limit).await,
        Command::Stats { json } => stats::handle_stats_command(&loader, json).await,
        Command::Serve { port } => serve::handle_serve_command(loader, limit, port).await,
    }
}

fn init_tracing(format: LogFormatChoice) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormatChoice::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(false))
                .init();
        }
        LogFormatChoice::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false))
                .init();
        }
    }
}
