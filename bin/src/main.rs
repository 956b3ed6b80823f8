//! candela CLI - OHLCV candlestick dataset manager for Bybit trade archives.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "candela")]
#[command(about = "Builds OHLCV candlestick datasets from Bybit trade archives", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download daily trade archives and store one-second candles
    Update {
        /// Trading symbol (e.g., BTCUSD)
        symbol: String,

        /// First day to fetch (YYYYMMDD)
        begin: String,

        /// Last day to fetch (YYYYMMDD)
        end: String,
    },

    /// Generate a resampled OHLCV dataset from stored candles
    Generate {
        /// Trading symbol (e.g., BTCUSD)
        symbol: String,

        /// First day to include (YYYYMMDD)
        begin: String,

        /// Last day to include (YYYYMMDD)
        end: String,

        /// Resampling interval in seconds
        interval: String,

        /// Directory for the output file
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Remove all stored candles for a symbol
    Remove {
        /// Trading symbol (e.g., BTCUSD)
        symbol: String,

        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Delete stored candles outside a date range
    Tidy {
        /// Trading symbol (e.g., BTCUSD)
        symbol: String,

        /// First day to keep (YYYYMMDD)
        begin: String,

        /// Last day to keep (YYYYMMDD)
        end: String,
    },

    /// Show stored coverage per symbol
    Inventory,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Update { symbol, begin, end } => {
            commands::update::update(&symbol, &begin, &end, cli.data_dir, cli.quiet).await
        }
        Commands::Generate {
            symbol,
            begin,
            end,
            interval,
            output_dir,
        } => {
            commands::generate::generate(
                &symbol,
                &begin,
                &end,
                &interval,
                output_dir,
                cli.data_dir,
                cli.quiet,
            )
            .await
        }
        Commands::Remove { symbol, yes } => {
            commands::remove::remove(&symbol, yes, cli.data_dir).await
        }
        Commands::Tidy { symbol, begin, end } => {
            commands::tidy::tidy(&symbol, &begin, &end, cli.data_dir).await
        }
        Commands::Inventory => commands::inventory::inventory(cli.data_dir).await,
    }
}

/// Initializes the tracing subscriber from the verbosity flags.
///
/// An explicit `RUST_LOG` takes precedence over the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}
