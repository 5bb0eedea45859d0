//! Numbers CLI - display shell for deterministic promotional Numbers
//!
//! # Commands
//!
//! - `numbers show --seed <id>` - Print the Number for a content item
//! - `numbers draws --seed <id>` - Print the four draws behind a seed
//! - `numbers odds` - Print the current negative odds
//! - `numbers check` - Print the resolved configuration
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate resolves configuration,
//! builds one `NumbersContext` for the session and hands it to the command.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use numbers_core::traits::SystemClock;
use numbers_engine::NumbersContext;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs as ConfigCliArgs};
pub use error::{CliError, Result};

/// Shell version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numbers™ display shell
#[derive(Parser)]
#[command(name = "numbers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pin the anchor instant (RFC 3339 or YYYY-MM-DD)
    #[arg(long, global = true, env = "NUMBERS_ANCHOR")]
    anchor: Option<String>,

    /// Formatting locale (en-US, en-GB, de-DE, fr-FR, de-CH, plain)
    #[arg(long, global = true, env = "NUMBERS_LOCALE")]
    locale: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "NUMBERS_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Number for a content item
    Show {
        /// Content item seed
        #[arg(short, long)]
        seed: u32,

        /// Publish timestamp of the item (ISO 8601)
        #[arg(short, long)]
        published_at: Option<String>,

        /// Re-sample the Number this many more times
        #[arg(short, long, default_value = "0")]
        refresh: u32,

        /// Pause between re-samples in milliseconds
        #[arg(short, long, default_value = "1000")]
        interval_ms: u64,
    },

    /// Print the four draws behind a seed
    Draws {
        /// Content item seed
        #[arg(short, long)]
        seed: u32,
    },

    /// Print the current negative odds and window progress
    Odds,

    /// Check the resolved configuration
    Check,
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        ConfigCliArgs {
            config_file: cli.config.clone(),
            anchor: cli.anchor.clone(),
            locale: cli.locale.clone(),
            log_level: cli.log_level.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&ConfigCliArgs::from(&cli))?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let format = config.number_format()?;
    let ctx = match config.resolve_anchor()? {
        Some(anchor) => NumbersContext::with_anchor(SystemClock, anchor, format),
        None => NumbersContext::new(SystemClock, format)?,
    };

    match cli.command {
        Commands::Show {
            seed,
            published_at,
            refresh,
            interval_ms,
        } => commands::show::run(
            &ctx,
            &commands::show::ShowArgs {
                seed,
                published_at: published_at.as_deref(),
                refresh,
                interval_ms,
                suffix: &config.suffix,
            },
        ),
        Commands::Draws { seed } => commands::draws::run(seed),
        Commands::Odds => commands::odds::run(&ctx),
        Commands::Check => commands::check::run(&config, &ctx),
    }
}
