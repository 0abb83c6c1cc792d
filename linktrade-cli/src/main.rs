//! Link-trade intake tooling
//!
//! Usage:
//!   linktrade split set.txt        # show how a pasted set is read
//!   linktrade code --count 5       # draw link codes from the configured range
//!   linktrade config               # print the effective configuration

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linktrade_cli::{draw_codes, read_message, SplitReport};
use linktrade_intake::IntakeConfig;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "linktrade")]
#[command(about = "Inspect link-trade sets, codes and configuration")]
struct Args {
    /// Path to the bot configuration file
    #[arg(short, long, default_value = "linktrade.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a set message into description, overrides and diagnostics
    Split {
        /// File holding the message, or `-` for stdin
        input: PathBuf,
    },
    /// Draw random link codes
    Code {
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.as_str().into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = IntakeConfig::load_from(&args.config);

    match args.command {
        Command::Split { input } => {
            let message = read_message(&input)?;
            let report = SplitReport::from_message(&message);
            if !report.is_clean() {
                warn!("{} line(s) would be rejected", report.split.invalid.len());
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Code { count } => {
            for code in draw_codes(&config.queue, count)? {
                println!("{code}");
            }
        }
        Command::Config => {
            info!("Effective configuration from {:?}", args.config);
            let toml = config
                .to_toml_string()
                .context("Failed to serialize configuration")?;
            print!("{toml}");
        }
    }

    Ok(())
}
