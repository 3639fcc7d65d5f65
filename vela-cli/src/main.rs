//! # Vela CLI
//!
//! Command-line interface for the Vela order submission toolkit.
//!
//! This CLI provides commands for:
//! - Submitting futures orders (market, limit, stop-market)
//! - Showing toolkit information

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vela_telemetry::{LogConfig, LogFormat, init_logging};

use commands::submit;

/// Vela - Cryptocurrency futures order submission toolkit
#[derive(Parser)]
#[command(name = "vela")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format (pretty, json)
    #[arg(long, global = true, default_value = "pretty")]
    log_format: String,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit an order
    Submit(submit::SubmitArgs),

    /// Show toolkit information
    Info,
}

fn setup_logging(verbose: bool, format: &str) -> Result<()> {
    let config = LogConfig {
        level: if verbose { "debug" } else { "info" }.to_string(),
        format: match format {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        },
        include_span_events: false,
    };
    init_logging(&config)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, &cli.log_format)?;

    match cli.command {
        Commands::Submit(args) => {
            let exit_code = submit::run(args).await?;
            if exit_code != 0 {
                std::process::exit(i32::from(exit_code));
            }
        }
        Commands::Info => print_info(),
    }

    Ok(())
}

fn print_info() {
    println!("Vela Order Submission Toolkit");
    println!("=============================");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Rust Edition: 2024");
    println!();
    println!("Supported Exchange:");
    println!("  - Binance USDT-M Futures");
    println!();
    println!("Environments:");
    println!("  - testnet (default): https://testnet.binancefuture.com");
    println!("  - production:        https://fapi.binance.com");
    println!();
    println!("Order Types:");
    println!("  - MARKET      (quantity only)");
    println!("  - LIMIT       (requires price, GTC by default)");
    println!("  - STOP_MARKET (requires stop price)");
}
