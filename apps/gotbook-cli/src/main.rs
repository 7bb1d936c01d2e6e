//! GotBook CLI
//!
//! Clean, validate, and look up scanned ISBNs from the command line. The
//! `scan` subcommand replays a barcode reader feed from stdin.

mod report;
mod scan;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gotbook_core::{clean_isbn, DigitGate, ScanSession, ScannerConfig, Symbology};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gotbook", version, about = "Scan and validate book ISBNs")]
struct Cli {
    /// Config file (defaults to <config dir>/gotbook/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the digit gate: decimal or radix11
    #[arg(long, global = true)]
    gate: Option<DigitGate>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cleaned form of a raw scan
    Clean { raw: String },
    /// Clean and validate scans; exits 1 if any is not an ISBN
    Check {
        #[arg(required = true)]
        raw: Vec<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the lookup URL for a scanned ISBN
    Lookup { raw: String },
    /// Read barcode payloads from stdin, one per line
    ///
    /// A blank line is a frame with no barcode; a line containing only `!`
    /// presses the lookup button.
    Scan {
        /// Symbology attached to every payload read
        #[arg(long, default_value = "ean13")]
        symbology: Symbology,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ScannerConfig, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ScannerConfig::load(path)?,
        None => ScannerConfig::load_default()?,
    };
    let config = apply_overrides(config, cli);
    debug!(?config, "effective configuration");
    Ok(config)
}

/// Command line flags win over the config file
fn apply_overrides(mut config: ScannerConfig, cli: &Cli) -> ScannerConfig {
    if let Some(gate) = cli.gate {
        config.digit_gate = gate;
    }
    config
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command {
        Command::Clean { raw } => {
            println!("{}", clean_isbn(&raw));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { raw, json } => {
            let all_valid = report::run_check(
                &config.validator(),
                &raw,
                json,
                &mut io::stdout().lock(),
            )?;
            if all_valid {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Lookup { raw } => {
            let cleaned = clean_isbn(&raw);
            config.validator().validate(&cleaned).map_err(|reason| {
                format!("{} is not an ISBN: {}", cleaned, reason)
            })?;
            println!("{}", config.lookup_template()?.url_for(&cleaned));
            Ok(ExitCode::SUCCESS)
        }
        Command::Scan { symbology } => {
            let mut session = ScanSession::from_config(&config)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            scan::run_feed(&mut session, symbology, stdin.lock(), &mut stdout.lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
