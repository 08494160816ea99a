//! # logieman CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use logieman_cli::fingerprint::{run_fingerprint, FingerprintArgs};
use logieman_cli::reference::{run_reference, ReferenceArgs};
use logieman_cli::submit::{run_submit, SubmitArgs};
use logieman_cli::validate::{run_validate, ValidateArgs};

/// Logieman load-posting CLI.
///
/// Validates load forms, derives device fingerprints and posts temporary
/// loads to the Logieman API ahead of dashboard sign-in.
#[derive(Parser, Debug)]
#[command(name = "logieman", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the country and load-type reference lists.
    Reference(ReferenceArgs),

    /// Validate a form file without submitting it.
    Validate(ValidateArgs),

    /// Print the device fingerprint for this host.
    Fingerprint(FingerprintArgs),

    /// Validate, fingerprint and post a form file as a temporary load.
    Submit(SubmitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Reference(args) => run_reference(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Fingerprint(args) => run_fingerprint(&args),
        Commands::Submit(args) => run_submit(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
