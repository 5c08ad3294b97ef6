//! Command-line interface for fake-bc
//!
//! # Usage Examples
//!
//! ```bash
//! # Default sheet: name, SIN, address and wage for 1000 people
//! fake-bc generate --output people.csv
//!
//! # Deterministic run with split columns
//! fake-bc generate --records 200 --seed 42 --split-name --split-address
//!
//! # Validate SINs (exit code 1 if any is invalid)
//! fake-bc validate-sin 130692544 "130 692 544"
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`, e.g.
//! `RUST_LOG=info fake-bc generate`.

use clap::{Parser, Subcommand};
use fake_bc::{run_generate, run_validate_sin, GenerateArgs, ValidateSinArgs};

#[derive(Parser)]
#[command(name = "fake-bc")]
#[command(about = "Generate noisy fake British Columbia personal records")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sheet of fake records
    Generate(GenerateArgs),

    /// Check Social Insurance Numbers for structural validity
    ValidateSin(ValidateSinArgs),
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for exported records
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::ValidateSin(args) => {
            if !run_validate_sin(&args, std::io::stdout().lock())? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
