//! CLI argument definitions.

use clap::{Args, ValueEnum};
use record_export::OutputFormat;
use std::path::PathBuf;

/// Arguments for `fake-bc generate`.
///
/// Flags override values loaded from `--config`.
#[derive(Args, Clone, Debug, Default)]
pub struct GenerateArgs {
    /// Path to a YAML generation config
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of records to generate
    #[arg(long, short = 'n')]
    pub records: Option<usize>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "FAKE_BC_SEED")]
    pub seed: Option<u64>,

    /// Split names into first_name and last_name columns
    #[arg(long)]
    pub split_name: bool,

    /// Keep names in a single column, even if the config splits them
    #[arg(long, conflicts_with = "split_name")]
    pub no_split_name: bool,

    /// Split addresses into address1, address2, city, province and postal columns
    #[arg(long)]
    pub split_address: bool,

    /// Keep addresses in a single column, even if the config splits them
    #[arg(long, conflicts_with = "split_address")]
    pub no_split_address: bool,

    /// Also generate job titles
    #[arg(long)]
    pub job: bool,

    /// Skip names
    #[arg(long)]
    pub no_name: bool,

    /// Skip Social Insurance Numbers
    #[arg(long)]
    pub no_sin: bool,

    /// Skip addresses
    #[arg(long)]
    pub no_address: bool,

    /// Skip wages
    #[arg(long)]
    pub no_wage: bool,

    /// Street name list, one per line
    #[arg(long)]
    pub streets: Option<PathBuf>,

    /// City name list, one per line
    #[arg(long)]
    pub cities: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Omit the CSV header row
    #[arg(long)]
    pub no_header: bool,
}

/// Arguments for `fake-bc validate-sin`.
#[derive(Args, Clone, Debug)]
pub struct ValidateSinArgs {
    /// SIN values to check, e.g. "130 692 544"
    #[arg(required = true)]
    pub values: Vec<String>,
}

/// Output format as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}
