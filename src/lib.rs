//! fake-bc library
//!
//! Command plumbing for generating noisy fake personal records for British
//! Columbia: YAML configuration, CLI arguments and the command handlers that
//! drive `record-generator` and `record-export`.
//!
//! # CLI Usage
//!
//! ```bash
//! # 500 records to CSV, reproducible
//! fake-bc generate --records 500 --seed 42 --output people.csv
//!
//! # Split address columns, include job titles, JSON Lines on stdout
//! fake-bc generate --split-address --job --format jsonl
//!
//! # Settings from a YAML file
//! fake-bc generate --config generation.yaml
//!
//! # Check identifiers
//! fake-bc validate-sin "130 692 544" 130-692-545
//! ```

pub mod args;
pub mod config;
pub mod generate;

pub use args::{FormatArg, GenerateArgs, ValidateSinArgs};
pub use config::{ConfigError, GenerationConfig};
pub use generate::{build_config, generate_table, run_generate, run_validate_sin};
