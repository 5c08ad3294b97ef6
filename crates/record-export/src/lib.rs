//! Tabular export for generated fake records.
//!
//! This crate turns the column-oriented [`Accumulator`] produced by
//! `record-generator` into a row-oriented [`Table`] and writes it as CSV or
//! JSON Lines.
//!
//! # Example
//!
//! ```ignore
//! use record_export::{OutputFormat, Table, TableWriter};
//!
//! let table = Table::from_accumulator(generator.data())?;
//! let metrics = TableWriter::new(OutputFormat::Csv).write_to_path(&table, "people.csv")?;
//! ```
//!
//! [`Accumulator`]: record_generator::Accumulator

mod error;
mod table;
mod writer;

pub use error::ExportError;
pub use table::Table;
pub use writer::{ExportMetrics, OutputFormat, TableWriter, DEFAULT_BUFFER_SIZE};
