//! Noisy fake personal record generator for British Columbia.
//!
//! This crate provides the `RecordGenerator` which produces fake names, Social
//! Insurance Numbers, addresses, wages and job titles with deliberate
//! formatting noise, the way hand-entered data tends to look. Values are
//! collected column-wise in an [`Accumulator`] for export.
//!
//! # Architecture
//!
//! ```text
//! ReferenceData (streets, cities)     Corpus (names, jobs)
//!            │                               │
//!            ▼                               ▼
//!    ┌──────────────────────────────────────────┐
//!    │             RecordGenerator              │
//!    │                                          │
//!    │  - options (split_name, split_address)   │
//!    │  - rng (StdRng)                          │
//!    └────────────────────┬─────────────────────┘
//!                         │ generate_sheet(BatchRequest)
//!                         ▼
//!              Accumulator { Field -> Vec<String> }
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_generator::{BatchRequest, Field, GeneratorOptions, RecordGenerator, ReferenceData};
//!
//! let reference = ReferenceData::new(
//!     vec!["Main St".to_string(), "Granville St".to_string()],
//!     vec!["Vancouver".to_string(), "Burnaby".to_string()],
//! ).unwrap();
//!
//! let options = GeneratorOptions { seed: Some(42), ..Default::default() };
//! let mut generator = RecordGenerator::new(reference, options);
//! let data = generator.generate_sheet(&BatchRequest::new(10));
//!
//! assert_eq!(data.get(Field::Sin).map(|v| v.len()), Some(10));
//! ```
//!
//! # Fields
//!
//! - `name` / `first_name`, `last_name` - `Last, First` or split columns
//! - `sin` - Luhn-valid SIN, ungrouped or grouped by spaces or hyphens
//! - `address` / `address1`, `address2`, `city`, `province`, `postal`
//! - `wage` - decimal amount between 50.00 and 7000.00
//! - `job` - job title

pub mod accumulator;
pub mod corpus;
mod error;
pub mod generator;
pub mod generators;
pub mod reference;

// Re-exports for convenience
pub use accumulator::{Accumulator, Category, Field};
pub use corpus::{Corpus, FakerCorpus, ListCorpus};
pub use error::GeneratorError;
pub use generator::{BatchRequest, GeneratorOptions, RecordGenerator};
pub use reference::ReferenceData;
