//! Error types for record generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a generator.
///
/// Generation itself never fails; everything that can go wrong happens while
/// loading reference lists or corpora.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A reference list file could not be read.
    #[error("Failed to read reference list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference list or corpus had no usable entries.
    #[error("Reference list is empty: {0}")]
    EmptyReferenceList(&'static str),
}
