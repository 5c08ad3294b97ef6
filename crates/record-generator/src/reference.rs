//! Street and city reference lists.

use crate::error::GeneratorError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read-only street and city names sampled by the address generator.
///
/// Both lists are guaranteed non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    streets: Vec<String>,
    cities: Vec<String>,
}

impl ReferenceData {
    /// Build reference data from in-memory lists.
    pub fn new(streets: Vec<String>, cities: Vec<String>) -> Result<Self, GeneratorError> {
        if streets.is_empty() {
            return Err(GeneratorError::EmptyReferenceList("street names"));
        }
        if cities.is_empty() {
            return Err(GeneratorError::EmptyReferenceList("city names"));
        }
        Ok(Self { streets, cities })
    }

    /// Load reference data from two files with one entry per line.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        streets_path: P,
        cities_path: Q,
    ) -> Result<Self, GeneratorError> {
        let streets = read_list(streets_path.as_ref())?;
        let cities = read_list(cities_path.as_ref())?;
        debug!(
            "Loaded {} street names and {} city names",
            streets.len(),
            cities.len()
        );
        Self::new(streets, cities)
    }

    /// Street names.
    pub fn streets(&self) -> &[String] {
        &self.streets
    }

    /// City names.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}

/// Split list content into entries, dropping blank lines.
pub fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_list(path: &Path) -> Result<Vec<String>, GeneratorError> {
    let content = fs::read_to_string(path).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_list(&content))
}
