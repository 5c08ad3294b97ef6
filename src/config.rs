//! YAML configuration for record generation.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```yaml
//! records: 2000
//! seed: 42
//! split_name: false
//! split_address: true
//! fields:
//!   name: true
//!   sin: true
//!   address: true
//!   wage: true
//!   job: false
//! reference:
//!   streets: data/street_names.csv
//!   cities: data/city_names.csv
//! output:
//!   path: people.csv
//!   format: csv
//!   header: true
//! ```

use record_export::OutputFormat;
use record_generator::{BatchRequest, GeneratorError, GeneratorOptions, ReferenceData};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of records per run.
pub const DEFAULT_RECORDS: usize = 1000;

/// Default street name list.
pub const DEFAULT_STREETS_PATH: &str = "data/street_names.csv";

/// Default city name list.
pub const DEFAULT_CITIES_PATH: &str = "data/city_names.csv";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Semantically invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Full generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Number of records to generate
    pub records: usize,

    /// RNG seed; random when absent
    pub seed: Option<u64>,

    /// Split names into first and last name columns
    pub split_name: bool,

    /// Split addresses into address1, address2, city, province, postal
    pub split_address: bool,

    /// Which field categories to generate
    pub fields: FieldToggles,

    /// Reference list locations
    pub reference: ReferencePaths,

    /// Output destination and format
    pub output: OutputConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            records: DEFAULT_RECORDS,
            seed: None,
            split_name: false,
            split_address: false,
            fields: FieldToggles::default(),
            reference: ReferencePaths::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Per-category on/off switches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FieldToggles {
    pub name: bool,
    pub sin: bool,
    pub address: bool,
    pub wage: bool,
    pub job: bool,
}

impl Default for FieldToggles {
    fn default() -> Self {
        Self {
            name: true,
            sin: true,
            address: true,
            wage: true,
            job: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReferencePaths {
    pub streets: PathBuf,
    pub cities: PathBuf,
}

impl Default for ReferencePaths {
    fn default() -> Self {
        Self {
            streets: PathBuf::from(DEFAULT_STREETS_PATH),
            cities: PathBuf::from(DEFAULT_CITIES_PATH),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output file; stdout when absent
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
    /// Write a CSV header row
    pub header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: OutputFormat::Csv,
            header: true,
        }
    }
}

impl GenerationConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reject values that cannot produce a dataset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.records == 0 {
            return Err(ConfigError::Invalid(
                "records must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            split_name: self.split_name,
            split_address: self.split_address,
            seed: self.seed,
        }
    }

    pub fn batch_request(&self) -> BatchRequest {
        BatchRequest {
            record_count: self.records,
            name: self.fields.name,
            sin: self.fields.sin,
            address: self.fields.address,
            wage: self.fields.wage,
            job: self.fields.job,
        }
    }

    /// Load the street and city lists named by this configuration.
    pub fn load_reference(&self) -> Result<ReferenceData, GeneratorError> {
        ReferenceData::from_files(&self.reference.streets, &self.reference.cities)
    }
}
