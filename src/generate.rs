//! Command handlers for `generate` and `validate-sin`.

use crate::args::{GenerateArgs, ValidateSinArgs};
use crate::config::GenerationConfig;
use anyhow::Context;
use record_export::{Table, TableWriter};
use record_generator::generators::sin;
use record_generator::RecordGenerator;
use std::io::{self, Write};

/// Build the effective configuration: the config file (or defaults) with
/// command-line flags applied on top.
pub fn build_config(args: &GenerateArgs) -> anyhow::Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))?,
        None => GenerationConfig::default(),
    };

    if let Some(records) = args.records {
        config.records = records;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.split_name = (config.split_name || args.split_name) && !args.no_split_name;
    config.split_address = (config.split_address || args.split_address) && !args.no_split_address;

    config.fields.job |= args.job;
    config.fields.name &= !args.no_name;
    config.fields.sin &= !args.no_sin;
    config.fields.address &= !args.no_address;
    config.fields.wage &= !args.no_wage;

    if let Some(streets) = &args.streets {
        config.reference.streets = streets.clone();
    }
    if let Some(cities) = &args.cities {
        config.reference.cities = cities.clone();
    }
    if let Some(output) = &args.output {
        config.output.path = Some(output.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format.into();
    }
    if args.no_header {
        config.output.header = false;
    }

    config.validate()?;
    Ok(config)
}

/// Generate one sheet of records as a table.
pub fn generate_table(config: &GenerationConfig) -> anyhow::Result<Table> {
    let reference = config.load_reference().with_context(|| {
        format!(
            "Failed to load reference lists {:?} and {:?}",
            config.reference.streets, config.reference.cities
        )
    })?;

    let mut generator = RecordGenerator::new(reference, config.generator_options());
    let data = generator.generate_sheet(&config.batch_request());

    Table::from_accumulator(data).context("Failed to assemble generated records")
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    tracing::info!(
        "Generating {} records (seed: {:?}, split_name: {}, split_address: {})",
        config.records,
        config.seed,
        config.split_name,
        config.split_address
    );

    let table = generate_table(&config)?;
    let writer = TableWriter::new(config.output.format).with_header(config.output.header);

    match &config.output.path {
        Some(path) => {
            writer
                .write_to_path(&table, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let metrics = writer
                .write_to(&table, stdout.lock())
                .context("Failed to write records to stdout")?;
            tracing::info!(
                "Wrote {} rows ({} bytes) to stdout",
                metrics.rows_written,
                metrics.bytes_written
            );
        }
    }

    Ok(())
}

/// Run the validate-sin command. Returns whether every value was valid.
pub fn run_validate_sin<W: Write>(args: &ValidateSinArgs, mut out: W) -> anyhow::Result<bool> {
    let mut all_valid = true;
    for value in &args.values {
        let valid = sin::is_valid(value);
        all_valid &= valid;
        writeln!(out, "{value}\t{}", if valid { "valid" } else { "invalid" })?;
    }
    Ok(all_valid)
}
