//! Export of generated sheets to CSV and JSON Lines.

use fake_bc::{build_config, generate_table, FormatArg, GenerateArgs};
use record_export::{ExportError, OutputFormat, Table, TableWriter};
use record_generator::{Accumulator, Field};
use tempfile::TempDir;

#[test]
fn test_csv_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("people.csv");

    let args = GenerateArgs {
        records: Some(75),
        seed: Some(42),
        output: Some(output_path.clone()),
        ..Default::default()
    };
    let config = build_config(&args).unwrap();
    let table = generate_table(&config).unwrap();

    let metrics = TableWriter::new(config.output.format)
        .write_to_path(&table, &output_path)
        .unwrap();
    assert_eq!(metrics.rows_written, 75);

    let mut reader = csv::Reader::from_path(&output_path).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, vec!["name", "sin", "address", "wage"]);

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 75);
    for (record, row) in records.iter().zip(table.rows()) {
        let values: Vec<&str> = record.iter().collect();
        assert_eq!(values, *row);
    }
}

#[test]
fn test_jsonl_output() {
    let args = GenerateArgs {
        records: Some(10),
        seed: Some(42),
        split_name: true,
        format: Some(FormatArg::Jsonl),
        ..Default::default()
    };
    let config = build_config(&args).unwrap();
    assert_eq!(config.output.format, OutputFormat::Jsonl);

    let table = generate_table(&config).unwrap();
    let mut buffer = Vec::new();
    TableWriter::new(config.output.format)
        .write_to(&table, &mut buffer)
        .unwrap();

    let output = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 10);

    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("first_name"));
        assert!(object.contains_key("last_name"));
        assert!(!object.contains_key("name"));
        assert!(!object.contains_key("job"));
    }
}

#[test]
fn test_mismatched_accumulator_is_rejected() {
    let data = Accumulator::from_columns([
        (Field::Name, vec!["Tremblay, Emily".to_string()]),
        (
            Field::Wage,
            vec!["100.00".to_string(), "200.00".to_string()],
        ),
    ]);

    let result = Table::from_accumulator(&data);
    assert!(matches!(
        result,
        Err(ExportError::StructuralMismatch { .. })
    ));
}
