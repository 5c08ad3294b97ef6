//! Batch generation against the bundled reference data.

use fake_bc::{build_config, generate_table, GenerateArgs, GenerationConfig};
use record_generator::generators::sin;
use record_generator::{BatchRequest, Field, GeneratorOptions, RecordGenerator, ReferenceData};

const SEED: u64 = 42;

fn bundled_reference() -> ReferenceData {
    ReferenceData::from_files("data/street_names.csv", "data/city_names.csv")
        .expect("bundled reference lists should load")
}

#[test]
fn test_hundred_records_single_columns() {
    let options = GeneratorOptions {
        seed: Some(SEED),
        ..Default::default()
    };
    let mut generator = RecordGenerator::new(bundled_reference(), options);
    let data = generator.generate_sheet(&BatchRequest::all(100));

    let columns: Vec<&str> = data.fields().map(Field::column_name).collect();
    assert_eq!(columns, vec!["name", "sin", "address", "wage", "job"]);
    assert_eq!(data.row_count(), Some(100));

    for value in data.get(Field::Sin).unwrap() {
        assert!(sin::is_valid(value), "{value} should validate");
    }
    for address in data.get(Field::Address).unwrap() {
        assert!(address.contains(", BC V"), "unexpected address {address}");
    }
}

#[test]
fn test_split_address_columns() {
    let options = GeneratorOptions {
        split_address: true,
        seed: Some(SEED),
        ..Default::default()
    };
    let reference = bundled_reference();
    let mut generator = RecordGenerator::new(reference.clone(), options);
    let data = generator.generate_sheet(&BatchRequest::new(400));

    for field in [
        Field::Address1,
        Field::Address2,
        Field::City,
        Field::Province,
        Field::Postal,
    ] {
        assert_eq!(data.get(field).map(<[String]>::len), Some(400), "{field}");
    }

    let address2 = data.get(Field::Address2).unwrap();
    assert!(address2.iter().any(String::is_empty));
    assert!(address2.iter().any(|unit| !unit.is_empty()));

    for city in data.get(Field::City).unwrap() {
        assert!(reference.cities().contains(city));
    }
}

#[test]
fn test_fixture_config_table() {
    let config = GenerationConfig::from_file("tests/fixtures/generation.yaml").unwrap();
    let table = generate_table(&config).unwrap();

    assert_eq!(table.row_count(), 120);
    assert_eq!(
        table.headers(),
        &[
            "first_name",
            "last_name",
            "sin",
            "address1",
            "address2",
            "city",
            "province",
            "postal",
            "wage",
            "job"
        ]
    );
    assert!(table.column("province").unwrap().iter().all(|p| *p == "BC"));
}

#[test]
fn test_same_seed_same_table() {
    let args = GenerateArgs {
        records: Some(30),
        seed: Some(SEED),
        job: true,
        ..Default::default()
    };
    let config = build_config(&args).unwrap();

    let first = generate_table(&config).unwrap();
    let second = generate_table(&config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_reference_list_fails() {
    let args = GenerateArgs {
        records: Some(10),
        cities: Some("tests/fixtures/no_such_cities.csv".into()),
        ..Default::default()
    };
    let config = build_config(&args).unwrap();

    let error = generate_table(&config).unwrap_err();
    assert!(format!("{error:#}").contains("no_such_cities.csv"));
}
