//! Row-oriented view of generated columns.

use crate::error::ExportError;
use record_generator::Accumulator;

/// A table with one column per generated field and one row per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from an accumulator.
    ///
    /// Fails with [`ExportError::StructuralMismatch`] when columns have
    /// different lengths; short columns are never padded.
    pub fn from_accumulator(data: &Accumulator) -> Result<Self, ExportError> {
        let mut expected: Option<usize> = None;
        for (field, values) in data.columns() {
            match expected {
                None => expected = Some(values.len()),
                Some(len) if len != values.len() => {
                    return Err(ExportError::StructuralMismatch {
                        column: field.column_name().to_string(),
                        expected: len,
                        found: values.len(),
                    });
                }
                Some(_) => {}
            }
        }

        let headers: Vec<String> = data
            .fields()
            .map(|field| field.column_name().to_string())
            .collect();
        let columns: Vec<&[String]> = data.columns().map(|(_, values)| values).collect();
        let rows: Vec<Vec<String>> = (0..expected.unwrap_or(0))
            .map(|index| columns.iter().map(|column| column[index].clone()).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|header| header == name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}
