//! CSV and JSON Lines table writers.

use crate::error::ExportError;
use crate::table::Table;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma separated values with an optional header row.
    #[default]
    Csv,
    /// One JSON object per line, keys in column order.
    Jsonl,
}

/// Metrics from an export.
#[derive(Debug, Clone, Default)]
pub struct ExportMetrics {
    /// Number of data rows written (header excluded).
    pub rows_written: u64,
    /// Bytes written to the output.
    pub bytes_written: u64,
    /// Total time taken.
    pub duration: Duration,
}

impl ExportMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes a [`Table`] in a chosen format.
#[derive(Debug, Clone, Copy)]
pub struct TableWriter {
    format: OutputFormat,
    include_header: bool,
}

impl TableWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            include_header: true,
        }
    }

    /// Set whether CSV output starts with a header row.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Write the table to a file, replacing any existing content.
    pub fn write_to_path<P: AsRef<Path>>(
        &self,
        table: &Table,
        output_path: P,
    ) -> Result<ExportMetrics, ExportError> {
        let output_path = output_path.as_ref();
        info!(
            "Writing {} rows to '{}' as {:?}",
            table.row_count(),
            output_path.display(),
            self.format
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let metrics = self.write_to(table, buf_writer)?;

        info!(
            "Export complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.bytes_written,
            metrics.duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write the table to any writer, e.g. stdout.
    pub fn write_to<W: Write>(
        &self,
        table: &Table,
        writer: W,
    ) -> Result<ExportMetrics, ExportError> {
        let start_time = Instant::now();
        let mut output = CountingWriter::new(writer);

        match self.format {
            OutputFormat::Csv => write_csv(table, self.include_header, &mut output)?,
            OutputFormat::Jsonl => write_jsonl(table, &mut output)?,
        }
        output.flush()?;

        Ok(ExportMetrics {
            rows_written: table.row_count() as u64,
            bytes_written: output.bytes_written,
            duration: start_time.elapsed(),
        })
    }
}

fn write_csv<W: Write>(table: &Table, include_header: bool, writer: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(writer);

    if include_header && table.column_count() > 0 {
        writer.write_record(table.headers())?;
    }
    for (index, row) in table.rows().iter().enumerate() {
        writer.write_record(row)?;

        if (index + 1) % 10000 == 0 {
            debug!("Written {} rows", index + 1);
        }
    }

    writer.flush()?;
    Ok(())
}

fn write_jsonl<W: Write>(table: &Table, mut writer: W) -> Result<(), ExportError> {
    for row in table.rows() {
        let record = JsonRow {
            headers: table.headers(),
            values: row,
        };
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// A row serialized as a JSON object with keys in column order.
struct JsonRow<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, value) in self.headers.iter().zip(self.values) {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

struct CountingWriter<W> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.bytes_written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
