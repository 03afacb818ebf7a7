//! CSV serialization of tile records under a single column schema

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::io::error::{Result, SubtileError, WithContext};
use crate::report::record::TileRecord;

/// Writes records as CSV rows using the columns of the first record
///
/// The header is emitted lazily with the first record. Every later record
/// must carry exactly the same columns in the same order.
pub struct ReportWriter<W: Write> {
    sink: W,
    columns: Option<Vec<String>>,
    rows_written: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Wrap an output sink
    pub const fn new(sink: W) -> Self {
        Self {
            sink,
            columns: None,
            rows_written: 0,
        }
    }

    /// Column schema fixed by the first record, if any was written
    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    /// Number of data rows written so far
    pub const fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Append one record, writing the header first if needed
    ///
    /// # Errors
    ///
    /// Returns a schema mismatch error if the record's columns differ from the
    /// header, or a file system error if writing fails
    pub fn write_record(&mut self, record: &TileRecord) -> Result<()> {
        if let Some(columns) = &self.columns {
            check_schema(columns, record)?;
        } else {
            let columns: Vec<String> = record.columns().map(str::to_string).collect();
            write_row(&mut self.sink, columns.iter().map(String::as_str))?;
            self.columns = Some(columns);
        }

        let cells: Vec<String> = record.values().map(ToString::to_string).collect();
        write_row(&mut self.sink, cells.iter().map(String::as_str))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Append every record in order
    ///
    /// # Errors
    ///
    /// Stops at the first record that fails to write
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a TileRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush and return the sink
    ///
    /// # Errors
    ///
    /// Returns a file system error if flushing fails
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

fn check_schema(columns: &[String], record: &TileRecord) -> Result<()> {
    let found: Vec<&str> = record.columns().collect();
    if found.len() == columns.len() && found.iter().zip(columns).all(|(a, b)| *a == b) {
        return Ok(());
    }

    let missing: Vec<&str> = columns
        .iter()
        .map(String::as_str)
        .filter(|column| !found.contains(column))
        .collect();
    let extra: Vec<&str> = found
        .iter()
        .copied()
        .filter(|column| !columns.iter().any(|c| c == column))
        .collect();
    let reason = if missing.is_empty() && extra.is_empty() {
        "columns are in a different order".to_string()
    } else {
        format!("missing [{}], extra [{}]", missing.join(", "), extra.join(", "))
    };

    Err(SubtileError::SchemaMismatch {
        run: record.run().to_string(),
        tile: record.absolute_tile_index(),
        reason,
    })
}

fn write_row<'a>(sink: &mut impl Write, cells: impl Iterator<Item = &'a str>) -> Result<()> {
    let line = cells.map(escape).collect::<Vec<_>>().join(",");
    writeln!(sink, "{line}")?;
    Ok(())
}

fn escape(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Write `records` to a CSV file at `path`, replacing any existing file
///
/// # Errors
///
/// Returns a file system error if the file cannot be created or written, or
/// a schema mismatch error if the records do not share one column schema
pub fn write_report_file(path: &Path, records: &[TileRecord]) -> Result<usize> {
    let file = File::create(path).with_path(path, "create report")?;
    let mut writer = ReportWriter::new(BufWriter::new(file));
    writer.write_all(records)?;
    let rows = writer.rows_written();
    writer.finish().with_path(path, "write report")?;
    Ok(rows)
}
