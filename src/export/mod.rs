//! CSV export.
//!
//! This module turns any ordered sequence of records into a quoted,
//! comma-separated text blob, given a list of columns (header label plus
//! accessor). Every field is quoted and embedded quotes are doubled.

mod columns;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{EngineError, EngineResult};

pub use columns::{cycle_report_columns, payment_history_columns};

/// A single CSV column: header label and a value accessor.
pub struct CsvColumn<T> {
    header: String,
    accessor: Box<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> CsvColumn<T> {
    /// Creates a column from a header label and an accessor.
    pub fn new<F>(header: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            header: header.into(),
            accessor: Box::new(accessor),
        }
    }

    /// Returns the header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Extracts this column's value from `row`.
    pub fn value(&self, row: &T) -> String {
        (self.accessor)(row)
    }
}

/// Renders `rows` as CSV with a header line followed by one line per row.
///
/// # Examples
///
/// ```
/// use susu_engine::export::{CsvColumn, to_csv};
///
/// let columns = vec![
///     CsvColumn::new("Name", |row: &(String, u32)| row.0.clone()),
///     CsvColumn::new("Count", |row: &(String, u32)| row.1.to_string()),
/// ];
/// let rows = vec![("say \"hi\"".to_string(), 2u32)];
/// let csv = to_csv(&rows, &columns).unwrap();
/// assert_eq!(csv, "\"Name\",\"Count\"\n\"say \"\"hi\"\"\",\"2\"\n");
/// ```
pub fn to_csv<T>(rows: &[T], columns: &[CsvColumn<T>]) -> EngineResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|c| c.header()))?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| c.value(row)))?;
    }

    let bytes = writer.into_inner().map_err(|e| EngineError::Export {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::Export {
        message: e.to_string(),
    })
}
