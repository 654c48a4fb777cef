//! Schema-enforced CSV tables
//!
//! Loading never fails the caller: a missing file yields an empty table, an
//! unreadable one logs a warning and yields an empty table. The loaded table
//! is projected onto the caller's schema:
//!
//! - columns missing from the file are added with null cells
//! - columns not in the schema are dropped
//! - columns are reordered to the schema order
//!
//! Saving rewrites the whole file atomically (write to temp, then rename).

use std::fs::{self, File};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};

/// A single cell; `None` is a null (blank) cell
pub type Cell = Option<String>;

/// Ordered list of required column names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Create a schema from column names, in order
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// A table whose rows always have exactly one cell per schema column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    schema: Schema,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given schema
    pub fn empty(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding with nulls or truncating to the schema width
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.schema.width(), None);
        self.rows.push(row);
    }
}

/// Load a table from a CSV file, projected onto `schema`
///
/// Never fails: see the module documentation for the fallback rules.
pub fn load_table<P: AsRef<Path>>(path: P, schema: &Schema) -> Table {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "table file not found, starting empty");
        return Table::empty(schema.clone());
    }

    match read_projected(path, schema) {
        Ok(table) => table,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to read table, continuing with an empty one"
            );
            Table::empty(schema.clone())
        }
    }
}

fn read_projected(path: &Path, schema: &Schema) -> LedgerResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let positions: Vec<Option<usize>> = schema
        .columns()
        .iter()
        .map(|col| headers.iter().position(|h| normalize_header(h) == col))
        .collect();

    for (col, pos) in schema.columns().iter().zip(&positions) {
        if pos.is_none() {
            debug!(path = %path.display(), column = %col, "column missing, filling with nulls");
        }
    }

    let mut table = Table::empty(schema.clone());
    for record in reader.records() {
        let record = record?;
        let row = positions
            .iter()
            .map(|pos| {
                pos.and_then(|i| record.get(i))
                    .filter(|value| !value.trim().is_empty())
                    .map(str::to_string)
            })
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

/// A typed row that maps to and from a fixed schema
pub trait TableRecord: Sized {
    /// Column names, in file order
    fn schema() -> Schema;

    /// Build a record from a projected row; null or malformed cells are
    /// coerced rather than rejected
    fn from_row(row: &[Cell]) -> Self;

    /// Cells in schema order
    fn to_row(&self) -> Vec<Cell>;
}

/// Convert typed records into a table
pub fn to_table<T: TableRecord>(records: &[T]) -> Table {
    let mut table = Table::empty(T::schema());
    for record in records {
        table.push_row(record.to_row());
    }
    table
}

/// Convert a table into typed records
pub fn from_table<T: TableRecord>(table: &Table) -> Vec<T> {
    table.rows().iter().map(|row| T::from_row(row)).collect()
}

fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

/// Write the full table to `path` atomically
///
/// The file is either completely replaced or left untouched.
pub fn save_table<P: AsRef<Path>>(table: &Table, path: P) -> LedgerResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays atomic
    let temp_path = path.with_extension("csv.tmp");

    let result = write_csv(table, &temp_path).and_then(|_| {
        fs::rename(&temp_path, path)
            .map_err(|e| LedgerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_csv(table: &Table, temp_path: &Path) -> LedgerResult<()> {
    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(table.schema().columns())
        .map_err(|e| LedgerError::Storage(format!("Failed to write header: {}", e)))?;

    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))
            .map_err(|e| LedgerError::Storage(format!("Failed to write row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}
