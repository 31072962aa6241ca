//! In-memory tabular dataset and its CSV encoding.

use super::schema::Schema;
use crate::errors::{AppError, AppResult};

/// Header plus rows of string values, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Empty dataset whose header is the schema's column list.
    pub fn empty(schema: &Schema) -> Self {
        Self::new(schema.columns.iter().map(|c| c.name.to_string()).collect())
    }

    /// Parse comma-separated text with a header row.
    /// Rows shorter than the header are padded with empty values.
    pub fn parse(bytes: &[u8]) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();

        for (n, record) in rdr.records().enumerate() {
            let record = record?;
            if record.len() > header.len() {
                return Err(AppError::Persistence(format!(
                    "row {} has {} values but the header has {} columns",
                    n + 1,
                    record.len(),
                    header.len()
                )));
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(header.len(), String::new());
            rows.push(row);
        }

        Ok(Self { header, rows })
    }

    /// Serialize header and all rows as comma-separated text.
    pub fn to_csv(&self) -> AppResult<Vec<u8>> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        wtr.write_record(&self.header)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }

        wtr.into_inner()
            .map_err(|e| AppError::Persistence(format!("CSV flush error: {e}")))
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Add `name` to the header if missing; existing rows get an empty value.
    /// Returns the column position.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.header.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.header.len() - 1
    }

    /// Append one row given as (column, value) pairs.
    /// Header columns without a value are left empty; unknown columns are added.
    pub fn push_named<S: AsRef<str>>(&mut self, values: &[(S, String)]) {
        for (column, _) in values {
            self.ensure_column(column.as_ref());
        }

        let mut row = vec![String::new(); self.header.len()];
        for (column, value) in values {
            if let Some(idx) = self.column_index(column.as_ref()) {
                row[idx] = value.clone();
            }
        }
        self.rows.push(row);
    }
}
