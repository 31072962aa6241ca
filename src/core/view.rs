//! Read a dataset back for display: optional single-date filter, dates in
//! display format, newest id first.

use crate::blob::BlobStore;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Formats;
use crate::store::{Dataset, RecordStore, Schema};
use crate::ui::messages::{header, info, warning, warning_stderr};
use crate::utils::date::{display_date, parse_date};
use crate::utils::table::Table;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Keep only rows stored with exactly this date.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Earliest parseable date in the whole dataset (lower bound for a filter).
    pub earliest: Option<NaiveDate>,
}

impl View {
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(self.header.clone());
        for row in &self.rows {
            table.add_row(row.clone());
        }
        table
    }

    /// JSON array with one object per row, keyed by column name.
    pub fn to_json(&self) -> AppResult<String> {
        let rows: Vec<Value> = self
            .rows
            .iter()
            .map(|row| {
                let obj: Map<String, Value> = self
                    .header
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned().map(Value::String))
                    .collect();
                Value::Object(obj)
            })
            .collect();

        serde_json::to_string_pretty(&rows)
            .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))
    }
}

/// Parse an id cell. Accepts `3` as well as `3.0`, which older writers
/// produced for numeric columns that once held an empty value.
pub fn parse_id(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>().ok().or_else(|| {
        s.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

pub struct ViewLogic;

impl ViewLogic {
    pub fn build(dataset: &Dataset, schema: &Schema, query: &ViewQuery, date_format: &str) -> View {
        let date_idx = dataset.column_index(schema.date_column);
        let id_idx = dataset.column_index(schema.id_column);

        let date_of =
            |row: &[String]| date_idx.and_then(|i| parse_date(&row[i], date_format));

        let earliest = dataset.rows().iter().filter_map(|r| date_of(r.as_slice())).min();

        let mut rows: Vec<Vec<String>> = dataset
            .rows()
            .iter()
            .filter(|row| match query.date {
                Some(wanted) => date_of(row.as_slice()) == Some(wanted),
                None => true,
            })
            .cloned()
            .collect();

        if let Some(i) = date_idx {
            for row in &mut rows {
                row[i] = display_date(&row[i], date_format);
            }
        }

        // Rows without a readable id go last.
        rows.sort_by_key(|row| Reverse(id_idx.and_then(|i| parse_id(&row[i]))));

        View {
            header: dataset.header().to_vec(),
            rows,
            earliest,
        }
    }

    /// Fetch and print a dataset. An absent dataset is only a warning; with
    /// `json` it prints `[]` and the warning goes to stderr.
    pub fn show(
        cfg: &Config,
        blobs: &dyn BlobStore,
        key: &str,
        schema: &Schema,
        query: &ViewQuery,
        json: bool,
    ) -> AppResult<Option<View>> {
        let formats = Formats::from_config(cfg)?;
        let fetched = RecordStore::new(blobs).fetch(key, schema)?;

        if !fetched.found {
            let msg = format!("Dataset '{key}' was not found in {}", blobs.describe());
            if json {
                warning_stderr(msg);
                println!("[]");
            } else {
                warning(msg);
            }
            return Ok(None);
        }

        let view = Self::build(&fetched.dataset, schema, query, &formats.date);

        if json {
            println!("{}", view.to_json()?);
            return Ok(Some(view));
        }

        header(format!("{} ({key})", schema.name));

        if let Some(d) = query.date {
            let since = view
                .earliest
                .map(|e| e.format(&formats.date).to_string())
                .unwrap_or_else(|| "-".to_string());
            info(format!(
                "Filtering by {} (records start at {since})",
                d.format(&formats.date)
            ));
        }

        if view.rows.is_empty() {
            info("No records to show.");
        } else {
            print!("{}", view.to_table().render());
        }

        Ok(Some(view))
    }
}
