//! Tabular record store: read-modify-write append of one row to a CSV
//! dataset kept in a blob store, plus a best-effort local mirror.
//!
//! Every append is a full overwrite of the blob. There is no locking and no
//! version check, so two writers appending to the same key at the same time
//! race and the last full snapshot written wins.

pub mod dataset;
pub mod schema;

pub use dataset::Dataset;
pub use schema::{Column, ColumnKind, DEDUCTION, FILL_UP, FieldValue, Fields, Schema, fill_defaults};

use crate::blob::BlobStore;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of reading a dataset back.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub dataset: Dataset,
    /// false when the key was absent and `dataset` was initialized empty
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorStatus {
    Written(PathBuf),
    Failed(String),
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Sequential id given to the new row (its zero-based position).
    pub id: usize,
    /// Row count after the append.
    pub rows: usize,
    /// The dataset did not exist and was created by this append.
    pub created: bool,
    pub mirror: MirrorStatus,
}

pub struct RecordStore<'a> {
    blobs: &'a dyn BlobStore,
    mirror_dir: Option<PathBuf>,
}

impl<'a> RecordStore<'a> {
    pub fn new(blobs: &'a dyn BlobStore) -> Self {
        Self {
            blobs,
            mirror_dir: None,
        }
    }

    pub fn with_mirror_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.mirror_dir = Some(dir.into());
        self
    }

    /// Local mirror path for `key`: the key's file name inside the mirror dir.
    pub fn mirror_path(&self, key: &str) -> Option<PathBuf> {
        let dir = self.mirror_dir.as_ref()?;
        let name = Path::new(key).file_name()?;
        Some(dir.join(name))
    }

    /// Read the dataset at `key`. An absent key yields an empty dataset with
    /// the schema header and `found == false`.
    pub fn fetch(&self, key: &str, schema: &Schema) -> AppResult<Fetched> {
        self.try_fetch(key, schema)
            .map_err(AppError::into_persistence)
    }

    fn try_fetch(&self, key: &str, schema: &Schema) -> AppResult<Fetched> {
        match self.blobs.get(key)? {
            Some(bytes) => Ok(Fetched {
                dataset: Dataset::parse(&bytes)?,
                found: true,
            }),
            None => Ok(Fetched {
                dataset: Dataset::empty(schema),
                found: false,
            }),
        }
    }

    /// Append one row built from `fields` to the dataset at `key`.
    ///
    /// The new row's id column is set to the row count read from the store;
    /// columns missing from `fields` get their schema default. The whole
    /// dataset is then written back, and copied to the local mirror when one
    /// is configured. Only the remote write decides success.
    pub fn append(&self, key: &str, schema: &Schema, fields: &Fields) -> AppResult<AppendOutcome> {
        self.try_append(key, schema, fields)
            .map_err(AppError::into_persistence)
    }

    fn try_append(&self, key: &str, schema: &Schema, fields: &Fields) -> AppResult<AppendOutcome> {
        let Fetched { mut dataset, found } = self.try_fetch(key, schema)?;

        for column in schema.columns {
            dataset.ensure_column(column.name);
        }

        let id = dataset.len();
        let mut row = fill_defaults(schema, fields)?;
        if let Some(slot) = row.iter_mut().find(|slot| slot.0 == schema.id_column) {
            slot.1 = id.to_string();
        }
        dataset.push_named(&row);

        let bytes = dataset.to_csv()?;
        self.blobs.put(key, &bytes)?;

        Ok(AppendOutcome {
            id,
            rows: dataset.len(),
            created: !found,
            mirror: self.write_mirror(key, &bytes),
        })
    }

    fn write_mirror(&self, key: &str, bytes: &[u8]) -> MirrorStatus {
        let Some(path) = self.mirror_path(key) else {
            return MirrorStatus::Disabled;
        };

        match fs::write(&path, bytes) {
            Ok(()) => MirrorStatus::Written(path),
            Err(e) => MirrorStatus::Failed(format!("{}: {e}", path.display())),
        }
    }
}
