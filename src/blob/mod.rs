//! Remote blob store: named objects holding the CSV datasets.
//!
//! `BlobStore` handles the "how" of reaching the bucket (HTTP, a local
//! directory, memory), while `RecordStore` handles the "what".

mod fs;
mod http;
mod memory;

pub use fs::FsBlobStore;
pub use http::HttpBlobStore;
pub use memory::MemBlobStore;

use crate::config::{StoreConfig, StoreKind};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub trait BlobStore {
    /// Fetch the full content stored at `key`.
    /// Returns Ok(None) if the object does not exist.
    /// Returns Err only on actual failures (credentials, transport, I/O).
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// Replace the content stored at `key` with `bytes`.
    fn put(&self, key: &str, bytes: &[u8]) -> AppResult<()>;

    /// Human readable location, used in messages.
    fn describe(&self) -> String;
}

/// Build the backend selected by the configuration.
pub fn open_store(cfg: &StoreConfig) -> AppResult<Box<dyn BlobStore>> {
    match cfg.kind {
        StoreKind::Http => Ok(Box::new(HttpBlobStore::new(
            &cfg.endpoint,
            &cfg.bucket,
            &cfg.region,
            cfg.resolved_token(),
        )?)),
        StoreKind::Fs => Ok(Box::new(FsBlobStore::new(
            expand_tilde(&cfg.root),
            &cfg.bucket,
        ))),
    }
}
