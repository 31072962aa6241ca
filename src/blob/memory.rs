use super::BlobStore;
use crate::errors::{AppError, AppResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory blob store for testing.
///
/// Uses `RefCell` for interior mutability since the tool is single-threaded,
/// which lets `BlobStore` keep `&self` on every method.
#[derive(Default)]
pub struct MemBlobStore {
    objects: RefCell<HashMap<String, Vec<u8>>>,
    puts: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_credentials_error: Cell<bool>,
}

impl MemBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object directly, bypassing `put`.
    pub fn insert(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        self.objects
            .borrow_mut()
            .insert(key.to_string(), bytes.into());
    }

    pub fn contents(&self, key: &str) -> Option<String> {
        self.objects
            .borrow()
            .get(key)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    /// Number of successful writes so far.
    pub fn put_count(&self) -> usize {
        self.puts.get()
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn set_simulate_credentials_error(&self, simulate: bool) {
        self.simulate_credentials_error.set(simulate);
    }
}

impl BlobStore for MemBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        if self.simulate_credentials_error.get() {
            return Err(AppError::Credentials("simulated credentials error".into()));
        }
        Ok(self.objects.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> AppResult<()> {
        if self.simulate_credentials_error.get() {
            return Err(AppError::Credentials("simulated credentials error".into()));
        }
        if self.simulate_write_error.get() {
            return Err(AppError::Persistence("simulated write error".into()));
        }
        self.objects
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        self.puts.set(self.puts.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
