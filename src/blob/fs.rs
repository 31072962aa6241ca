use super::BlobStore;
use crate::errors::AppResult;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A directory standing in for a bucket: `<root>/<bucket>/<key>`.
pub struct FsBlobStore {
    dir: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl AsRef<Path>, bucket: &str) -> Self {
        Self {
            dir: root.as_ref().join(bucket),
        }
    }

    pub fn object_path(&self, key: &str) -> PathBuf {
        self.dir.join(key.trim_start_matches('/'))
    }
}

impl BlobStore for FsBlobStore {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        match fs::read(self.object_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> AppResult<()> {
        let path = self.object_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a temp file then rename so readers never see half an object.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
