//! Filesystem-backed key-value slots.
//!
//! ```text
//! <data_dir>/
//! ├── <key>.json        # current value
//! ├── <key>.json.tmp    # staging file, renamed over the value on write
//! └── .<key>.lock       # advisory lock serialising writers across processes
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use super::error::StorageError;
use super::traits::{validate_key, KeyValueStorage};

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn staging_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json.tmp"))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.lock"))
    }

    fn io_error(path: &Path, source: io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn open_lock(&self, key: &str) -> Result<File, StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(&self.dir, e))?;
        let path = self.lock_path(key);
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|e| Self::io_error(&path, e))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let lock = self.open_lock(key)?;
        let lock_path = self.lock_path(key);
        FileExt::lock_shared(&lock).map_err(|e| Self::io_error(&lock_path, e))?;
        let result = match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(&path, e)),
        };
        let _ = FileExt::unlock(&lock);
        result
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        validate_key(key)?;
        let lock = self.open_lock(key)?;
        let lock_path = self.lock_path(key);
        FileExt::lock_exclusive(&lock).map_err(|e| Self::io_error(&lock_path, e))?;

        let staging = self.staging_path(key);
        let path = self.value_path(key);
        let result = (|| {
            let mut file = File::create(&staging).map_err(|e| Self::io_error(&staging, e))?;
            file.write_all(value)
                .and_then(|_| file.sync_all())
                .map_err(|e| Self::io_error(&staging, e))?;
            fs::rename(&staging, &path).map_err(|e| Self::io_error(&path, e))
        })();
        let _ = FileExt::unlock(&lock);

        if result.is_ok() {
            debug!(key, bytes = value.len(), "storage slot written");
        }
        result
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let lock = self.open_lock(key)?;
        let lock_path = self.lock_path(key);
        FileExt::lock_exclusive(&lock).map_err(|e| Self::io_error(&lock_path, e))?;
        let path = self.value_path(key);
        let result = match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(&path, e)),
        };
        let _ = FileExt::unlock(&lock);
        result
    }
}
