use std::path::PathBuf;

use thiserror::Error;

/// Errors from the key-value slot layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key '{key}': only ASCII letters, digits, '-', '_' and '.' are allowed")]
    InvalidKey { key: String },

    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to (de)serialize value for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
