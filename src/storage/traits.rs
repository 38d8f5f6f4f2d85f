use super::error::StorageError;

/// Opaque byte slots addressed by a fixed key.
///
/// Mirrors a device-local key-value store: no schema, no versioning. A slot
/// either holds the last value written or nothing.
pub trait KeyValueStorage: Send + Sync {
    /// Get the value for a key. Returns None if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the slot's value atomically.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Empty the slot. Removing an empty slot is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys end up in file names, so they are restricted to a safe alphabet.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}
