//! Device-local key-value persistence.

mod error;
mod file;
mod memory;
mod traits;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{validate_key, KeyValueStorage};
