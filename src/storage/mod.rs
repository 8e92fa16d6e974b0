//! Durable client storage
//!
//! A synchronous key-value string store that survives restarts, plus the
//! filename checks used when writing downloads.

pub mod filesystem;
pub mod memory;
pub mod validation;

use crate::error::StorageError;

pub use filesystem::FileStore;
pub use memory::MemoryStore;
pub use validation::sanitize_filename;

/// Storage port injected into the session manager and preferences.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
