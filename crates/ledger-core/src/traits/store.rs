//! Durable key-value storage trait.

use crate::Result;

/// A string key-value store that survives restarts.
///
/// This is the persistence seam of the session: the CLI backs it with a file,
/// tests back it with [`MemoryStore`](crate::MemoryStore). Implementations
/// report backend failures as [`Error::Storage`](crate::Error::Storage); the
/// session store decides how to degrade.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
