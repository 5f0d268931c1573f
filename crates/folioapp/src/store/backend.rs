use crate::error::Result;

/// Abstract interface for raw key-value persistence.
///
/// This trait handles the "how" of local storage (filesystem vs memory), while
/// `LocalStore` handles the "what" (id assignment, ordering, record lookup).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing has been written under that key yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic so that a failed write leaves the previous value intact.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
