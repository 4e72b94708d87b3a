use crate::error::Result;

/// Raw key-value persistence.
///
/// This trait covers the "how" of storage (filesystem vs memory), while
/// [`NoteStore`](super::note_store::NoteStore) owns the "what": ordering,
/// serialization, and keeping memory and storage equal.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns `Ok(None)` when nothing has been stored yet.
    /// Returns `Err(StorageRead)` only on actual read failures.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic: a failed write leaves the previous value readable.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
