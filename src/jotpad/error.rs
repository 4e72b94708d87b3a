use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum JotpadError {
    /// The persistence adapter could not read the notes slot.
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Writing the collection back to the persistence adapter failed.
    /// The in-memory collection was left as it was before the operation.
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// The notes slot holds data that is not an array of notes.
    #[error("Stored notes are corrupt: {0}")]
    CorruptData(String),

    #[error("No note at position {position} (collection has {len} notes)")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JotpadError>;
