//! # Storage Layer
//!
//! Two pieces:
//!
//! - [`backend::StorageBackend`]: raw key-value I/O. One slot per key, whole
//!   values only.
//!   - [`fs_backend::FsBackend`]: one JSON file per key under the data dir,
//!     written atomically (temp file then rename).
//!   - [`mem_backend::MemBackend`]: in-memory map for tests, with read and
//!     write failure simulation.
//! - [`note_store::NoteStore`]: the notes collection. Owns ordering,
//!   serialization, and the rule that memory and storage stay equal after
//!   every successful mutation.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── _texts.json     # the "@texts" slot: JSON array of notes
//! └── config.json     # see config.rs
//! ```
//!
//! Each note is `{"id", "title", "text", "date", "timestamp"}`. There is no
//! schema version; readers default missing fields and ignore unknown ones.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use note_store::{NoteStore, DEFAULT_STORAGE_KEY};

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::note_store::NoteStore;
    use crate::time::FixedClock;
    use chrono::Duration;

    pub type TestStore = NoteStore<MemBackend, FixedClock>;

    pub struct StoreFixture {
        pub store: TestStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let mut store = NoteStore::with_clock(MemBackend::new(), FixedClock::default());
            store.load().unwrap();
            Self { store }
        }

        /// Adds `count` notes one millisecond apart. The last one added is
        /// "Note {count}" and sits at position 0.
        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .create(format!("Note {}", i + 1), format!("<p>Body {}</p>", i + 1))
                    .unwrap();
                self.store.clock().advance(Duration::milliseconds(1));
            }
            self
        }

        pub fn with_note(mut self, title: &str, body: &str) -> Self {
            self.store.create(title.into(), body.into()).unwrap();
            self.store.clock().advance(Duration::milliseconds(1));
            self
        }
    }
}
