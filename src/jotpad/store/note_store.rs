use super::backend::StorageBackend;
use crate::error::{JotpadError, Result};
use crate::model::{Collection, Note};
use crate::time::{Clock, SystemClock};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Slot the collection lives in unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "@texts";

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Unloaded,
    Ready,
    /// Consecutive failed reads. Writes are refused until a read succeeds.
    ReadFailed(u32),
    /// The slot holds something that is not a note array. Only a reset may
    /// overwrite it.
    Corrupt(String),
}

/// Owns the notes collection and keeps it equal to what is persisted.
///
/// Every mutation builds the next collection as a separate value, writes it
/// through the backend, and only then replaces the in-memory copy. A failed
/// write therefore leaves both sides as they were.
///
/// Mutations take `&mut self`, so there is never more than one in flight.
pub struct NoteStore<B: StorageBackend, C: Clock = SystemClock> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    clock: C,
    key: String,
    collection: Collection,
    state: LoadState,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, SystemClock)
    }

    /// Creates a store and loads it.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::new(backend);
        store.load()?;
        Ok(store)
    }
}

impl<B: StorageBackend, C: Clock> NoteStore<B, C> {
    pub fn with_clock(backend: B, clock: C) -> Self {
        Self {
            backend,
            clock,
            key: DEFAULT_STORAGE_KEY.to_string(),
            collection: Collection::new(),
            state: LoadState::Unloaded,
        }
    }

    /// Use `key` as the storage slot. Only meaningful before the first load.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The last materialized collection, newest first.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// True after a load hit corrupt data and no reset has happened since.
    pub fn is_corrupt(&self) -> bool {
        matches!(self.state, LoadState::Corrupt(_))
    }

    /// True while the last load could not read the slot at all. The shown
    /// collection is empty but storage may still hold notes.
    pub fn is_unreadable(&self) -> bool {
        matches!(self.state, LoadState::ReadFailed(_))
    }

    // --- Lifecycle ---

    /// Reads the slot and rebuilds the collection.
    ///
    /// - Nothing stored: empty collection.
    /// - Unparseable data: `CorruptData`; the stored bytes are left untouched
    ///   and the store refuses writes other than [`delete_all`](Self::delete_all).
    /// - Read failure: the first one in a row is logged and treated as an
    ///   empty collection; the next consecutive one is returned. Writes are
    ///   refused until a read succeeds.
    pub fn load(&mut self) -> Result<&Collection> {
        self.collection = Collection::new();

        let raw = match self.backend.get_item(&self.key) {
            Ok(raw) => raw,
            Err(err) => {
                let attempts = match self.state {
                    LoadState::ReadFailed(n) => n + 1,
                    _ => 1,
                };
                self.state = LoadState::ReadFailed(attempts);
                if attempts > 1 {
                    tracing::error!(key = %self.key, attempts, "Reading notes failed again: {}", err);
                    return Err(err);
                }
                tracing::warn!(key = %self.key, "Reading notes failed, showing none: {}", err);
                return Ok(&self.collection);
            }
        };

        match raw {
            None => {
                tracing::debug!(key = %self.key, "No notes stored yet");
            }
            Some(raw) => match parse_collection(&raw) {
                Ok(collection) => {
                    tracing::debug!(key = %self.key, count = collection.len(), "Loaded notes");
                    self.collection = collection;
                }
                Err(err) => {
                    tracing::warn!(key = %self.key, "Stored notes are corrupt: {}", err);
                    self.state = LoadState::Corrupt(err.to_string());
                    return Err(err);
                }
            },
        }

        self.state = LoadState::Ready;
        Ok(&self.collection)
    }

    /// Loads on first use; afterwards returns the materialized collection.
    pub fn ensure_loaded(&mut self) -> Result<&Collection> {
        if self.state == LoadState::Unloaded {
            return self.load();
        }
        if let LoadState::Corrupt(reason) = &self.state {
            return Err(JotpadError::CorruptData(reason.clone()));
        }
        Ok(&self.collection)
    }

    /// Explicit reload hook for callers that suspect the slot changed.
    pub fn reload(&mut self) -> Result<&Collection> {
        self.load()
    }

    // --- Positional operations ---

    /// Adds a note in front of the collection.
    ///
    /// The sort key is the clock reading, raised to the newest existing key
    /// if the clock is behind. Equal keys are ordered by insertion, most
    /// recent first, so the new note always sorts first.
    pub fn create(&mut self, title: String, body: String) -> Result<&Collection> {
        self.ensure_writable()?;
        let note = self.stamp(Uuid::new_v4(), title, body);
        let next = self.collection.with_front(note);
        self.commit(next)
    }

    /// Replaces the note at `position` with a new version and moves it to
    /// the front. The note keeps its id.
    pub fn update(&mut self, position: usize, title: String, body: String) -> Result<&Collection> {
        self.ensure_writable()?;
        let id = self.note_at(position)?.id;
        let note = self.stamp(id, title, body);
        let next = self
            .collection
            .retained(|p, _| p != position)
            .with_front(note);
        self.commit(next)
    }

    pub fn delete_one(&mut self, position: usize) -> Result<&Collection> {
        self.ensure_writable()?;
        self.note_at(position)?;
        let next = self.collection.retained(|p, _| p != position);
        self.commit(next)
    }

    /// Removes every note whose position is in `positions`. Positions past
    /// the end are ignored. Nothing is written when nothing is removed.
    pub fn delete_many(&mut self, positions: &BTreeSet<usize>) -> Result<&Collection> {
        self.ensure_writable()?;
        let next = self.collection.retained(|p, _| !positions.contains(&p));
        if next.len() == self.collection.len() {
            return Ok(&self.collection);
        }
        self.commit(next)
    }

    /// Empties the collection. Also the way out of a corrupt or unreadable
    /// slot: it does not need to read first.
    pub fn delete_all(&mut self) -> Result<&Collection> {
        self.persist(&Collection::new())?;
        self.collection = Collection::new();
        self.state = LoadState::Ready;
        Ok(&self.collection)
    }

    // --- Id operations ---

    pub fn get(&self, id: &Uuid) -> Option<&Note> {
        self.collection.find(id)
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.collection.position_of(id)
    }

    pub fn update_note(&mut self, id: &Uuid, title: String, body: String) -> Result<&Collection> {
        self.ensure_writable()?;
        let position = self.position_of(id).ok_or(JotpadError::NoteNotFound(*id))?;
        self.update(position, title, body)
    }

    pub fn delete_note(&mut self, id: &Uuid) -> Result<&Collection> {
        self.ensure_writable()?;
        let position = self.position_of(id).ok_or(JotpadError::NoteNotFound(*id))?;
        self.delete_one(position)
    }

    /// Removes every note whose id is in `ids`. Unknown ids are ignored.
    pub fn delete_notes(&mut self, ids: &[Uuid]) -> Result<&Collection> {
        self.ensure_writable()?;
        let positions: BTreeSet<usize> =
            ids.iter().filter_map(|id| self.position_of(id)).collect();
        self.delete_many(&positions)
    }

    // --- Internals ---

    fn ensure_writable(&mut self) -> Result<()> {
        if self.state == LoadState::Unloaded {
            self.load()?;
        }
        match &self.state {
            LoadState::Ready | LoadState::Unloaded => Ok(()),
            LoadState::ReadFailed(_) => Err(JotpadError::StorageRead(format!(
                "notes in '{}' could not be read; reload before changing them",
                self.key
            ))),
            LoadState::Corrupt(reason) => Err(JotpadError::CorruptData(reason.clone())),
        }
    }

    fn note_at(&self, position: usize) -> Result<&Note> {
        self.collection
            .get(position)
            .ok_or(JotpadError::IndexOutOfRange {
                position,
                len: self.collection.len(),
            })
    }

    fn stamp(&self, id: Uuid, title: String, body: String) -> Note {
        let mut note = Note::with_id(id, title, body, self.clock.now());
        if let Some(newest) = self.collection.newest_key() {
            note.sort_key = note.sort_key.max(newest);
        }
        note
    }

    fn commit(&mut self, next: Collection) -> Result<&Collection> {
        debug_assert!(next.is_sorted());
        self.persist(&next)?;
        self.collection = next;
        Ok(&self.collection)
    }

    fn persist(&self, collection: &Collection) -> Result<()> {
        let raw = serde_json::to_string(collection)?;
        match self.backend.set_item(&self.key, &raw) {
            Ok(()) => {
                tracing::debug!(key = %self.key, count = collection.len(), "Saved notes");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(key = %self.key, "Saving notes failed, keeping previous state: {}", err);
                match err {
                    JotpadError::StorageWrite(_) => Err(err),
                    other => Err(JotpadError::StorageWrite(other.to_string())),
                }
            }
        }
    }
}

/// Parses the slot contents. Anything but a JSON array of note objects is
/// corrupt.
fn parse_collection(raw: &str) -> Result<Collection> {
    serde_json::from_str(raw).map_err(|e| JotpadError::CorruptData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::time::FixedClock;
    use chrono::Duration;

    fn store() -> NoteStore<MemBackend, FixedClock> {
        let mut store = NoteStore::with_clock(MemBackend::new(), FixedClock::default());
        store.load().unwrap();
        store
    }

    fn titles(collection: &Collection) -> Vec<String> {
        collection.iter().map(|n| n.title.clone()).collect()
    }

    fn tick(store: &NoteStore<MemBackend, FixedClock>) {
        store.clock().advance(Duration::milliseconds(1));
    }

    fn persisted(store: &NoteStore<MemBackend, FixedClock>) -> Vec<Note> {
        let raw = store.backend().raw(DEFAULT_STORAGE_KEY).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn reopened(store: &NoteStore<MemBackend, FixedClock>) -> Collection {
        let raw = store.backend().raw(DEFAULT_STORAGE_KEY).unwrap();
        let mut again = NoteStore::with_clock(
            MemBackend::with_item(DEFAULT_STORAGE_KEY, &raw),
            FixedClock::default(),
        );
        again.load().unwrap().clone()
    }

    // --- load ---

    #[test]
    fn load_of_empty_slot_is_empty() {
        let mut store = NoteStore::with_clock(MemBackend::new(), FixedClock::default());
        assert!(store.load().unwrap().is_empty());
        assert!(store.is_loaded());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn load_sorts_newest_first() {
        let raw = r#"[
            {"title":"old","text":"","date":"","timestamp":1},
            {"title":"new","text":"","date":"","timestamp":3},
            {"title":"mid","text":"","date":"","timestamp":2}
        ]"#;
        let mut store = NoteStore::new(MemBackend::with_item(DEFAULT_STORAGE_KEY, raw));
        let loaded = store.load().unwrap();
        assert_eq!(titles(loaded), vec!["new", "mid", "old"]);
    }

    #[test]
    fn load_surfaces_corrupt_data_and_keeps_bytes() {
        let mut store = NoteStore::new(MemBackend::with_item(
            DEFAULT_STORAGE_KEY,
            r#"{"not":"an array"}"#,
        ));
        let err = store.load().unwrap_err();
        assert!(matches!(err, JotpadError::CorruptData(_)));
        assert!(store.is_corrupt());
        assert!(store.collection().is_empty());

        // Writes other than reset are refused and nothing is overwritten.
        let err = store.create("t".into(), "b".into()).unwrap_err();
        assert!(matches!(err, JotpadError::CorruptData(_)));
        assert_eq!(
            store.backend().raw(DEFAULT_STORAGE_KEY).unwrap(),
            r#"{"not":"an array"}"#
        );
    }

    #[test]
    fn delete_all_resets_corrupt_slot() {
        let mut store = NoteStore::new(MemBackend::with_item(DEFAULT_STORAGE_KEY, "garbage"));
        assert!(store.load().is_err());

        store.delete_all().unwrap();
        assert!(!store.is_corrupt());
        assert_eq!(store.backend().raw(DEFAULT_STORAGE_KEY).unwrap(), "[]");

        store.create("fresh".into(), "".into()).unwrap();
        assert_eq!(titles(store.collection()), vec!["fresh"]);
    }

    #[test]
    fn first_read_failure_is_treated_as_empty_second_is_surfaced() {
        let backend = MemBackend::with_item(DEFAULT_STORAGE_KEY, "[]");
        backend.set_simulate_read_error(true);
        let mut store = NoteStore::new(backend);

        assert!(store.load().unwrap().is_empty());
        assert!(store.is_unreadable());
        let err = store.load().unwrap_err();
        assert!(matches!(err, JotpadError::StorageRead(_)));

        store.backend().set_simulate_read_error(false);
        assert!(store.load().is_ok());
        assert!(store.is_loaded());
        assert!(!store.is_unreadable());
    }

    #[test]
    fn writes_are_refused_after_a_failed_read() {
        let raw = r#"[{"title":"keep me","text":"","date":"","timestamp":1}]"#;
        let backend = MemBackend::with_item(DEFAULT_STORAGE_KEY, raw);
        backend.set_simulate_read_error(true);
        let mut store = NoteStore::new(backend);
        store.load().unwrap();

        let err = store.create("t".into(), "".into()).unwrap_err();
        assert!(matches!(err, JotpadError::StorageRead(_)));
        assert_eq!(store.backend().raw(DEFAULT_STORAGE_KEY).unwrap(), raw);
    }

    #[test]
    fn null_and_float_fields_load_instead_of_corrupting() {
        let raw = r#"[{"title":null,"text":"a","date":null,"timestamp":1700000000000.0},
                      {"title":"b","text":null,"date":"","timestamp":5}]"#;
        let mut store = NoteStore::new(MemBackend::with_item(DEFAULT_STORAGE_KEY, raw));

        let collection = store.load().unwrap();
        assert_eq!(titles(collection), vec!["", "b"]);
        assert_eq!(collection.get(0).unwrap().sort_key, 1_700_000_000_000);
        assert!(!store.is_corrupt());
    }

    #[test]
    fn mutation_before_load_loads_first() {
        let raw = r#"[{"title":"existing","text":"","date":"","timestamp":1}]"#;
        let mut store = NoteStore::with_clock(
            MemBackend::with_item(DEFAULT_STORAGE_KEY, raw),
            FixedClock::default(),
        );
        store.create("new".into(), "".into()).unwrap();
        assert_eq!(titles(store.collection()), vec!["new", "existing"]);
    }

    #[test]
    fn ensure_loaded_reads_once() {
        let raw = r#"[{"title":"a","text":"","date":"","timestamp":1}]"#;
        let mut store = NoteStore::new(MemBackend::with_item(DEFAULT_STORAGE_KEY, raw));
        assert_eq!(store.ensure_loaded().unwrap().len(), 1);

        // A second call does not go back to the backend.
        store.backend().set_simulate_read_error(true);
        assert_eq!(store.ensure_loaded().unwrap().len(), 1);
    }

    #[test]
    fn ensure_loaded_keeps_reporting_corruption() {
        let mut store = NoteStore::new(MemBackend::with_item(DEFAULT_STORAGE_KEY, "[1, 2"));
        assert!(store.ensure_loaded().is_err());
        assert!(matches!(
            store.ensure_loaded(),
            Err(JotpadError::CorruptData(_))
        ));
    }

    #[test]
    fn custom_key_is_used_for_reads_and_writes() {
        let mut store = NoteStore::with_clock(MemBackend::new(), FixedClock::default())
            .with_key("work");
        store.create("t".into(), "".into()).unwrap();
        assert!(store.backend().raw("work").is_some());
        assert!(store.backend().raw(DEFAULT_STORAGE_KEY).is_none());
    }

    // --- create ---

    #[test]
    fn create_prepends_and_persists() {
        let mut store = store();
        store
            .create("Groceries".into(), "<p>milk</p>".into())
            .unwrap();
        tick(&store);
        let after = store.create("Todo".into(), "<p>dishes</p>".into()).unwrap();

        assert_eq!(titles(after), vec!["Todo", "Groceries"]);
        assert_eq!(persisted(&store).len(), 2);
        assert_eq!(persisted(&store)[0].title, "Todo");
    }

    #[test]
    fn create_grows_by_one_and_leaves_existing_notes_alone() {
        let mut store = store();
        store.create("a".into(), "<i>1</i>".into()).unwrap();
        let before = store.collection().get(0).unwrap().clone();
        tick(&store);

        let after = store.create("b".into(), "".into()).unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(after.get(1).unwrap(), &before);
    }

    #[test]
    fn create_uses_clock_for_key() {
        let mut store = store();
        store.clock().set_millis(5_000);
        let after = store.create("t".into(), "".into()).unwrap();
        assert_eq!(after.get(0).unwrap().sort_key, 5_000);
    }

    #[test]
    fn creates_in_the_same_tick_keep_insertion_order() {
        let mut store = store();
        store.create("first".into(), "".into()).unwrap();
        store.create("second".into(), "".into()).unwrap();
        store.create("third".into(), "".into()).unwrap();

        assert_eq!(titles(store.collection()), vec!["third", "second", "first"]);
        assert_eq!(titles(&reopened(&store)), vec!["third", "second", "first"]);
    }

    #[test]
    fn clock_stepping_backwards_still_sorts_new_note_first() {
        let mut store = store();
        store.clock().set_millis(10_000);
        store.create("later".into(), "".into()).unwrap();
        store.clock().set_millis(2_000);
        let after = store.create("earlier clock".into(), "".into()).unwrap();

        assert_eq!(titles(after), vec!["earlier clock", "later"]);
        assert!(after.is_sorted());
        assert_eq!(after.get(0).unwrap().sort_key, 10_000);
    }

    #[test]
    fn body_round_trips_verbatim() {
        let body = "<p>a &amp; b</p>\n<ul><li>\"quoted\"</li></ul>";
        let mut store = store();
        store.create("t".into(), body.into()).unwrap();
        assert_eq!(reopened(&store).get(0).unwrap().body, body);
    }

    // --- update ---

    #[test]
    fn update_replaces_and_promotes() {
        let mut store = store();
        store.create("a".into(), "1".into()).unwrap();
        tick(&store);
        store.create("b".into(), "2".into()).unwrap();
        let id_a = store.collection().get(1).unwrap().id;
        tick(&store);

        let after = store.update(1, "a2".into(), "1b".into()).unwrap();
        assert_eq!(titles(after), vec!["a2", "b"]);
        let first = after.get(0).unwrap();
        assert_eq!(first.id, id_a);
        assert_eq!(first.body, "1b");
        assert!(after.is_sorted());
    }

    #[test]
    fn update_then_reload_keeps_length_and_new_content() {
        let mut store = store();
        for title in ["x", "y", "z"] {
            store.create(title.into(), "".into()).unwrap();
            tick(&store);
        }
        store.clock().set_millis(9_999_999_999_999);
        store.update(2, "t".into(), "b".into()).unwrap();

        let reloaded = reopened(&store);
        assert_eq!(reloaded.len(), 3);
        let touched = reloaded
            .iter()
            .find(|n| n.sort_key == 9_999_999_999_999)
            .unwrap();
        assert_eq!(touched.title, "t");
        assert_eq!(touched.body, "b");
    }

    #[test]
    fn update_out_of_range_is_rejected() {
        let mut store = store();
        store.create("a".into(), "".into()).unwrap();
        let writes = store.backend().write_count();

        let err = store.update(1, "x".into(), "".into()).unwrap_err();
        assert!(matches!(
            err,
            JotpadError::IndexOutOfRange {
                position: 1,
                len: 1
            }
        ));
        assert_eq!(titles(store.collection()), vec!["a"]);
        assert_eq!(store.backend().write_count(), writes);
    }

    // --- delete ---

    #[test]
    fn delete_one_removes_exactly_that_note() {
        let mut store = store();
        for title in ["d", "c", "b", "a"] {
            store.create(title.into(), "".into()).unwrap();
            tick(&store);
        }
        let removed = store.collection().get(2).unwrap().id;

        let after = store.delete_one(2).unwrap();
        assert_eq!(titles(after), vec!["a", "b", "d"]);
        assert!(after.find(&removed).is_none());
    }

    #[test]
    fn delete_one_out_of_range_is_rejected() {
        let mut store = store();
        let err = store.delete_one(0).unwrap_err();
        assert!(matches!(err, JotpadError::IndexOutOfRange { .. }));
    }

    #[test]
    fn delete_many_ignores_unknown_positions() {
        let mut store = store();
        for title in ["c", "b", "a"] {
            store.create(title.into(), "".into()).unwrap();
            tick(&store);
        }
        let positions: BTreeSet<usize> = [0, 2, 7].into_iter().collect();
        let after = store.delete_many(&positions).unwrap();
        assert_eq!(titles(after), vec!["b"]);
    }

    #[test]
    fn delete_many_with_empty_set_is_a_no_op() {
        let mut store = store();
        store.create("a".into(), "".into()).unwrap();
        let writes = store.backend().write_count();

        let after = store.delete_many(&BTreeSet::new()).unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn delete_many_everything_persists_empty_array() {
        let mut store = store();
        store.create("a".into(), "".into()).unwrap();
        tick(&store);
        store.create("b".into(), "".into()).unwrap();

        let positions: BTreeSet<usize> = [0, 1].into_iter().collect();
        assert!(store.delete_many(&positions).unwrap().is_empty());
        assert_eq!(store.backend().raw(DEFAULT_STORAGE_KEY).unwrap(), "[]");
    }

    #[test]
    fn delete_all_then_load_is_empty() {
        let mut store = store();
        store.create("a".into(), "".into()).unwrap();
        store.delete_all().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    // --- id operations ---

    #[test]
    fn id_operations_address_notes_regardless_of_position() {
        let mut store = store();
        store.create("a".into(), "".into()).unwrap();
        let id_a = store.collection().get(0).unwrap().id;
        tick(&store);
        store.create("b".into(), "".into()).unwrap();
        tick(&store);

        assert_eq!(store.position_of(&id_a), Some(1));
        store.update_note(&id_a, "a2".into(), "".into()).unwrap();
        assert_eq!(store.position_of(&id_a), Some(0));
        assert_eq!(store.get(&id_a).unwrap().title, "a2");

        store.delete_note(&id_a).unwrap();
        assert_eq!(titles(store.collection()), vec!["b"]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = store();
        let missing = Uuid::new_v4();
        assert!(matches!(
            store.delete_note(&missing),
            Err(JotpadError::NoteNotFound(id)) if id == missing
        ));
        assert!(store.delete_notes(&[missing]).unwrap().is_empty());
    }

    // --- write failures ---

    #[test]
    fn failed_write_rolls_back_every_mutation() {
        let mut store = store();
        store.create("a".into(), "".into()).unwrap();
        tick(&store);
        store.create("b".into(), "".into()).unwrap();
        let before = store.collection().clone();
        let raw_before = store.backend().raw(DEFAULT_STORAGE_KEY);

        store.backend().set_simulate_write_error(true);
        assert!(matches!(
            store.create("c".into(), "".into()),
            Err(JotpadError::StorageWrite(_))
        ));
        assert!(store.update(0, "x".into(), "".into()).is_err());
        assert!(store.delete_one(0).is_err());
        assert!(store.delete_many(&[0].into_iter().collect()).is_err());
        assert!(store.delete_all().is_err());

        assert_eq!(store.collection(), &before);
        assert_eq!(store.backend().raw(DEFAULT_STORAGE_KEY), raw_before);
    }

    #[test]
    fn every_mutation_leaves_collection_sorted() {
        let mut store = store();
        for i in 0..6 {
            store.create(format!("n{}", i), "".into()).unwrap();
            if i % 2 == 0 {
                tick(&store);
            }
            assert!(store.collection().is_sorted());
        }
        store.update(4, "u".into(), "".into()).unwrap();
        assert!(store.collection().is_sorted());
        store.delete_one(1).unwrap();
        assert!(store.collection().is_sorted());
        store
            .delete_many(&[0, 2].into_iter().collect())
            .unwrap();
        assert!(store.collection().is_sorted());
        assert_eq!(store.collection(), &reopened(&store));
    }
}
