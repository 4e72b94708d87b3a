use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_notes;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;
use crate::time::Clock;

pub fn run<B: StorageBackend, C: Clock>(store: &mut NoteStore<B, C>) -> Result<CmdResult> {
    let collection = store.ensure_loaded()?;
    Ok(CmdResult::default().with_listed_notes(index_notes(collection)))
}
