use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;
use crate::time::Clock;

/// Replaces the note listed at `index`. The edited note moves to the top,
/// so it comes back as index 1.
pub fn run<B: StorageBackend, C: Clock>(
    store: &mut NoteStore<B, C>,
    index: DisplayIndex,
    title: String,
    body: String,
) -> Result<CmdResult> {
    let collection = store.update(index.position(), title, body)?;
    let note = collection.notes()[0].clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note updated: {}",
        label(&note.title)
    )));
    result.affected_notes.push(DisplayNote {
        note,
        index: DisplayIndex::from_position(0),
    });
    Ok(result)
}
