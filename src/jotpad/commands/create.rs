use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;
use crate::time::Clock;

pub fn run<B: StorageBackend, C: Clock>(
    store: &mut NoteStore<B, C>,
    title: String,
    body: String,
) -> Result<CmdResult> {
    let collection = store.create(title, body)?;
    // New note always sorts first
    let note = collection.notes()[0].clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        label(&note.title)
    )));
    result.affected_notes.push(DisplayNote {
        note,
        index: DisplayIndex::from_position(0),
    });
    Ok(result)
}
