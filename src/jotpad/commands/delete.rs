use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::selection::Selection;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;
use crate::time::Clock;

/// Deletes the selected notes.
///
/// A single selected note must exist. With several, numbers past the end
/// are skipped and reported. An empty selection is a warning, not an error,
/// and storage is not touched.
pub fn run<B: StorageBackend, C: Clock>(
    store: &mut NoteStore<B, C>,
    selection: &Selection,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if selection.is_empty() {
        result.add_message(CmdMessage::warning("No notes selected for deletion."));
        return Ok(result);
    }

    let collection = store.ensure_loaded()?;
    let removed: Vec<DisplayNote> = collection
        .iter()
        .enumerate()
        .filter(|(position, _)| selection.contains(*position))
        .map(|(position, note)| DisplayNote {
            note: note.clone(),
            index: DisplayIndex::from_position(position),
        })
        .collect();
    let skipped = selection.len() - removed.len();

    if selection.len() == 1 {
        let position = selection.positions().first().copied().unwrap_or_default();
        store.delete_one(position)?;
    } else {
        store.delete_many(selection.positions())?;
    }

    for dn in &removed {
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            dn.index,
            label(&dn.note.title)
        )));
    }
    if skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "Skipped {} number(s) with no note.",
            skipped
        )));
    }
    Ok(result.with_affected_notes(removed))
}
