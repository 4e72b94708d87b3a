use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;
use crate::time::Clock;

/// Deletes every note. Works on a corrupt or unreadable slot too, which
/// makes it the reset path.
pub fn run<B: StorageBackend, C: Clock>(store: &mut NoteStore<B, C>) -> Result<CmdResult> {
    let count = store.ensure_loaded().map(|c| c.len()).unwrap_or_default();
    let was_corrupt = store.is_corrupt();
    let was_unreadable = store.is_unreadable();
    store.delete_all()?;

    let mut result = CmdResult::default();
    let message = if was_corrupt {
        "Corrupt notes storage was reset.".to_string()
    } else if was_unreadable {
        "Unreadable notes storage was reset; any notes it held are gone.".to_string()
    } else {
        match count {
            0 => "No notes to delete.".to_string(),
            1 => "Deleted 1 note.".to_string(),
            n => format!("Deleted all {} notes.", n),
        }
    };
    result.add_message(CmdMessage::success(message));
    Ok(result)
}
