use crate::commands::CmdResult;
use crate::error::{JotpadError, Result};
use crate::index::{DisplayIndex, DisplayNote};
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;
use crate::time::Clock;

pub fn run<B: StorageBackend, C: Clock>(
    store: &mut NoteStore<B, C>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let collection = store.ensure_loaded()?;

    let listed = indexes
        .iter()
        .map(|index| {
            collection
                .get(index.position())
                .map(|note| DisplayNote {
                    note: note.clone(),
                    index: *index,
                })
                .ok_or(JotpadError::IndexOutOfRange {
                    position: index.position(),
                    len: collection.len(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::new(n).unwrap()
    }

    #[test]
    fn returns_requested_notes_in_request_order() {
        let mut fixture = StoreFixture::new().with_notes(3);
        let result = run(&mut fixture.store, &[idx(3), idx(1)]).unwrap();

        assert_eq!(result.listed_notes.len(), 2);
        assert_eq!(result.listed_notes[0].note.title, "Note 1");
        assert_eq!(result.listed_notes[0].index.get(), 3);
        assert_eq!(result.listed_notes[1].note.title, "Note 3");
        assert_eq!(result.listed_notes[1].note.body, "<p>Body 3</p>");
    }

    #[test]
    fn out_of_range_fails() {
        let mut fixture = StoreFixture::new().with_notes(1);
        let err = run(&mut fixture.store, &[idx(2)]).unwrap_err();
        assert!(matches!(
            err,
            JotpadError::IndexOutOfRange {
                position: 1,
                len: 1
            }
        ));
    }
}
