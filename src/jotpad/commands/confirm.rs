use crate::selection::Selection;

/// A destructive action waiting for the user's go-ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteOne(usize),
    DeleteSelected(Selection),
    DeleteAll,
}

impl ConfirmAction {
    /// The confirmation that deleting `selection` calls for.
    pub fn for_selection(selection: Selection) -> Self {
        match selection.len() {
            1 => {
                let position = selection.positions().first().copied().unwrap_or_default();
                ConfirmAction::DeleteOne(position)
            }
            _ => ConfirmAction::DeleteSelected(selection),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteOne(_) => "Delete Note",
            ConfirmAction::DeleteSelected(_) => "Delete Selected Notes",
            ConfirmAction::DeleteAll => "Delete All Notes",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteOne(_) => "Are you sure you want to delete this note?",
            ConfirmAction::DeleteSelected(_) => {
                "Are you sure you want to delete the selected notes?"
            }
            ConfirmAction::DeleteAll => "Are you sure you want to delete all notes?",
        }
    }
}
