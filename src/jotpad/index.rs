//! User-facing note numbers.
//!
//! The store addresses notes by 0-based position in the sorted collection.
//! People count from 1, so everything the CLI prints or parses goes through
//! [`DisplayIndex`]. Conversion happens once, in the API layer.

use crate::model::{Collection, Note};
use std::fmt;
use std::str::FromStr;

/// A 1-based note number as shown in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// `None` for zero, which is never a valid display number.
    pub fn new(n: usize) -> Option<Self> {
        (n > 0).then_some(Self(n))
    }

    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('.');
        let n: usize = trimmed
            .parse()
            .map_err(|_| format!("'{}' is not a note number", s))?;
        DisplayIndex::new(n).ok_or_else(|| "note numbers start at 1".to_string())
    }
}

/// A note paired with the number it is listed under.
#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

/// Numbers every note in collection order.
pub fn index_notes(collection: &Collection) -> Vec<DisplayNote> {
    collection
        .iter()
        .enumerate()
        .map(|(position, note)| DisplayNote {
            note: note.clone(),
            index: DisplayIndex::from_position(position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn parses_plain_and_dotted_numbers() {
        assert_eq!("3".parse::<DisplayIndex>().unwrap().get(), 3);
        assert_eq!("3.".parse::<DisplayIndex>().unwrap().get(), 3);
        assert_eq!(" 12 ".parse::<DisplayIndex>().unwrap().position(), 11);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("-1".parse::<DisplayIndex>().is_err());
        assert!("abc".parse::<DisplayIndex>().is_err());
        assert!("".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn position_and_display_are_off_by_one() {
        let idx = DisplayIndex::from_position(0);
        assert_eq!(idx.to_string(), "1");
        assert_eq!(idx.position(), 0);
    }

    #[test]
    fn index_notes_follows_collection_order() {
        let now = Utc::now();
        let collection = Collection::from_notes(vec![
            Note::new("b".into(), "".into(), now),
            Note::new("a".into(), "".into(), now + chrono::Duration::seconds(1)),
        ]);
        let indexed = index_notes(&collection);
        assert_eq!(indexed[0].note.title, "a");
        assert_eq!(indexed[0].index.get(), 1);
        assert_eq!(indexed[1].note.title, "b");
        assert_eq!(indexed[1].index.get(), 2);
    }
}
