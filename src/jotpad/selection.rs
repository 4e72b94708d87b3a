use crate::index::DisplayIndex;
use std::collections::BTreeSet;

/// A set of selected note positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    positions: BTreeSet<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &BTreeSet<usize> {
        &self.positions
    }
}

impl FromIterator<DisplayIndex> for Selection {
    fn from_iter<T: IntoIterator<Item = DisplayIndex>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().map(|idx| idx.position()).collect(),
        }
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
