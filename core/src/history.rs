use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Cells currently held by one player, oldest placement first.
///
/// Never holds more than [`MAX_MARKS`] entries once [`MoveHistory::push`] returns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: SmallVec<[CellIndex; MAX_MARKS + 1]>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `index`, shifting out and returning the oldest entry when the cap is exceeded.
    pub fn push(&mut self, index: CellIndex) -> Option<CellIndex> {
        self.moves.push(index);
        if self.moves.len() > MAX_MARKS {
            Some(self.moves.remove(0))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether the next push will evict the oldest entry.
    pub fn is_at_capacity(&self) -> bool {
        self.moves.len() == MAX_MARKS
    }

    pub fn oldest(&self) -> Option<CellIndex> {
        self.moves.first().copied()
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.moves.contains(&index)
    }

    pub fn as_slice(&self) -> &[CellIndex] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.moves.iter().copied()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order_under_cap() {
        let mut history = MoveHistory::new();

        assert_eq!(history.push(4), None);
        assert_eq!(history.push(0), None);
        assert!(!history.is_at_capacity());
        assert_eq!(history.push(8), None);

        assert_eq!(history.as_slice(), &[4, 0, 8]);
        assert!(history.is_at_capacity());
        assert_eq!(history.oldest(), Some(4));
    }

    #[test]
    fn fourth_push_evicts_oldest() {
        let mut history = MoveHistory::new();
        for index in [1, 2, 3] {
            history.push(index);
        }

        assert_eq!(history.push(7), Some(1));
        assert_eq!(history.as_slice(), &[2, 3, 7]);
        assert!(!history.contains(1));

        assert_eq!(history.push(1), Some(2));
        assert_eq!(history.as_slice(), &[3, 7, 1]);
    }
}
