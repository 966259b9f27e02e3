use core::fmt;
use serde::{Deserialize, Serialize};

use crate::MoveSeq;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::X
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A board square: the mark it holds, if any, and when that mark was placed.
///
/// `placed_at` is only meaningful while `mark` is set; empty cells keep `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mark: Option<Mark>,
    placed_at: MoveSeq,
}

impl Cell {
    pub const EMPTY: Self = Self {
        mark: None,
        placed_at: 0,
    };

    pub const fn new(mark: Mark, placed_at: MoveSeq) -> Self {
        Self {
            mark: Some(mark),
            placed_at,
        }
    }

    pub const fn mark(self) -> Option<Mark> {
        self.mark
    }

    pub const fn placed_at(self) -> MoveSeq {
        self.placed_at
    }

    pub const fn is_empty(self) -> bool {
        self.mark.is_none()
    }

    pub fn holds(self, mark: Mark) -> bool {
        self.mark == Some(mark)
    }
}
