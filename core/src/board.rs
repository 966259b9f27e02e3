use core::fmt;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of evaluating a board for a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win(Mark),
    Draw,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_CELLS],
        }
    }

    /// Builds a board from bare marks, assigning placement order in index order.
    pub fn from_marks(marks: [Option<Mark>; BOARD_CELLS]) -> Self {
        let mut board = Self::new();
        let mut seq: MoveSeq = 0;
        for (cell, mark) in board.cells.iter_mut().zip(marks) {
            if let Some(mark) = mark {
                seq += 1;
                *cell = Cell::new(mark, seq);
            }
        }
        board
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn mark_at(&self, index: CellIndex) -> Option<Mark> {
        self[index].mark()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn marks(&self) -> [Option<Mark>; BOARD_CELLS] {
        self.cells.map(Cell::mark)
    }

    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count_of(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| cell.holds(mark)).count()
    }

    /// Cell holding `mark` with the lowest placement order.
    pub fn oldest_of(&self, mark: Mark) -> Option<CellIndex> {
        self.cells
            .iter()
            .zip(0..)
            .filter(|(cell, _)| cell.holds(mark))
            .min_by_key(|(cell, _)| cell.placed_at())
            .map(|(_, index)| index)
    }

    /// First line, in [`LINES`] order, fully held by one mark.
    pub fn winning_line(&self) -> Option<(Mark, Line)> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let mark = self.mark_at(a)?;
            (self.mark_at(b) == Some(mark) && self.mark_at(c) == Some(mark)).then_some((mark, line))
        })
    }

    /// Terminal condition of this board, `None` while play can continue.
    ///
    /// A completed line takes precedence over a full board.
    pub fn evaluate(&self) -> Option<GameResult> {
        if let Some((mark, _)) = self.winning_line() {
            Some(GameResult::Win(mark))
        } else if self.is_full() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    pub(crate) fn place(&mut self, index: CellIndex, mark: Mark, seq: MoveSeq) {
        self.cells[usize::from(index)] = Cell::new(mark, seq);
    }

    pub(crate) fn clear(&mut self, index: CellIndex) {
        self.cells[usize::from(index)] = Cell::EMPTY;
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

impl TryFrom<&[Option<Mark>]> for Board {
    type Error = GameError;

    fn try_from(marks: &[Option<Mark>]) -> Result<Self> {
        let marks: [Option<Mark>; BOARD_CELLS] =
            marks.try_into().map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self::from_marks(marks))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                match cell.mark() {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn evaluate_finds_first_line_in_order() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            X, X, X,
            O, O, E,
            E, E, E,
        ]);

        assert_eq!(board.winning_line(), Some((Mark::X, [0, 1, 2])));
        assert_eq!(board.evaluate(), Some(GameResult::Win(Mark::X)));
    }

    #[test]
    fn evaluate_detects_diagonal() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            X, X, O,
            E, O, X,
            O, E, E,
        ]);

        assert_eq!(board.winning_line(), Some((Mark::O, [2, 4, 6])));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);

        assert!(board.is_full());
        assert_eq!(board.evaluate(), Some(GameResult::Draw));
    }

    #[test]
    fn full_board_with_line_is_win_not_draw() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            X, X, X,
            O, O, X,
            X, O, O,
        ]);

        assert!(board.is_full());
        assert_eq!(board.evaluate(), Some(GameResult::Win(Mark::X)));
    }

    #[test]
    fn partial_board_without_line_continues() {
        let board = Board::from_marks([X, O, E, E, E, E, E, E, E]);

        assert_eq!(board.evaluate(), None);
        assert_eq!(Board::new().evaluate(), None);
    }

    #[test]
    fn oldest_of_uses_placement_order() {
        let mut board = Board::new();
        board.place(7, Mark::X, 1);
        board.place(2, Mark::X, 3);
        board.place(5, Mark::O, 2);

        assert_eq!(board.oldest_of(Mark::X), Some(7));
        assert_eq!(board.oldest_of(Mark::O), Some(5));

        board.clear(7);
        assert_eq!(board.oldest_of(Mark::X), Some(2));
        assert_eq!(board.count_of(Mark::X), 1);
    }

    #[test]
    fn try_from_rejects_wrong_length() {
        let short = [X; 8];
        let exact = [O; 9];

        assert_eq!(
            Board::try_from(&short[..]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(Board::try_from(&exact[..]).map(|b| b.count_of(Mark::O)), Ok(9));
    }

    #[test]
    fn display_renders_grid() {
        let board = Board::from_marks([X, E, E, E, O, E, E, E, X]);

        assert_eq!(board.to_string(), "X..\n.O.\n..X");
    }
}
