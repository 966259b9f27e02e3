/// Cell address on the 3x3 board, row-major `0..9`.
pub type CellIndex = u8;

/// Placement order counter stored alongside each mark.
pub type MoveSeq = u32;

/// A row, column or diagonal of three cell indices.
pub type Line = [CellIndex; 3];

pub const BOARD_SIDE: usize = 3;

pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Live marks a single player may keep on the board before the oldest vanishes.
pub const MAX_MARKS: usize = 3;

/// Winning lines in evaluation order: rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Narrows an arbitrary caller-supplied index to a board cell, if it is one.
pub fn to_cell_index(index: usize) -> Option<CellIndex> {
    if index < BOARD_CELLS {
        index.try_into().ok()
    } else {
        None
    }
}

/// `(row, column)` of a cell, for renderers that lay out a grid.
pub const fn row_col(index: CellIndex) -> (usize, usize) {
    let index = index as usize;
    (index / BOARD_SIDE, index % BOARD_SIDE)
}
