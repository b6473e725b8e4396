use crate::error::GeometryError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// A rectangular Connect Four grid stored as a flat row-major slot sequence
/// (`index = row * cols + col`). Row 0 is the top, row `rows - 1` the bottom.
///
/// Occupied slots never revert to empty, and within a column they are always
/// contiguous from the bottom up (the gravity invariant). The only mutator is
/// the gated [`Board::drop_piece`]; hypothetical moves go through a
/// [`Simulation`] copy instead, so search can never touch a live game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            cells: vec![Cell::Empty; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check that a column number exists on this board.
    pub fn is_valid_column(&self, col: usize) -> bool {
        col < self.cols
    }

    /// Check if a column is full, i.e. its top (row 0) slot is occupied.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.cells[col] != Cell::Empty
    }

    /// A column is playable when it exists and still has an empty slot.
    pub fn is_playable(&self, col: usize) -> bool {
        self.is_valid_column(col) && !self.is_column_full(col)
    }

    /// Row number of a flat index.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.cols
    }

    /// Column number of a flat index.
    pub fn col_of(&self, index: usize) -> usize {
        index % self.cols
    }

    /// Flat index for a row/column pair.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize, GeometryError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GeometryError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Index of the diagonal neighbor one row up and one column right.
    pub fn up_right_of(&self, index: usize) -> Result<usize, GeometryError> {
        let row = self.row_of(index);
        let col = self.col_of(index);
        if row != 0 && col != self.cols - 1 {
            self.index_of(row - 1, col + 1)
        } else {
            Err(GeometryError::NoUpRightNeighbor { index })
        }
    }

    /// Index of the diagonal neighbor one row down and one column right.
    pub fn down_right_of(&self, index: usize) -> Result<usize, GeometryError> {
        let row = self.row_of(index);
        let col = self.col_of(index);
        if row != self.rows - 1 && col != self.cols - 1 {
            self.index_of(row + 1, col + 1)
        } else {
            Err(GeometryError::NoDownRightNeighbor { index })
        }
    }

    /// Bounds-checked access by flat index.
    pub fn cell_at(&self, index: usize) -> Result<Cell, GeometryError> {
        self.cells.get(index).copied().ok_or(GeometryError::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Get the cell at a specific position. Callers are expected to stay in
    /// bounds; use [`Board::cell_at`] for checked access.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Lowest empty row in a column, scanning bottom to top. `None` when the
    /// column is full or does not exist.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returning the row where it landed.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if !self.is_valid_column(col) {
            return Err(MoveError::InvalidColumn);
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        match self.landing_row(col) {
            Some(row) => {
                self.cells[row * self.cols + col] = cell;
                Ok(row)
            }
            // The column passed the full check, so the gravity invariant was
            // violated elsewhere.
            None => unreachable!("column {col} has no empty slot but is not full"),
        }
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Columns that can still receive a piece, in ascending order.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_playable(col)).collect()
    }

    /// Fork a private copy for hypothetical drops.
    pub fn simulation(&self) -> Simulation {
        Simulation {
            board: self.clone(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// A throwaway board copy for exploring "what if I play here".
///
/// This is the only type that exposes an ungated drop. The caller has already
/// established that the column is playable, so no legality gate is rerun, and
/// because the copy is private to one search branch the live game board can
/// never be mutated through it.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
}

impl Simulation {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Place a piece in the lowest empty slot of a column, skipping the
    /// validity gate of [`Board::drop_piece`].
    pub fn force_drop(&mut self, col: usize, cell: Cell) -> usize {
        match self.board.landing_row(col) {
            Some(row) => {
                self.board.cells[row * self.board.cols + col] = cell;
                row
            }
            None => unreachable!("forced drop into full or invalid column {col}"),
        }
    }
}
