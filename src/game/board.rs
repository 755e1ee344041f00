use super::player::Seat;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CAPACITY: usize = ROWS * COLS;

/// A placed piece. Row 0 is the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Disc {
    pub x: usize,
    pub y: usize,
    pub owner: Seat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Board contents, indexed `[column][row]`, plus the placements in move order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Seat>; ROWS]; COLS],
    heights: [usize; COLS],
    discs: Vec<Disc>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; ROWS]; COLS],
            heights: [0; COLS],
            discs: Vec::with_capacity(CAPACITY),
        }
    }

    /// Get the owner of a cell, `None` if empty or off the board
    pub fn get(&self, col: usize, row: usize) -> Option<Seat> {
        self.cells.get(col)?.get(row).copied().flatten()
    }

    /// Number of discs stacked in a column
    pub fn height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || self.heights[col] == ROWS
    }

    /// Drop a disc in a column, returns the disc where it landed
    pub fn drop_disc(&mut self, col: usize, owner: Seat) -> Result<Disc, BoardError> {
        if col >= COLS {
            return Err(BoardError::InvalidColumn(col));
        }
        if self.is_column_full(col) {
            return Err(BoardError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.cells[col][row] = Some(owner);
        self.heights[col] += 1;

        let disc = Disc { x: col, y: row, owner };
        self.discs.push(disc);
        Ok(disc)
    }

    /// All discs in the order they were placed
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// The most recently placed disc
    pub fn last_disc(&self) -> Option<&Disc> {
        self.discs.last()
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.discs.len() == CAPACITY
    }

    pub fn clear(&mut self) {
        *self = Board::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
