use super::Player;

/// Largest board edge accepted when creating a game.
pub const MAX_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    /// Numeric value used by the text protocol (0 = empty)
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::One => 1,
            Cell::Two => 2,
        }
    }
}

/// A full-length line on the board. Indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Cells (i, i), top-left to bottom-right.
    MainDiagonal,
    /// Cells at column `size - 1 - i`, row `i`, top-right to bottom-left.
    AntiDiagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

/// Square grid stored row-major. Row 0 is the top, row `size - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a specific position, `None` when out of bounds
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Get the cell at a specific position
    ///
    /// Panics if `row` or `col` is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.try_get(row, col).unwrap_or_else(|| {
            panic!(
                "cell ({row}, {col}) out of bounds for {0}x{0} board",
                self.size
            )
        })
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.size {
            return true;
        }
        self.cells[col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, DropError> {
        if col >= self.size {
            return Err(DropError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(DropError::ColumnFull);
        }

        // Scan upward from the bottom for the first empty slot
        let row = (0..self.size)
            .rev()
            .find(|&row| self.cells[row * self.size + col] == Cell::Empty)
            .ok_or(DropError::ColumnFull)?;

        self.cells[row * self.size + col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.size).all(|col| self.is_column_full(col))
    }

    /// Find a line fully occupied by one player.
    ///
    /// Rows are checked first, then columns, then the main diagonal and
    /// finally the anti-diagonal. Only lines spanning the whole board count.
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        let n = self.size;

        for row in 0..n {
            if let Some(player) = line_owner((0..n).map(|col| self.get(row, col))) {
                return Some((Line::Row(row), player));
            }
        }

        for col in 0..n {
            if let Some(player) = line_owner((0..n).map(|row| self.get(row, col))) {
                return Some((Line::Column(col), player));
            }
        }

        if let Some(player) = line_owner((0..n).map(|i| self.get(i, i))) {
            return Some((Line::MainDiagonal, player));
        }

        line_owner((0..n).map(|i| self.get(i, n - 1 - i)))
            .map(|player| (Line::AntiDiagonal, player))
    }
}

/// Owner of a line when every cell belongs to the same player
fn line_owner(mut cells: impl Iterator<Item = Cell>) -> Option<Player> {
    let first = cells.next()?;
    let player = first.player()?;
    cells.all(|cell| cell == first).then_some(player)
}
