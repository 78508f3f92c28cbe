use std::fmt;

use crate::error::{BoardError, DropError};

use super::cell::Cell;
use super::player::{PlayerId, NO_OWNER};

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Number of consecutive pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Scan directions as (column step, row step): →, ↑, ↗, ↘.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A fixed-size grid of cells. Row 0 is the bottom row; pieces fill upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, starting from the bottom row
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the default 7x6 dimensions
    pub fn new() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::new(); DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }

    /// Create an empty board of `width` columns by `height` rows.
    ///
    /// Both dimensions must be positive, and the cell count must be
    /// addressable with signed coordinates.
    pub fn with_dimensions(width: usize, height: usize) -> Result<Self, BoardError> {
        let capacity = width
            .checked_mul(height)
            .filter(|&n| n > 0 && n <= isize::MAX as usize)
            .ok_or(BoardError::InvalidDimensions { width, height })?;

        Ok(Board {
            width,
            height,
            cells: vec![Cell::new(); capacity],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, which is also the number of moves in a full game
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    fn index(&self, column: usize, row: usize) -> usize {
        row * self.width + column
    }

    /// Translate signed coordinates into a cell index, if they are on the board.
    fn position(&self, column: isize, row: isize) -> Option<usize> {
        let column = usize::try_from(column).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(row).ok().filter(|&r| r < self.height)?;
        Some(self.index(column, row))
    }

    /// Get the cell at a position, or `None` if it is off the board
    pub fn cell(&self, column: usize, row: usize) -> Option<&Cell> {
        if column < self.width && row < self.height {
            self.cells.get(self.index(column, row))
        } else {
            None
        }
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// On error the board is left untouched.
    pub fn drop_piece(&mut self, column: usize, player: PlayerId) -> Result<usize, DropError> {
        if column >= self.width {
            return Err(DropError::InvalidColumn {
                column,
                width: self.width,
            });
        }

        for row in 0..self.height {
            let index = self.index(column, row);
            if self.cells[index].add_piece(player).is_ok() {
                return Ok(row);
            }
        }

        Err(DropError::ColumnFull { column })
    }

    /// Owner of the piece at a position. Empty and off-board positions both
    /// report [`NO_OWNER`].
    pub fn owner_at(&self, column: isize, row: isize) -> PlayerId {
        self.position(column, row)
            .map_or(NO_OWNER, |index| self.cells[index].owner())
    }

    /// Whether the position is on the board and holds a piece owned by `player`.
    pub fn is_owned_by(&self, column: isize, row: isize, player: PlayerId) -> bool {
        self.position(column, row)
            .is_some_and(|index| self.cells[index].matches(player))
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.cell(column, self.height - 1) {
            Some(top) => !top.is_empty(),
            None => true,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Columns that still accept a piece, left to right
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Remove every piece. Dimensions are unchanged.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Iterate over every cell as `(row, column, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (index / width, index % width, cell))
    }

    pub fn has_won(&self, player: PlayerId) -> bool {
        self.winning_line(player).is_some()
    }

    /// Find a four-in-a-row owned by `player`, as `(column, row)` pairs in
    /// order from the starting cell.
    ///
    /// Every owned cell is tried as the start of a run in each direction. Runs
    /// that would leave the board simply fail, so no edge handling is needed.
    pub fn winning_line(&self, player: PlayerId) -> Option<[(usize, usize); WIN_LENGTH]> {
        for (row, column, cell) in self.iter() {
            if !cell.matches(player) {
                continue;
            }

            for &direction in &DIRECTIONS {
                if self.is_run_from(column, row, direction, player) {
                    let (dc, dr) = direction;
                    return Some(std::array::from_fn(|step| {
                        let step = step as isize;
                        (
                            (column as isize + dc * step) as usize,
                            (row as isize + dr * step) as usize,
                        )
                    }));
                }
            }
        }

        None
    }

    /// Whether the cells following `(column, row)` in `direction` complete a
    /// run of [`WIN_LENGTH`].
    fn is_run_from(
        &self,
        column: usize,
        row: usize,
        (dc, dr): (isize, isize),
        player: PlayerId,
    ) -> bool {
        let (column, row) = (column as isize, row as isize);
        (1..WIN_LENGTH as isize)
            .all(|step| self.is_owned_by(column + dc * step, row + dr * step, player))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text rendering, top row first: `.` for empty cells, the owner's id otherwise.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            for column in 0..self.width {
                if column > 0 {
                    write!(f, " ")?;
                }
                match self.cells[self.index(column, row)].owner() {
                    NO_OWNER => write!(f, ".")?,
                    owner => write!(f, "{owner}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
