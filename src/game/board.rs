use std::fmt;

use super::Player;
use crate::error::GameError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Pieces in a row needed to win. Also the smallest usable board dimension.
pub const CONNECT: usize = 4;

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 64;

/// Ray directions as (row step, column step): right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// Row-major grid. Row 0 is the top, row `height - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        let in_range = |n: usize| (CONNECT..=MAX_DIMENSION).contains(&n);
        let cell_count = width
            .checked_mul(height)
            .filter(|_| in_range(width) && in_range(height))
            .ok_or(GameError::InvalidDimensions { width, height })?;
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; cell_count],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get the cell at a specific position, `None` when outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Lowest empty row in a column, scanning from the bottom up.
    /// `Ok(None)` means the column is full.
    pub fn landing_row(&self, col: usize) -> Result<Option<usize>, GameError> {
        if col >= self.width {
            return Err(GameError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[self.index(row, col)].is_empty()))
    }

    /// Check if a column is full. Columns outside the grid count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        !matches!(self.landing_row(col), Ok(Some(_)))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, GameError> {
        let row = self.landing_row(col)?.ok_or(GameError::ColumnFull(col))?;
        let idx = self.index(row, col);
        self.cells[idx] = Cell::Occupied(player);
        Ok(row)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Full scan: does any four-cell ray anywhere on the board belong to `player`?
    pub fn check_win_at(&self, player: Player) -> bool {
        let target = Cell::Occupied(player);
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.ray_matches(row, col, dr, dc, target))
            })
        })
    }

    /// A ray only counts if all four cells are on the board.
    fn ray_matches(&self, row: usize, col: usize, dr: isize, dc: isize, target: Cell) -> bool {
        (0..CONNECT as isize).all(|step| {
            self.get_signed(row as isize + dr * step, col as isize + dc * step) == Some(target)
        })
    }

    /// Check if the piece at (row, col) is part of four in a row.
    ///
    /// Only the four axes through that cell are scanned. For any position
    /// reached without an earlier win this agrees with [`Board::check_win_at`]
    /// for the cell's owner.
    pub fn check_win_through(&self, row: usize, col: usize) -> bool {
        let Some(Cell::Occupied(player)) = self.get(row, col) else {
            return false;
        };
        let target = Cell::Occupied(player);

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.run_length(row, col, dr, dc, target)
                + self.run_length(row, col, -dr, -dc, target);
            count >= CONNECT
        })
    }

    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, target: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while self.get_signed(r, c) == Some(target) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Build a board from text rows ('.', 'X', 'O'), top row first.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let height = rows.len();
        let width = rows[0].len();
        let mut board = Board::new(width, height).unwrap();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width, "ragged row {row}");
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'X' => Cell::Occupied(Player::One),
                    'O' => Cell::Occupied(Player::Two),
                    other => panic!("unexpected cell '{other}'"),
                };
                let idx = board.index(row, col);
                board.cells[idx] = cell;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: String = (0..self.width)
                .map(|col| self.cells[self.index(row, col)].symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..self.width)
            .map(|col| char::from_digit(((col + 1) % 10) as u32, 10).unwrap_or('?'))
            .collect();
        write!(f, "{footer}")
    }
}
