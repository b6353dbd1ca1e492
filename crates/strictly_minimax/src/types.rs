//! Core domain types for tic-tac-toe.

use super::action::Action;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Score of a board from X's perspective.
///
/// Only three values occur: [`X_WINS`], [`O_WINS`] and [`TIE`].
pub type Utility = i32;

/// Utility of a board X has won.
pub const X_WINS: Utility = 1;
/// Utility of a board O has won.
pub const O_WINS: Utility = -1;
/// Utility of a tied or unfinished board.
pub const TIE: Utility = 0;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a board this player has won.
    pub fn win_utility(self) -> Utility {
        match self {
            Player::X => X_WINS,
            Player::O => O_WINS,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Character used for this cell in board notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain `Copy` value: every transition builds a new board and no two
/// boards ever share storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, indexed by `row * 3 + col`.
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Creates a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELLS];
        for (row, line) in rows.iter().enumerate() {
            cells[row * SIZE..(row + 1) * SIZE].copy_from_slice(line);
        }
        Self { cells }
    }

    pub(crate) fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Action::new(row, col).index().map(|i| self.cells[i])
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = *cell;
        }
        rows
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Counts the non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Checks if every cell is taken.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Checks if the action names an on-board, empty cell.
    pub fn is_empty_at(&self, action: Action) -> bool {
        action
            .index()
            .is_some_and(|i| self.cells[i] == Cell::Empty)
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        next.cells[index] = Cell::Occupied(player);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, line) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in line {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
