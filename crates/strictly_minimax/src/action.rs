//! Actions and the errors raised when applying them.
//!
//! An action names a cell by `(row, col)`. It is only meaningful relative to
//! a board: legal when the cell is on the board and still empty.

use super::types::{CELLS, SIZE};
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate naming the cell to mark.
///
/// Ordering is row-major, so sets of actions iterate top-left first.
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
    derive_new::new,
)]
pub struct Action {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Action {
    /// Row-major cell index, or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < SIZE && self.col < SIZE).then_some(self.row * SIZE + self.col)
    }

    /// Creates the action for a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Self::new(index / SIZE, index % SIZE))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error raised when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidAction {
    /// Row or column is outside 0..=2.
    #[display("Action ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_corners() {
        assert_eq!(Action::new(0, 0).index(), Some(0));
        assert_eq!(Action::new(1, 1).index(), Some(4));
        assert_eq!(Action::new(2, 2).index(), Some(8));
        assert_eq!(Action::from_index(5), Some(Action::new(1, 2)));
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_index_out_of_bounds() {
        assert_eq!(Action::new(3, 0).index(), None);
        assert_eq!(Action::new(0, 3).index(), None);
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Action::new(0, 2) < Action::new(1, 0));
        assert!(Action::new(1, 0) < Action::new(1, 1));
    }

    #[test]
    fn test_error_messages() {
        let err = InvalidAction::Occupied { row: 1, col: 2 };
        assert!(err.to_string().contains("occupied"));

        let err = InvalidAction::OutOfBounds { row: 5, col: 0 };
        assert_eq!(err.to_string(), "Action (5, 0) is off the board");
    }
}
