//! Text notation for boards.
//!
//! A board is written as nine cell characters in row-major order. `X` and
//! `O` (either case) are marks; `.`, `_` and `-` are empty cells. Row
//! separators (`/`, `|`, `,`) and whitespace are ignored, so `"XO./.X./..O"`
//! and the three-line [`Display`](std::fmt::Display) output both parse.

use super::types::{Board, CELLS, Cell, Player};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Error parsing a board from text.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct ParseBoardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseBoardError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut count = 0;

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '_' | '-' => Cell::Empty,
                '/' | '|' | ',' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(ParseBoardError::new(format!(
                        "Unexpected character {:?}",
                        other
                    )));
                }
            };

            if count == CELLS {
                return Err(ParseBoardError::new(format!(
                    "Expected {} cells, found more",
                    CELLS
                )));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELLS {
            return Err(ParseBoardError::new(format!(
                "Expected {} cells, found {}",
                CELLS, count
            )));
        }

        let board = Board::from_cells(cells);
        debug!(board = %board, "Parsed board");
        Ok(board)
    }
}
