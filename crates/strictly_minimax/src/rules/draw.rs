//! End-of-game detection for tic-tac-toe.

use super::super::Board;
use super::win::winner;
use tracing::instrument;

/// Checks if the game is over: someone has won, or no cell is left.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Checks if the board is full with no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
