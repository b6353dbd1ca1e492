//! Turn order and legal moves.

use super::super::{Action, Board, Cell, Player};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the player who moves next.
///
/// X moves whenever both players have placed the same number of marks,
/// otherwise O. Defined for every board, terminal ones included.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell as an action.
///
/// The set is empty on a full board.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .filter_map(|(i, _)| Action::from_index(i))
        .collect()
}
