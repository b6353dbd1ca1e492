//! The transition function: applying an action to a board.

use super::action::{Action, InvalidAction};
use super::rules::player;
use super::types::Board;
use tracing::instrument;

/// Returns the board that results from the player to move marking `action`.
///
/// Bounds are checked before occupancy. The input board is never modified;
/// on success the returned board differs from it in exactly one cell.
#[instrument(level = "trace", skip(board), fields(row = action.row, col = action.col))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    let Action { row, col } = action;
    let index = action
        .index()
        .ok_or(InvalidAction::OutOfBounds { row, col })?;

    if !board.is_empty_at(action) {
        return Err(InvalidAction::Occupied { row, col });
    }

    Ok(board.with_mark(index, player(board)))
}
