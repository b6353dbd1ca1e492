//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, TIE, Utility};
use tracing::instrument;

/// Winning lines as `(row, col)` triples, in the order they are checked.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows first, then columns, then the main diagonal and
/// finally the anti-diagonal; the first complete line decides. The order only
/// matters for boards that cannot arise in legal play.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        let sq = cells[a.0 * 3 + a.1];
        if sq == cells[b.0 * 3 + b.1]
            && sq == cells[c.0 * 3 + c.1]
            && let Cell::Occupied(player) = sq
        {
            return Some(player);
        }
    }
    None
}

/// Scores the board from X's perspective.
///
/// 1 when X has won, -1 when O has won, 0 otherwise. Total: unfinished
/// boards score 0 as well.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Utility {
    winner(board).map_or(TIE, Player::win_utility)
}
