//! Minimax search with alpha-beta pruning.
//!
//! The search is exhaustive: tic-tac-toe is small enough to explore every
//! line to the end of the game, so no depth limit or heuristic evaluation is
//! involved. Values are always utilities from X's perspective; X maximizes and
//! O minimizes.
//!
//! Two cooperating functions do the work. [`analyze`] picks the action at the
//! root, and the alpha-beta value function scores each resulting board with
//! an explicit `(alpha, beta)` window passed by value down the recursion.
//! Nothing survives between calls apart from the [`SearchStats`] returned to
//! the caller.

use super::action::Action;
use super::rules::{actions, player, terminal, utility};
use super::transition::result;
use super::types::{Board, Player, Utility};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

/// Lower bound of the initial search window.
pub const NEG_INFINITY: Utility = Utility::MIN;
/// Upper bound of the initial search window.
pub const POS_INFINITY: Utility = Utility::MAX;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards scored by the value function.
    nodes: u64,
    /// Alpha or beta cutoffs taken.
    cutoffs: u64,
}

/// The action chosen for a board, with its value and search cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Analysis {
    /// Player to move on the analyzed board.
    player: Player,
    /// Chosen action.
    action: Action,
    /// Game-theoretic value of the board after `action`.
    value: Utility,
    /// Search counters.
    stats: SearchStats,
}

/// A single search run.
///
/// Holds only the counters for the run; the game tree itself lives on the
/// call stack.
#[derive(Debug, Default)]
pub struct Search {
    stats: SearchStats,
}

impl Search {
    /// Creates a search with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Chooses the best action for the player to move.
    ///
    /// Every child is scored with a fresh `(-inf, +inf)` window. The first
    /// action reaching the best value is kept; later ties do not replace it.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn analyze(&mut self, board: &Board) -> Option<Analysis> {
        if terminal(board) {
            debug!("Board is terminal, no action to choose");
            return None;
        }

        let current = player(board);
        let mut best: Option<(Action, Utility)> = None;

        for action in actions(board) {
            let Some(next) = successor(board, action) else {
                continue;
            };
            let value = self.value(&next, NEG_INFINITY, POS_INFINITY);
            trace!(%action, value, "Scored root action");

            let improves = match best {
                None => true,
                Some((_, best_value)) => match current {
                    Player::X => value > best_value,
                    Player::O => value < best_value,
                },
            };
            if improves {
                best = Some((action, value));
            }
        }

        let (action, value) = best?;
        debug!(
            player = %current,
            %action,
            value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );

        Some(Analysis {
            player: current,
            action,
            value,
            stats: self.stats,
        })
    }

    /// Alpha-beta value of `board` within the `(alpha, beta)` window.
    ///
    /// Returns the exact minimax value whenever it lies strictly inside the
    /// window; otherwise a bound on the same side of the window as the true
    /// value.
    #[instrument(level = "trace", skip(self, board))]
    pub fn value(&mut self, board: &Board, alpha: Utility, beta: Utility) -> Utility {
        self.stats.nodes += 1;

        if terminal(board) {
            return utility(board);
        }

        match player(board) {
            Player::X => {
                let mut best = NEG_INFINITY;
                for action in actions(board) {
                    let Some(next) = successor(board, action) else {
                        continue;
                    };
                    best = best.max(self.value(&next, alpha.max(best), beta));
                    if best >= beta {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                best
            }
            Player::O => {
                let mut best = POS_INFINITY;
                for action in actions(board) {
                    let Some(next) = successor(board, action) else {
                        continue;
                    };
                    best = best.min(self.value(&next, alpha, beta.min(best)));
                    if best <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                best
            }
        }
    }

    /// Plain minimax value of `board`, visiting every descendant.
    #[instrument(level = "trace", skip(self, board))]
    pub fn exhaustive_value(&mut self, board: &Board) -> Utility {
        self.stats.nodes += 1;

        if terminal(board) {
            return utility(board);
        }

        let values = actions(board)
            .into_iter()
            .filter_map(|action| successor(board, action))
            .map(|next| self.exhaustive_value(&next));

        let best = match player(board) {
            Player::X => values.max(),
            Player::O => values.min(),
        };
        best.unwrap_or_else(|| utility(board))
    }
}

/// Applies an action produced by [`actions`].
///
/// Generated actions are always legal; a rejection is logged and the branch
/// skipped.
fn successor(board: &Board, action: Action) -> Option<Board> {
    match result(board, action) {
        Ok(next) => Some(next),
        Err(err) => {
            warn!(%err, board = %board, "Generated action rejected");
            None
        }
    }
}

/// Returns the optimal action for the player to move, or `None` when the
/// board is terminal.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Option<Action> {
    Search::new().analyze(board).map(|analysis| analysis.action)
}

/// Like [`minimax`], but also reports the chosen action's value and the
/// search counters.
pub fn analyze(board: &Board) -> Option<Analysis> {
    Search::new().analyze(board)
}

/// Alpha-beta value of `board` within `(alpha, beta)`.
///
/// Call with [`NEG_INFINITY`] and [`POS_INFINITY`] for the exact value.
pub fn value(board: &Board, alpha: Utility, beta: Utility) -> Utility {
    Search::new().value(board, alpha, beta)
}

/// Minimax value of `board` computed without pruning.
pub fn exhaustive_value(board: &Board) -> Utility {
    Search::new().exhaustive_value(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, O_WINS, TIE, X_WINS};

    const X: Cell = Cell::Occupied(Player::X);
    const O: Cell = Cell::Occupied(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_terminal_board_has_no_action() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(minimax(&board), None);
        assert_eq!(analyze(&board), None);
    }

    #[test]
    fn test_value_of_terminal_board_is_utility() {
        let board = Board::from_rows([[X, X, O], [X, O, E], [O, E, E]]);
        assert_eq!(value(&board, NEG_INFINITY, POS_INFINITY), O_WINS);
        assert_eq!(exhaustive_value(&board), O_WINS);
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let analysis = analyze(&board).unwrap();
        assert_eq!(*analysis.player(), Player::X);
        assert_eq!(*analysis.action(), Action::new(0, 2));
        assert_eq!(*analysis.value(), X_WINS);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
        let analysis = analyze(&board).unwrap();
        assert_eq!(*analysis.player(), Player::O);
        assert_eq!(*analysis.action(), Action::new(1, 2));
        assert_eq!(*analysis.value(), O_WINS);
    }

    #[test]
    fn test_single_empty_cell() {
        let board = Board::from_rows([[O, X, X], [X, O, O], [X, O, E]]);
        assert_eq!(minimax(&board), Some(Action::new(2, 2)));
    }

    #[test]
    fn test_empty_board_value_is_tie() {
        assert_eq!(value(&Board::new(), NEG_INFINITY, POS_INFINITY), TIE);
    }

    #[test]
    fn test_stats_count_nodes() {
        let board = Board::from_rows([[O, X, X], [X, O, O], [X, O, E]]);
        let analysis = analyze(&board).unwrap();
        assert_eq!(*analysis.stats().nodes(), 1);
        assert_eq!(*analysis.stats().cutoffs(), 0);
    }

    #[test]
    fn test_narrow_window_cuts_off() {
        // X to move and can win at once; with beta at a tie, the first winning
        // child exceeds beta and the scan stops.
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        let mut search = Search::new();
        let bound = search.value(&board, NEG_INFINITY, TIE);
        assert!(bound >= TIE);
        assert!(*search.stats().cutoffs() > 0);
    }
}
