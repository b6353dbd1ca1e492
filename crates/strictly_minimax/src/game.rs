//! Playing whole games: outcomes, replay and engine self-play.

use super::action::{Action, InvalidAction};
use super::rules::{terminal, winner};
use super::search::minimax;
use super::transition::result;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the outcome of a terminal board, or `None` mid-game.
    pub fn of(board: &Board) -> Option<Self> {
        terminal(board).then(|| winner(board).map_or(Outcome::Draw, Outcome::Winner))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A game played to the end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the game started from.
    start: Board,
    /// Actions played, in order.
    actions: Vec<Action>,
    /// Final, terminal board.
    board: Board,
    /// How the game ended.
    outcome: Outcome,
}

/// Replays actions from the initial state.
///
/// Stops at the first action that cannot be applied. Moves after the game has
/// been won are still applied as long as the cell is free; the rules module
/// decides what such a board means.
#[instrument(skip(actions), fields(moves = actions.len()))]
pub fn replay(actions: &[Action]) -> Result<Board, InvalidAction> {
    actions
        .iter()
        .try_fold(Board::new(), |board, action| result(&board, *action))
}

/// Plays the engine against itself from `start` until the game ends.
#[instrument(skip(start), fields(start = %start))]
pub fn self_play(start: &Board) -> Result<GameRecord, InvalidAction> {
    let mut board = *start;
    let mut actions = Vec::new();

    while let Some(action) = minimax(&board) {
        board = result(&board, action)?;
        actions.push(action);
        debug!(%action, ply = actions.len(), "Engine moved");
    }

    let outcome = winner(&board).map_or(Outcome::Draw, Outcome::Winner);
    info!(%outcome, moves = actions.len(), "Self-play finished");

    Ok(GameRecord {
        start: *start,
        actions,
        board,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_outcome_mid_game_is_none() {
        assert_eq!(Outcome::of(&Board::new()), None);
    }

    #[test]
    fn test_outcome_of_finished_boards() {
        let x = Cell::Occupied(Player::X);
        let o = Cell::Occupied(Player::O);
        let won = Board::from_rows([[x, x, x], [o, o, Cell::Empty], [Cell::Empty; 3]]);
        let drawn = Board::from_rows([[o, x, x], [x, o, o], [x, o, x]]);

        assert_eq!(Outcome::of(&won), Some(Outcome::Winner(Player::X)));
        assert_eq!(Outcome::of(&drawn), Some(Outcome::Draw));
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Winner(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Winner(Player::O).to_string(), "Player O wins");
    }

    #[test]
    fn test_replay_alternates_players() {
        let board = replay(&[Action::new(1, 1), Action::new(0, 0), Action::new(2, 2)]).unwrap();
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.get(2, 2), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_replay_stops_on_invalid_action() {
        let err = replay(&[Action::new(1, 1), Action::new(1, 1)]).unwrap_err();
        assert_eq!(err, InvalidAction::Occupied { row: 1, col: 1 });
    }

    #[test]
    fn test_self_play_from_terminal_board() {
        let board = replay(&[
            Action::new(0, 0),
            Action::new(1, 0),
            Action::new(0, 1),
            Action::new(1, 1),
            Action::new(0, 2),
        ])
        .unwrap();
        let record = self_play(&board).unwrap();

        assert!(record.actions().is_empty());
        assert_eq!(record.outcome(), &Outcome::Winner(Player::X));
        assert_eq!(record.board(), &board);
    }
}
