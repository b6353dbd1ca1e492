//! Strictly Minimax - optimal tic-tac-toe play.
//!
//! Pure game logic with no I/O: a `Copy` board value, total rule queries, a
//! transition function that never mutates its input, and an exhaustive
//! minimax search with alpha-beta pruning.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Player`] and the rule queries
//!   [`player`], [`actions`], [`winner`], [`terminal`], [`utility`]
//! - **Transition**: [`result`] applies an [`Action`] or fails with
//!   [`InvalidAction`]
//! - **Search**: [`minimax`] picks the optimal action; [`analyze`] also
//!   reports its value and [`SearchStats`]
//! - **Games**: [`replay`] and [`self_play`] drive whole games
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, minimax, result, terminal};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! # Ok::<(), strictly_minimax::InvalidAction>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod notation;
mod rules;
mod search;
mod transition;
mod types;

pub use action::{Action, InvalidAction};
pub use game::{GameRecord, Outcome, replay, self_play};
pub use notation::ParseBoardError;
pub use rules::{actions, is_draw, player, terminal, utility, winner};
pub use search::{
    Analysis, NEG_INFINITY, POS_INFINITY, Search, SearchStats, analyze, exhaustive_value,
    minimax, value,
};
pub use transition::result;
pub use types::{Board, CELLS, Cell, O_WINS, Player, SIZE, TIE, Utility, X_WINS};

/// Returns the starting state of the board: every cell empty.
pub fn initial_state() -> Board {
    Board::new()
}
