//! Game rules for tic-tac-toe.
//!
//! Pure, total query functions over a [`Board`](crate::Board). The search
//! engine is built entirely on top of these.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, terminal};
pub use turn::{actions, player};
pub use win::{utility, winner};
