//! Board model and query interface.
//!
//! - `Board`: all stacks of a game with their named groups
//! - `BoardView`: the read-only interface the hint engine consumes
//! - `Move`: a card move, with legality checks and enumeration

#[allow(clippy::module_inception)]
mod board;
mod moves;
mod view;

pub use board::Board;
pub use moves::{is_legal_move, legal_moves, Move};
pub use view::BoardView;
