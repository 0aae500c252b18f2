//! Move suggestions.
//!
//! The `HintEngine` scans a board through `BoardView` and returns ranked
//! `Hint`s. It powers both the "show hint" request and auto-play.
//!
//! ## Example
//!
//! ```
//! use picture_gallery::board::{Board, BoardView};
//! use picture_gallery::core::{Card, GameConfig, Rank, Suit};
//! use picture_gallery::hint::HintEngine;
//!
//! let mut board = Board::new(&GameConfig::default());
//! let row = board.rows()[0];
//! board.arrange(row, &[Card::new(Rank::ACE, Suit::Spades)]);
//!
//! let hints = HintEngine::default().compute_hints(&board, 0);
//! assert_eq!(hints[0].target, Some(board.foundations()[0]));
//! ```

mod engine;
#[allow(clippy::module_inception)]
mod hint;

pub use engine::{shall_move_pile, HintEngine, DEAL_LEVEL};
pub use hint::{Hint, HintList};
