//! # picture-gallery
//!
//! Rules, board model and hint engine for the "Picture Gallery By Any But
//! Own" solitaire family.
//!
//! ## Design Principles
//!
//! 1. **Read-Only Hinting**: The hint engine is a pure function of the
//!    board. It never mutates stacks and keeps no state between calls.
//!
//! 2. **Explicit Board Access**: Stack groups reach the hint engine through
//!    the `BoardView` trait, not through shared game state.
//!
//! 3. **Tagged Stack Kinds**: Foundation, Tableau, Row, Talon and Waste are
//!    one enum; acceptance is a `match`, not a class hierarchy.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, configuration
//! - `stacks`: Stack kinds, acceptance and pile extraction
//! - `board`: The board, its query interface and card moves
//! - `hint`: The ranked move-suggestion engine
//! - `rules`: `SolitaireRules` trait for game implementations
//! - `games`: Picture Gallery and its variant registry
//!
//! ## Example
//!
//! ```
//! use picture_gallery::games::picture_gallery::{PictureGalleryBuilder, Variant};
//! use picture_gallery::rules::SolitaireRules;
//!
//! let mut game = PictureGalleryBuilder::new()
//!     .variant(Variant::Small)
//!     .build(42)
//!     .unwrap();
//!
//! for hint in game.hints(2) {
//!     assert!(hint.score > 0);
//! }
//! game.auto_play(2, 100).unwrap();
//! assert_eq!(game.board().card_count(), 52);
//! ```

pub mod board;
pub mod core;
pub mod games;
pub mod hint;
pub mod rules;
pub mod stacks;

// Re-export commonly used types
pub use crate::core::{Card, GameConfig, GameRng, HintScores, Rank, Suit};

pub use crate::stacks::{AcceptContext, Capabilities, SequenceRule, Stack, StackId, StackKind};

pub use crate::board::{is_legal_move, legal_moves, Board, BoardView, Move};

pub use crate::hint::{shall_move_pile, Hint, HintEngine, HintList};

pub use crate::rules::{GameResult, SolitaireRules};

pub use crate::games::picture_gallery::{PictureGallery, PictureGalleryBuilder, Variant};
pub use crate::games::{GameInfo, GameRegistry};
