//! Rules trait for game implementations.
//!
//! Games implement `SolitaireRules` to define:
//! - How moves and deals modify the board
//! - Win conditions
//! - Highlight matching
//!
//! Hints, legal-move enumeration, terminal detection and auto-play come
//! for free on top of those.

pub mod engine;

pub use engine::{GameResult, SolitaireRules};
