//! Core types: cards, RNG, configuration.
//!
//! These are the building blocks every other module depends on. They know
//! nothing about stacks or hints.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{Card, Rank, Suit};
pub use config::{GameConfig, HintScores};
pub use rng::GameRng;
