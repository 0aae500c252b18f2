//! Game configuration types.
//!
//! A Picture Gallery deal is fully described by a `GameConfig`:
//! - how many decks are shuffled together
//! - how many row stacks sit below the gallery
//! - which base ranks the tableau rows are pinned to
//! - the seed used to shuffle the talon
//! - the hint scores used to rank suggestions
//!
//! Variant presets (Small, Standard, Big, Huge) live in
//! `games::picture_gallery` and produce configs through the builder below.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::card::Rank;

/// Score constants used by the hint engine.
///
/// Each pass has its own band; within a band lower ranks score higher by
/// `rank_weight` per rank step below King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintScores {
    /// Base score for dropping an Ace on the foundation.
    pub drop: i32,
    /// Base score for moving a single card onto a tableau.
    pub to_tableau: i32,
    /// Base score for moving a single tableau card onto a row.
    pub to_row: i32,
    /// Base score for relocating a card between rows.
    pub row_to_row: i32,
    /// Score of the talon-deal pseudo-move.
    pub deal: i32,
    /// Multiplier applied to `K - rank`.
    pub rank_weight: i32,
}

impl Default for HintScores {
    fn default() -> Self {
        Self {
            drop: 90_000,
            to_tableau: 80_000,
            to_row: 70_000,
            row_to_row: 60_000,
            deal: 1_000,
            rank_weight: 100,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of 52-card decks shuffled together.
    pub decks: usize,

    /// Number of row stacks below the tableau.
    pub row_stacks: usize,

    /// Base rank of each tableau row, top row first.
    ///
    /// Every row holds `4 * decks` tableau stacks.
    pub tableau_base_ranks: Vec<Rank>,

    /// Rank step between consecutive tableau cards.
    pub tableau_dir: i8,

    /// Capacity of a single tableau stack.
    pub tableau_max_cards: usize,

    /// Create a waste stack next to the talon.
    pub waste: bool,

    /// Shuffle seed.
    pub seed: u64,

    /// Hint score constants.
    pub scores: HintScores,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            decks: 2,
            row_stacks: 8,
            tableau_base_ranks: vec![Rank::FOUR, Rank::THREE, Rank::TWO],
            tableau_dir: 3,
            tableau_max_cards: 4,
            waste: false,
            seed: 42,
            scores: HintScores::default(),
        }
    }
}

impl GameConfig {
    /// Create the standard two-deck configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decks.
    #[must_use]
    pub fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Set the number of row stacks.
    #[must_use]
    pub fn with_row_stacks(mut self, rows: usize) -> Self {
        self.row_stacks = rows;
        self
    }

    /// Add a waste stack.
    #[must_use]
    pub fn with_waste(mut self) -> Self {
        self.waste = true;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the hint scores.
    #[must_use]
    pub fn with_scores(mut self, scores: HintScores) -> Self {
        self.scores = scores;
        self
    }

    /// Tableau stacks per tableau row (and foundation capacity).
    #[must_use]
    pub fn tableau_columns(&self) -> usize {
        4 * self.decks
    }

    /// Total number of tableau stacks.
    #[must_use]
    pub fn tableau_count(&self) -> usize {
        self.tableau_columns() * self.tableau_base_ranks.len()
    }

    /// Number of cards the foundation holds when complete.
    #[must_use]
    pub fn foundation_capacity(&self) -> usize {
        4 * self.decks
    }

    /// Total cards in play.
    #[must_use]
    pub fn card_count(&self) -> usize {
        52 * self.decks
    }

    /// Check that the configuration describes a dealable game.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.decks > 0, "at least one deck is required");
        ensure!(self.row_stacks > 0, "at least one row stack is required");
        ensure!(
            !self.tableau_base_ranks.is_empty(),
            "at least one tableau row is required"
        );
        ensure!(
            self.tableau_base_ranks.iter().all(|&r| r != Rank::ACE),
            "tableau rows cannot be based on Aces"
        );
        ensure!(self.tableau_max_cards > 0, "tableau capacity must be positive");
        ensure!(
            self.tableau_count() + self.row_stacks <= self.card_count(),
            "{} decks cannot fill {} tableau stacks and {} rows",
            self.decks,
            self.tableau_count(),
            self.row_stacks
        );
        Ok(())
    }
}
