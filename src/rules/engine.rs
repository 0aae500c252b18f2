//! Rules trait for solitaire game implementations.
//!
//! Games implement `SolitaireRules` to define their rules:
//! - How moves and deals change the board
//! - When the game is won
//! - Which cards to highlight as a match

use anyhow::Result;
use log::debug;

use crate::board::{legal_moves, Board, BoardView, Move};
use crate::core::{Card, GameConfig};
use crate::hint::{Hint, HintEngine, HintList};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Every card is home.
    Won,
    /// No card move is legal and the talon is exhausted.
    NoMovesLeft,
}

/// Rules trait.
///
/// ## Implementation Notes
///
/// - `apply_move`: must leave the board untouched when it returns an error
/// - `deal`: returns the number of cards dealt
/// - `is_won`: checked before `NoMovesLeft` in `is_terminal`
pub trait SolitaireRules {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Get the current board.
    fn board(&self) -> &Board;

    /// Move cards between stacks, applying the game's side effects.
    fn apply_move(&mut self, mv: &Move) -> Result<()>;

    /// Deal from the talon.
    fn deal(&mut self) -> Result<usize>;

    /// Check if the game is won.
    fn is_won(&self) -> bool;

    /// Should `a` and `b` be highlighted as a matching pair?
    fn shall_highlight_match(&self, a: Card, b: Card) -> bool;

    // === Convenience Methods ===

    /// Ranked hints for the current board.
    fn hints(&self, level: u8) -> HintList {
        HintEngine::new(self.config().scores).compute_hints(self.board(), level)
    }

    /// Enumerate all legal card moves.
    fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self.board())
    }

    /// Check if the talon can still deal.
    fn can_deal(&self) -> bool {
        self.board().can_deal_cards()
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult> {
        if self.is_won() {
            Some(GameResult::Won)
        } else if !self.can_deal() && self.legal_moves().is_empty() {
            Some(GameResult::NoMovesLeft)
        } else {
            None
        }
    }

    /// Carry out a hint: move its cards, or deal for a deal hint.
    fn apply_hint(&mut self, hint: &Hint) -> Result<()> {
        match hint.as_move() {
            Some(mv) => self.apply_move(&mv),
            None => self.deal().map(|_| ()),
        }
    }

    /// Apply the best hint repeatedly.
    ///
    /// Stops when the game is won, no hint remains, or after `max_steps`.
    /// Returns the number of hints applied.
    fn auto_play(&mut self, level: u8, max_steps: usize) -> Result<usize> {
        let mut steps = 0;
        while steps < max_steps && !self.is_won() {
            let Some(hint) = self.hints(level).first().copied() else {
                break;
            };
            self.apply_hint(&hint)?;
            steps += 1;
        }
        debug!("auto-play applied {} hints", steps);
        Ok(steps)
    }
}
