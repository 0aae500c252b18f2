//! Hint values produced by the hint engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Move;
use crate::stacks::StackId;

/// A suggested move.
///
/// Higher scores are better. `forced` is true for real card moves and false
/// for the talon-deal pseudo-move, which has no target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub score: i32,
    pub forced: bool,
    pub source: StackId,
    pub target: Option<StackId>,
    /// Cards moved (0 for a deal).
    pub ncards: usize,
}

impl Hint {
    /// Hint moving `ncards` from `source` to `target`.
    #[must_use]
    pub const fn card_move(score: i32, source: StackId, target: StackId, ncards: usize) -> Self {
        Self {
            score,
            forced: true,
            source,
            target: Some(target),
            ncards,
        }
    }

    /// Hint to deal from `talon`.
    #[must_use]
    pub const fn deal(score: i32, talon: StackId) -> Self {
        Self {
            score,
            forced: false,
            source: talon,
            target: None,
            ncards: 0,
        }
    }

    #[must_use]
    pub fn is_deal(&self) -> bool {
        self.target.is_none()
    }

    /// The card move this hint suggests, `None` for a deal.
    #[must_use]
    pub fn as_move(&self) -> Option<Move> {
        self.target
            .map(|target| Move::new(self.source, target, self.ncards))
    }
}

/// Hints of one request. Passes rarely yield more than a handful.
pub type HintList = SmallVec<[Hint; 8]>;
