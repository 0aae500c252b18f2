//! Card moves and legal-move enumeration.

use serde::{Deserialize, Serialize};

use crate::stacks::StackId;

use super::view::BoardView;

/// Move the top `ncards` cards of `source` onto `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: StackId,
    pub target: StackId,
    pub ncards: usize,
}

impl Move {
    #[must_use]
    pub const fn new(source: StackId, target: StackId, ncards: usize) -> Self {
        Self {
            source,
            target,
            ncards,
        }
    }

    /// Move of a single card.
    #[must_use]
    pub const fn single(source: StackId, target: StackId) -> Self {
        Self::new(source, target, 1)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x{} -> {}", self.source, self.ncards, self.target)
    }
}

/// Check whether `mv` is legal on `board`.
///
/// The top `ncards` of the source must be movable as a unit and the target
/// must accept them.
pub fn is_legal_move<B: BoardView + ?Sized>(board: &B, mv: &Move) -> bool {
    if mv.source == mv.target || mv.ncards == 0 {
        return false;
    }
    let source = board.stack(mv.source);
    if mv.ncards > source.len() {
        return false;
    }
    let cards = &source.cards()[source.len() - mv.ncards..];
    source.can_move_cards(cards) && board.accepts_cards(mv.target, Some(mv.source), cards)
}

/// Enumerate every legal card move, in dropstack then openstack order.
///
/// Dealing from the talon is not a card move and is not included.
pub fn legal_moves<B: BoardView + ?Sized>(board: &B) -> Vec<Move> {
    let mut moves = Vec::new();

    for &source in board.dropstacks() {
        let pile = board.get_pile(source);
        for ncards in 1..=pile.len() {
            let cards = &pile[pile.len() - ncards..];
            for &target in board.openstacks() {
                if board.accepts_cards(target, Some(source), cards) {
                    moves.push(Move::new(source, target, ncards));
                }
            }
        }
    }

    moves
}
