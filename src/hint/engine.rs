//! Hint engine: ranked move suggestions for a board.
//!
//! ## Passes
//!
//! Four move passes run in order, each only when every earlier pass came up
//! empty:
//!
//! 1. Drop an Ace on the foundation
//! 2. Move a single top card onto a tableau
//! 3. Move a single top tableau card onto a row
//! 4. Move a single card from one row to another
//!
//! A deal pass runs independently of the four: at `level >= 2` a deal hint
//! is appended whenever the talon can still deal.
//!
//! Within a band lower ranks score higher, and tableau sources with a lower
//! base rank get a small bonus.

use log::{debug, trace};

use crate::board::BoardView;
use crate::core::{Card, HintScores, Rank};
use crate::stacks::StackId;

use super::hint::{Hint, HintList};

/// Highest rank in play.
const K: Rank = Rank::KING;

/// Hint level from which the engine may suggest dealing.
pub const DEAL_LEVEL: u8 = 2;

/// Computes ranked hints from a board.
///
/// Stateless across calls; the board is only read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HintEngine {
    scores: HintScores,
}

impl HintEngine {
    #[must_use]
    pub fn new(scores: HintScores) -> Self {
        Self { scores }
    }

    #[must_use]
    pub fn scores(&self) -> &HintScores {
        &self.scores
    }

    /// Compute hints for `board`, best first.
    ///
    /// Equal scores keep their discovery order.
    pub fn compute_hints<B: BoardView + ?Sized>(&self, board: &B, level: u8) -> HintList {
        let mut hints = HintList::new();

        self.drop_to_foundation(board, &mut hints);
        if hints.is_empty() {
            self.single_card_to_tableau(board, &mut hints);
        }
        if hints.is_empty() {
            self.tableau_card_to_row(board, &mut hints);
        }
        if hints.is_empty() {
            self.row_to_row(board, &mut hints);
        }
        if level >= DEAL_LEVEL && board.can_deal_cards() {
            trace!("deal hint from {}", board.talon());
            hints.push(Hint::deal(self.scores.deal, board.talon()));
        }

        hints.sort_by(|a, b| b.score.cmp(&a.score));
        debug!("computed {} hints at level {}", hints.len(), level);
        hints
    }

    /// The single best hint, if any.
    pub fn best_hint<B: BoardView + ?Sized>(&self, board: &B, level: u8) -> Option<Hint> {
        self.compute_hints(board, level).first().copied()
    }

    fn rank_score(&self, rank: Rank) -> i32 {
        self.scores.rank_weight * (i32::from(K.value()) - i32::from(rank.value()))
    }

    /// Pass 1: Aces onto the foundation.
    fn drop_to_foundation<B: BoardView + ?Sized>(&self, board: &B, hints: &mut HintList) {
        for &r in board.dropstacks() {
            let Some((t, 1)) = board.can_drop_cards(r, board.foundations()) else {
                continue;
            };
            let Some(card) = board.stack(r).top() else {
                continue;
            };
            debug_assert!(t != r, "{} dropped onto itself", r);
            debug_assert!(card.is_ace(), "only Aces reach the foundation, got {}", card);

            let score = self.scores.drop + tableau_bonus(board, r) + self.rank_score(card.rank);
            trace!("pass 1: {} {} -> {} ({})", card, r, t, score);
            hints.push(Hint::card_move(score, r, t, 1));
        }
    }

    /// Pass 2: a lone movable card onto the first tableau that takes it.
    fn single_card_to_tableau<B: BoardView + ?Sized>(&self, board: &B, hints: &mut HintList) {
        for &r in board.dropstacks() {
            let pile = board.get_pile(r);
            if pile.len() != 1 {
                continue;
            }
            let bonus = if board.stack(r).kind().is_tableau() {
                if is_seated(board, r, pile) {
                    continue;
                }
                tableau_bonus(board, r)
            } else {
                0
            };

            if let Some(t) = first_accepting(board, board.tableaux(), r, pile) {
                let score = self.scores.to_tableau + bonus + self.rank_score(pile[0].rank);
                trace!("pass 2: {} {} -> {} ({})", pile[0], r, t, score);
                hints.push(Hint::card_move(score, r, t, 1));
            }
        }
    }

    /// Pass 3: a lone tableau card onto the first row that takes it.
    fn tableau_card_to_row<B: BoardView + ?Sized>(&self, board: &B, hints: &mut HintList) {
        for &r in board.tableaux() {
            let pile = board.get_pile(r);
            if pile.len() != 1 || is_seated(board, r, pile) {
                continue;
            }

            if let Some(t) = first_accepting(board, board.rows(), r, pile) {
                let score = self.scores.to_row + self.rank_score(pile[0].rank);
                trace!("pass 3: {} {} -> {} ({})", pile[0], r, t, score);
                hints.push(Hint::card_move(score, r, t, 1));
            }
        }
    }

    /// Pass 4: a lone card that is not the whole row, onto another row.
    fn row_to_row<B: BoardView + ?Sized>(&self, board: &B, hints: &mut HintList) {
        for &r in board.rows() {
            let pile = board.get_pile(r);
            let cards = board.stack(r).cards();
            if pile.len() != 1 || pile.len() == cards.len() {
                continue;
            }
            let remaining = &cards[..cards.len() - pile.len()];

            let target = board
                .rows()
                .iter()
                .copied()
                .find(|&t| shall_move_pile(board, r, t, pile, remaining));
            if let Some(t) = target {
                let score = self.scores.row_to_row + self.rank_score(pile[0].rank);
                trace!("pass 4: {} {} -> {} ({})", pile[0], r, t, score);
                hints.push(Hint::card_move(score, r, t, pile.len()));
            }
        }
    }
}

/// Is moving `pile` from `source` to `target` worthwhile?
///
/// The target must accept the pile, and the source left holding
/// `remaining` must not accept it straight back, which would let the two
/// moves undo each other forever.
pub fn shall_move_pile<B: BoardView + ?Sized>(
    board: &B,
    source: StackId,
    target: StackId,
    pile: &[Card],
    remaining: &[Card],
) -> bool {
    if source == target || !board.accepts_cards(target, Some(source), pile) {
        return false;
    }
    !board.accepts_cards_with(source, remaining, Some(target), pile)
}

/// Would the stack re-accept its own top card? Then the card already sits
/// where it belongs and moving it gains nothing.
fn is_seated<B: BoardView + ?Sized>(board: &B, id: StackId, pile: &[Card]) -> bool {
    let cards = board.stack(id).cards();
    board.accepts_cards_with(id, &cards[..cards.len() - pile.len()], None, pile)
}

/// Source bonus favouring tableaux with lower base ranks.
fn tableau_bonus<B: BoardView + ?Sized>(board: &B, id: StackId) -> i32 {
    board
        .stack(id)
        .kind()
        .base_rank()
        .map_or(0, |base| 4 - i32::from(base.index()))
}

fn first_accepting<B: BoardView + ?Sized>(
    board: &B,
    targets: &[StackId],
    source: StackId,
    pile: &[Card],
) -> Option<StackId> {
    targets
        .iter()
        .copied()
        .find(|&t| t != source && board.accepts_cards(t, Some(source), pile))
}
