//! Sequence predicates over runs of cards.

use crate::core::Card;

use super::kind::SequenceRule;

/// Check that every card is `dir` ranks above the card below it.
#[must_use]
pub fn is_rank_sequence(cards: &[Card], dir: i8) -> bool {
    cards
        .windows(2)
        .all(|w| w[0].rank.step(dir) == Some(w[1].rank))
}

/// Check rank steps of `dir` with every card differing in suit from the one
/// below it.
#[must_use]
pub fn is_any_but_own_sequence(cards: &[Card], dir: i8) -> bool {
    cards
        .windows(2)
        .all(|w| w[0].rank.step(dir) == Some(w[1].rank) && w[0].suit != w[1].suit)
}

/// Apply a stack's sequence rule to a run of cards.
///
/// A single card is always a sequence, except under `SequenceRule::None`
/// where only runs of at most one card pass.
#[must_use]
pub fn is_sequence(rule: SequenceRule, cards: &[Card], dir: i8) -> bool {
    match rule {
        SequenceRule::Rank => is_rank_sequence(cards, dir),
        SequenceRule::AnyButOwn => is_any_but_own_sequence(cards, dir),
        SequenceRule::None => cards.len() <= 1,
    }
}
