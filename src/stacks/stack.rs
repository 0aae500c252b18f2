//! A single stack of cards and its acceptance and move rules.
//!
//! Acceptance is always evaluated against an explicit card slice, so the
//! same predicate answers both "would this stack take the pile?" and "would
//! this stack, holding these other cards, take the pile?". The latter is how
//! the hint engine probes hypothetical states without cloning stacks.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Rank};

use super::kind::{Capabilities, SequenceRule, StackId, StackKind};
use super::sequence::is_sequence;

/// Board-level facts an acceptance check may depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcceptContext {
    /// The talon has no cards left to deal.
    pub talon_empty: bool,
}

impl AcceptContext {
    #[must_use]
    pub const fn new(talon_empty: bool) -> Self {
        Self { talon_empty }
    }
}

/// A stack of cards, bottom card first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    id: StackId,
    kind: StackKind,
    caps: Capabilities,
    cards: Vec<Card>,
    /// Set once a complete foundation has been flipped over.
    closed: bool,
}

impl Stack {
    fn with_caps(id: StackId, kind: StackKind, caps: Capabilities) -> Self {
        Self {
            id,
            kind,
            caps,
            cards: Vec::new(),
            closed: false,
        }
    }

    /// Foundation collecting `capacity` Aces of any suit.
    #[must_use]
    pub fn foundation(id: StackId, capacity: usize) -> Self {
        Self::with_caps(
            id,
            StackKind::Foundation { capacity },
            Capabilities {
                base_rank: Some(Rank::ACE),
                dir: 0,
                rule: SequenceRule::Rank,
                max_accept: 1,
                max_move: 0,
                max_cards: capacity,
            },
        )
    }

    /// Tableau stack pinned to `base_rank`, building by `dir` any suit but own.
    #[must_use]
    pub fn tableau(id: StackId, base_rank: Rank, dir: i8, max_cards: usize) -> Self {
        Self::with_caps(
            id,
            StackKind::Tableau { base_rank },
            Capabilities {
                base_rank: Some(base_rank),
                dir,
                rule: SequenceRule::AnyButOwn,
                max_accept: 1,
                max_move: usize::MAX,
                max_cards,
            },
        )
    }

    /// Row stack building down any suit but own, one card accepted at a time.
    #[must_use]
    pub fn row(id: StackId) -> Self {
        Self::with_caps(
            id,
            StackKind::Row,
            Capabilities {
                base_rank: None,
                dir: -1,
                rule: SequenceRule::AnyButOwn,
                max_accept: 1,
                max_move: usize::MAX,
                max_cards: usize::MAX,
            },
        )
    }

    #[must_use]
    pub fn talon(id: StackId) -> Self {
        Self::with_caps(id, StackKind::Talon, Capabilities::inert())
    }

    /// Waste stack. Accepts nothing by hand, yields its top card.
    #[must_use]
    pub fn waste(id: StackId) -> Self {
        Self::with_caps(
            id,
            StackKind::Waste,
            Capabilities {
                max_move: 1,
                ..Capabilities::inert()
            },
        )
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> StackId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> StackKind {
        self.kind
    }

    #[must_use]
    pub fn caps(&self) -> &Capabilities {
        &self.caps
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Check if the stack holds as many cards as it can.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.caps.max_cards
    }

    // === Rules ===

    /// Generic acceptance shared by every kind: capacity, accept count,
    /// base rank of an empty stack and the sequence rule.
    fn basic_accepts(&self, cards: &[Card], pile: &[Card]) -> bool {
        if self.closed || pile.is_empty() || pile.len() > self.caps.max_accept {
            return false;
        }
        if cards.len() + pile.len() > self.caps.max_cards {
            return false;
        }
        let rule = self.caps.rule;
        let dir = self.caps.dir;
        match cards.last() {
            None => {
                if let Some(base) = self.caps.base_rank {
                    if pile[0].rank != base {
                        return false;
                    }
                }
            }
            Some(&top) => {
                if !is_sequence(rule, &[top, pile[0]], dir) {
                    return false;
                }
            }
        }
        is_sequence(rule, pile, dir)
    }

    /// Would this stack, holding `cards` instead of its own cards, accept
    /// `pile`?
    #[must_use]
    pub fn accepts_cards_with(&self, cards: &[Card], pile: &[Card], ctx: AcceptContext) -> bool {
        if !self.basic_accepts(cards, pile) {
            return false;
        }
        match self.kind {
            // A tableau started with the wrong rank takes nothing until emptied.
            StackKind::Tableau { base_rank } => cards.first().map_or(true, |c| c.rank == base_rank),
            StackKind::Row => cards.is_empty() && ctx.talon_empty,
            StackKind::Foundation { .. } | StackKind::Talon | StackKind::Waste => true,
        }
    }

    /// Would this stack accept `pile` on top of its current cards?
    #[must_use]
    pub fn accepts_cards(&self, pile: &[Card], ctx: AcceptContext) -> bool {
        self.accepts_cards_with(&self.cards, pile, ctx)
    }

    /// Can `pile` (the stack's top cards) be picked up as one unit?
    #[must_use]
    pub fn can_move_cards(&self, pile: &[Card]) -> bool {
        if self.closed || pile.is_empty() || pile.len() > self.caps.max_move {
            return false;
        }
        match self.caps.rule {
            SequenceRule::None => pile.len() == 1,
            rule => is_sequence(rule, pile, self.caps.dir),
        }
    }

    /// The longest top run that can move as one unit.
    ///
    /// Empty when the stack is empty or nothing on it may move.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        (0..self.cards.len())
            .map(|start| &self.cards[start..])
            .find(|run| self.can_move_cards(run))
            .unwrap_or(&[])
    }

    // === Mutation ===

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn extend_from_slice(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Remove and return the top `n` cards, bottom first.
    ///
    /// Panics if the stack holds fewer than `n` cards.
    pub(crate) fn take_top(&mut self, n: usize) -> Vec<Card> {
        assert!(n <= self.cards.len(), "Cannot take {} cards from {}", n, self.id);
        self.cards.split_off(self.cards.len() - n)
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    const OPEN: AcceptContext = AcceptContext::new(true);
    const DEALING: AcceptContext = AcceptContext::new(false);

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn stack_with(mut stack: Stack, cards: &[Card]) -> Stack {
        stack.extend_from_slice(cards);
        stack
    }

    #[test]
    fn test_foundation_accepts_only_aces() {
        let f = Stack::foundation(StackId::new(0), 4);
        assert!(f.accepts_cards(&[card(Rank::ACE, Suit::Clubs)], DEALING));
        assert!(!f.accepts_cards(&[card(Rank::TWO, Suit::Clubs)], DEALING));

        let f = stack_with(f, &[card(Rank::ACE, Suit::Clubs)]);
        assert!(f.accepts_cards(&[card(Rank::ACE, Suit::Clubs)], DEALING));
        assert!(!f.accepts_cards(&[card(Rank::KING, Suit::Hearts)], DEALING));
    }

    #[test]
    fn test_foundation_capacity() {
        let ace = card(Rank::ACE, Suit::Spades);
        let f = stack_with(Stack::foundation(StackId::new(0), 2), &[ace, ace]);
        assert!(f.is_full());
        assert!(!f.accepts_cards(&[ace], OPEN));
    }

    #[test]
    fn test_foundation_yields_nothing() {
        let f = stack_with(
            Stack::foundation(StackId::new(0), 4),
            &[card(Rank::ACE, Suit::Spades)],
        );
        assert!(f.pile().is_empty());
    }

    #[test]
    fn test_closed_stack_is_inert() {
        let mut t = Stack::tableau(StackId::new(1), Rank::FOUR, 3, 4);
        t.close();
        assert!(!t.accepts_cards(&[card(Rank::FOUR, Suit::Clubs)], OPEN));
    }

    #[test]
    fn test_tableau_empty_requires_base_rank() {
        let t = Stack::tableau(StackId::new(1), Rank::FOUR, 3, 4);
        assert!(t.accepts_cards(&[card(Rank::FOUR, Suit::Clubs)], DEALING));
        assert!(!t.accepts_cards(&[card(Rank::SEVEN, Suit::Clubs)], DEALING));
    }

    #[test]
    fn test_tableau_builds_any_but_own() {
        let t = stack_with(
            Stack::tableau(StackId::new(1), Rank::FOUR, 3, 4),
            &[card(Rank::FOUR, Suit::Clubs)],
        );
        assert!(t.accepts_cards(&[card(Rank::SEVEN, Suit::Hearts)], DEALING));
        assert!(!t.accepts_cards(&[card(Rank::SEVEN, Suit::Clubs)], DEALING));
        assert!(!t.accepts_cards(&[card(Rank::EIGHT, Suit::Hearts)], DEALING));
    }

    #[test]
    fn test_tableau_with_wrong_base_accepts_nothing() {
        // Dealt a 7 onto a 4-based stack: 10 would follow in sequence, but
        // the stack is not rooted on its base rank.
        let t = stack_with(
            Stack::tableau(StackId::new(1), Rank::FOUR, 3, 4),
            &[card(Rank::SEVEN, Suit::Clubs)],
        );
        assert!(!t.accepts_cards(&[card(Rank::TEN, Suit::Hearts)], OPEN));
    }

    #[test]
    fn test_tableau_accepts_one_card_at_a_time() {
        let t = Stack::tableau(StackId::new(1), Rank::FOUR, 3, 4);
        let pile = [card(Rank::FOUR, Suit::Clubs), card(Rank::SEVEN, Suit::Hearts)];
        assert!(!t.accepts_cards(&pile, OPEN));
    }

    #[test]
    fn test_tableau_capacity() {
        let t = stack_with(
            Stack::tableau(StackId::new(1), Rank::FOUR, 3, 4),
            &[
                card(Rank::FOUR, Suit::Clubs),
                card(Rank::SEVEN, Suit::Hearts),
                card(Rank::TEN, Suit::Clubs),
                card(Rank::KING, Suit::Hearts),
            ],
        );
        assert!(t.is_full());
        assert_eq!(t.pile().len(), 4);
    }

    #[test]
    fn test_row_needs_empty_row_and_talon() {
        let r = Stack::row(StackId::new(2));
        let nine = [card(Rank::NINE, Suit::Spades)];
        assert!(!r.accepts_cards(&nine, DEALING));
        assert!(r.accepts_cards(&nine, OPEN));

        let r = stack_with(r, &[card(Rank::TEN, Suit::Hearts)]);
        // In sequence, but rows never build once started
        assert!(!r.accepts_cards(&nine, OPEN));
    }

    #[test]
    fn test_accepts_cards_with_probe() {
        let t = stack_with(
            Stack::tableau(StackId::new(1), Rank::FOUR, 3, 4),
            &[card(Rank::FOUR, Suit::Clubs), card(Rank::SEVEN, Suit::Hearts)],
        );
        let top = [card(Rank::SEVEN, Suit::Hearts)];
        // Without its top card the stack would take the seven back
        assert!(t.accepts_cards_with(&t.cards()[..1], &top, OPEN));
        // With it, the seven does not follow itself
        assert!(!t.accepts_cards(&top, OPEN));
    }

    #[test]
    fn test_pile_is_longest_movable_run() {
        let r = stack_with(
            Stack::row(StackId::new(2)),
            &[
                card(Rank::TWO, Suit::Clubs),
                card(Rank::JACK, Suit::Hearts),
                card(Rank::TEN, Suit::Clubs),
                card(Rank::NINE, Suit::Diamonds),
            ],
        );
        assert_eq!(r.pile().len(), 3);
        assert_eq!(r.pile()[0].rank, Rank::JACK);
    }

    #[test]
    fn test_pile_single_card_when_no_run() {
        let r = stack_with(
            Stack::row(StackId::new(2)),
            &[card(Rank::TWO, Suit::Clubs), card(Rank::NINE, Suit::Diamonds)],
        );
        assert_eq!(r.pile(), &[card(Rank::NINE, Suit::Diamonds)]);
        assert!(Stack::row(StackId::new(3)).pile().is_empty());
    }

    #[test]
    fn test_talon_and_waste() {
        let talon = stack_with(
            Stack::talon(StackId::new(4)),
            &[card(Rank::ACE, Suit::Clubs)],
        );
        assert!(talon.pile().is_empty());
        assert!(!talon.accepts_cards(&[card(Rank::ACE, Suit::Hearts)], OPEN));

        let waste = stack_with(
            Stack::waste(StackId::new(5)),
            &[card(Rank::TWO, Suit::Clubs), card(Rank::ACE, Suit::Clubs)],
        );
        assert_eq!(waste.pile(), &[card(Rank::ACE, Suit::Clubs)]);
        assert!(!waste.accepts_cards(&[card(Rank::ACE, Suit::Hearts)], OPEN));
    }

    #[test]
    fn test_take_top() {
        let mut r = stack_with(
            Stack::row(StackId::new(2)),
            &[card(Rank::TWO, Suit::Clubs), card(Rank::NINE, Suit::Diamonds)],
        );
        let taken = r.take_top(1);
        assert_eq!(taken, vec![card(Rank::NINE, Suit::Diamonds)]);
        assert_eq!(r.len(), 1);
    }
}
