//! Playing cards: rank, suit and the immutable `Card` value.
//!
//! Ranks are 1-based (`Rank::ACE` = 1, `Rank::KING` = 13). Cards carry no
//! face-up flag; visibility is a property of the stack holding them.

use serde::{Deserialize, Serialize};

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const THREE: Rank = Rank(3);
    pub const FOUR: Rank = Rank(4);
    pub const FIVE: Rank = Rank(5);
    pub const SIX: Rank = Rank(6);
    pub const SEVEN: Rank = Rank(7);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank from its 1-based value.
    ///
    /// Panics if `value` is outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        assert!(value >= 1 && value <= 13, "Rank must be in 1..=13");
        Self(value)
    }

    /// Get the 1-based rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the 0-based rank index (Ace = 0).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - 1
    }

    /// Step the rank by `dir`, returning `None` past Ace or King.
    #[must_use]
    pub fn step(self, dir: i8) -> Option<Rank> {
        let next = i16::from(self.0) + i16::from(dir);
        if (1..=13).contains(&next) {
            Some(Rank(next as u8))
        } else {
            None
        }
    }

    /// Iterate over all thirteen ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        }
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Check if this card is an Ace.
    #[must_use]
    pub fn is_ace(self) -> bool {
        self.rank == Rank::ACE
    }

    /// Build `decks` full 52-card packs, unshuffled.
    ///
    /// Cards are ordered deck by deck, suit by suit, Ace to King.
    #[must_use]
    pub fn full_decks(decks: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks * 52);
        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::all() {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::ACE.value(), 1);
        assert_eq!(Rank::ACE.index(), 0);
        assert_eq!(Rank::KING.value(), 13);
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    fn test_rank_step() {
        assert_eq!(Rank::FOUR.step(3), Some(Rank::SEVEN));
        assert_eq!(Rank::TEN.step(3), Some(Rank::KING));
        assert_eq!(Rank::KING.step(3), None);
        assert_eq!(Rank::ACE.step(-1), None);
        assert_eq!(Rank::ACE.step(0), Some(Rank::ACE));
    }

    #[test]
    #[should_panic(expected = "Rank must be in 1..=13")]
    fn test_rank_out_of_range() {
        let _ = Rank::new(14);
    }

    #[test]
    fn test_full_decks() {
        let cards = Card::full_decks(2);
        assert_eq!(cards.len(), 104);
        assert_eq!(cards.iter().filter(|c| c.is_ace()).count(), 8);
        assert_eq!(cards[0], Card::new(Rank::ACE, Suit::Clubs));
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::QUEEN, Suit::Hearts).to_string(), "QH");
        assert_eq!(Card::new(Rank::TEN, Suit::Spades).to_string(), "10S");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Rank::SEVEN, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
