//! Stack identity, kinds and capabilities.
//!
//! Every stack on the board has a `StackId` (its index in the board) and a
//! `StackKind`. Kinds carry their game-specific parameters in the variant
//! payload; the generic limits shared by all kinds live in `Capabilities`.

use serde::{Deserialize, Serialize};

use crate::core::Rank;

/// Stack identifier. Index into the board's stack list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StackId(pub u16);

impl StackId {
    /// Create a new stack ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into the board's stack list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack({})", self.0)
    }
}

/// What a stack is, with the parameters that only that kind needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackKind {
    /// Goal stack. Collects Aces only.
    Foundation {
        /// Cards held when complete (`4 * decks`).
        capacity: usize,
    },
    /// Gallery stack pinned to the rank of its bottom card.
    Tableau {
        /// The only rank this stack may be started with.
        base_rank: Rank,
    },
    /// Reserve stack below the gallery, refilled from the talon.
    Row,
    /// Face-down draw pile.
    Talon,
    /// Optional face-up discard next to the talon.
    Waste,
}

impl StackKind {
    #[must_use]
    pub fn is_foundation(self) -> bool {
        matches!(self, StackKind::Foundation { .. })
    }

    #[must_use]
    pub fn is_tableau(self) -> bool {
        matches!(self, StackKind::Tableau { .. })
    }

    #[must_use]
    pub fn is_row(self) -> bool {
        matches!(self, StackKind::Row)
    }

    /// Base rank of a tableau stack, `None` for every other kind.
    #[must_use]
    pub fn base_rank(self) -> Option<Rank> {
        match self {
            StackKind::Tableau { base_rank } => Some(base_rank),
            _ => None,
        }
    }
}

/// How consecutive cards on a stack must relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceRule {
    /// Rank steps by `dir`; suits are ignored.
    Rank,
    /// Rank steps by `dir` and each card differs in suit from the one below.
    AnyButOwn,
    /// No sequence can be built.
    None,
}

/// Generic limits shared by every stack kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Rank an empty stack requires. `None` accepts any rank.
    pub base_rank: Option<Rank>,
    /// Rank step between consecutive cards.
    pub dir: i8,
    /// Sequence rule for building and moving.
    pub rule: SequenceRule,
    /// Most cards accepted in one move (0 = accepts nothing).
    pub max_accept: usize,
    /// Most cards moved away in one move (0 = nothing moves).
    pub max_move: usize,
    /// Stack capacity.
    pub max_cards: usize,
}

impl Capabilities {
    /// Capabilities of a stack that neither accepts nor yields cards.
    #[must_use]
    pub const fn inert() -> Self {
        Self {
            base_rank: None,
            dir: 0,
            rule: SequenceRule::None,
            max_accept: 0,
            max_move: 0,
            max_cards: usize::MAX,
        }
    }
}
