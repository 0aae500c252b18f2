//! Size variants of Picture Gallery.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Picture Gallery size variant.
///
/// Each extra deck adds four tableau columns and four row stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// One deck, four rows.
    Small,
    /// Two decks, eight rows.
    Standard,
    /// Three decks, twelve rows.
    Big,
    /// Four decks, sixteen rows.
    Huge,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Small, Variant::Standard, Variant::Big, Variant::Huge];

    #[must_use]
    pub const fn decks(self) -> usize {
        match self {
            Variant::Small => 1,
            Variant::Standard => 2,
            Variant::Big => 3,
            Variant::Huge => 4,
        }
    }

    #[must_use]
    pub const fn row_stacks(self) -> usize {
        match self {
            Variant::Small => 4,
            Variant::Standard => 8,
            Variant::Big => 12,
            Variant::Huge => 16,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Small => "Small Picture Gallery By Any But Own",
            Variant::Standard => "Picture Gallery By Any But Own",
            Variant::Big => "Big Picture Gallery By Any But Own",
            Variant::Huge => "Huge Picture Gallery By Any But Own",
        }
    }

    /// Configuration for this variant with the default seed.
    #[must_use]
    pub fn config(self) -> GameConfig {
        GameConfig::default()
            .with_decks(self.decks())
            .with_row_stacks(self.row_stacks())
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
