//! Game registry for variant lookup.
//!
//! The `GameRegistry` stores the metadata of every playable variant and
//! builds games by id.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::picture_gallery::{PictureGallery, Variant};

/// Registration metadata for one variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Unique game id.
    pub id: u32,
    /// Display name.
    pub name: String,
    pub variant: Variant,
    /// Decks shuffled together.
    pub decks: usize,
    /// Times the talon may be turned over. Always 0 for this family.
    pub redeals: u8,
}

impl GameInfo {
    /// Create metadata for a variant.
    pub fn new(id: u32, variant: Variant) -> Self {
        Self {
            id,
            name: variant.name().to_string(),
            variant,
            decks: variant.decks(),
            redeals: 0,
        }
    }
}

/// Registry of playable variants.
///
/// ## Example
///
/// ```
/// use picture_gallery::games::GameRegistry;
///
/// let registry = GameRegistry::builtin();
/// let info = registry.get(900047).unwrap();
/// assert_eq!(info.decks, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameRegistry {
    games: FxHashMap<u32, GameInfo>,
}

impl GameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the four Picture Gallery variants.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(GameInfo::new(900040, Variant::Small));
        registry.register(GameInfo::new(900047, Variant::Standard));
        registry.register(GameInfo::new(900048, Variant::Big));
        registry.register(GameInfo::new(900049, Variant::Huge));
        registry
    }

    /// Register a game.
    ///
    /// Panics if a game with the same ID already exists.
    pub fn register(&mut self, info: GameInfo) {
        if self.games.contains_key(&info.id) {
            panic!("Game with ID {} already registered", info.id);
        }
        self.games.insert(info.id, info);
    }

    /// Get game metadata by ID.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&GameInfo> {
        self.games.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterate over all games, ordered by ID.
    pub fn iter(&self) -> impl Iterator<Item = &GameInfo> {
        let mut games: Vec<_> = self.games.values().collect();
        games.sort_by_key(|g| g.id);
        games.into_iter()
    }

    /// Build and deal the game registered under `id`.
    pub fn build(&self, id: u32, seed: u64) -> Result<PictureGallery> {
        let info = self
            .get(id)
            .with_context(|| format!("no game registered with id {}", id))?;
        PictureGallery::new(info.variant.config().with_seed(seed))
    }
}
