//! Picture Gallery By Any But Own.
//!
//! A gallery of tableau stacks in three rows, pinned to base ranks 4, 3
//! and 2, builds up by threes in any suit but the card's own (4-7-10-K,
//! 3-6-9-Q, 2-5-8-J). Aces go to a single foundation. Row stacks below the
//! gallery are refilled from the talon; once the talon is exhausted an
//! empty row takes any single card.
//!
//! The game is won when the foundation holds every Ace and every tableau
//! stack holds four cards.

mod game;
mod variant;

pub use game::{PictureGallery, PictureGalleryBuilder};
pub use variant::Variant;
