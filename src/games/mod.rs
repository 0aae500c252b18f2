//! Game implementations and their registry.

pub mod picture_gallery;
pub mod registry;

pub use registry::{GameInfo, GameRegistry};
