//! Stacks: the card containers on a Picture Gallery board.
//!
//! - `StackKind`: Foundation, Tableau, Row, Talon, Waste (tagged variant)
//! - `Capabilities`: generic limits (base rank, direction, accept/move counts)
//! - `Stack`: cards plus kind, with acceptance and pile extraction
//! - `sequence`: the rank and "any but own" sequence predicates

pub mod kind;
pub mod sequence;
pub mod stack;

pub use kind::{Capabilities, SequenceRule, StackId, StackKind};
pub use sequence::{is_any_but_own_sequence, is_rank_sequence, is_sequence};
pub use stack::{AcceptContext, Stack};
