//! Read-only board query interface.
//!
//! The hint engine and move enumeration only ever see a board through
//! `BoardView`. Implementors supply the stack groups and the talon; the
//! pile, drop and acceptance queries are derived from those.

use crate::core::Card;
use crate::stacks::{AcceptContext, Stack, StackId};

/// Board query interface.
///
/// ## Implementation Notes
///
/// - Group slices must be in layout order; hint target selection is
///   first-fit over that order.
/// - `stack` must return the stack for every id that appears in a group.
pub trait BoardView {
    /// Get a stack by ID.
    fn stack(&self, id: StackId) -> &Stack;

    fn foundations(&self) -> &[StackId];

    fn tableaux(&self) -> &[StackId];

    fn rows(&self) -> &[StackId];

    fn talon(&self) -> StackId;

    /// Stacks cards may be picked up from.
    fn dropstacks(&self) -> &[StackId];

    /// Stacks cards may be dropped on.
    fn openstacks(&self) -> &[StackId];

    // === Derived Queries ===

    /// Check if the talon still has cards to deal.
    fn can_deal_cards(&self) -> bool {
        !self.stack(self.talon()).is_empty()
    }

    /// Board facts that acceptance rules depend on.
    fn accept_context(&self) -> AcceptContext {
        AcceptContext::new(self.stack(self.talon()).is_empty())
    }

    /// The movable top run of a stack (empty if nothing can move).
    fn get_pile(&self, id: StackId) -> &[Card] {
        self.stack(id).pile()
    }

    /// Would `target` accept `pile` coming from `source`?
    fn accepts_cards(&self, target: StackId, source: Option<StackId>, pile: &[Card]) -> bool {
        if source == Some(target) {
            return false;
        }
        self.stack(target).accepts_cards(pile, self.accept_context())
    }

    /// Would `target`, holding `cards` instead of its own, accept `pile`?
    ///
    /// Pure probe of a hypothetical state; nothing is cloned or mutated.
    fn accepts_cards_with(
        &self,
        target: StackId,
        cards: &[Card],
        source: Option<StackId>,
        pile: &[Card],
    ) -> bool {
        if source == Some(target) {
            return false;
        }
        self.stack(target)
            .accepts_cards_with(cards, pile, self.accept_context())
    }

    /// Can the top card of `source` be dropped on one of `targets`?
    ///
    /// Returns the first accepting target and the number of cards moved.
    fn can_drop_cards(&self, source: StackId, targets: &[StackId]) -> Option<(StackId, usize)> {
        let stack = self.stack(source);
        let len = stack.len();
        if len == 0 {
            return None;
        }
        let top = &stack.cards()[len - 1..];
        if !stack.can_move_cards(top) {
            return None;
        }
        targets
            .iter()
            .copied()
            .find(|&t| self.accepts_cards(t, Some(source), top))
            .map(|t| (t, 1))
    }
}
