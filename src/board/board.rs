//! The Picture Gallery board: every stack plus its named groups.
//!
//! ## Stack Layout
//!
//! Stacks are allocated in layout order and addressed by `StackId`:
//! - the foundation
//! - tableau rows, top row first, `4 * decks` stacks each
//! - row stacks, left to right
//! - the talon
//! - the waste, when configured

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameConfig};
use crate::stacks::{Stack, StackId};

use super::view::BoardView;

/// All stacks of one game and the groups they belong to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    stacks: Vec<Stack>,
    foundations: Vec<StackId>,
    tableaux: Vec<StackId>,
    rows: Vec<StackId>,
    talon: StackId,
    waste: Option<StackId>,
    dropstacks: Vec<StackId>,
    openstacks: Vec<StackId>,
}

impl Board {
    /// Create an empty board laid out for `config`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut stacks = Vec::new();

        let foundation_id = StackId::new(0);
        stacks.push(Stack::foundation(foundation_id, config.foundation_capacity()));
        let foundations = vec![foundation_id];

        let mut tableaux = Vec::with_capacity(config.tableau_count());
        for &base_rank in &config.tableau_base_ranks {
            for _ in 0..config.tableau_columns() {
                let id = StackId::new(stacks_len_to_u16(&stacks));
                stacks.push(Stack::tableau(
                    id,
                    base_rank,
                    config.tableau_dir,
                    config.tableau_max_cards,
                ));
                tableaux.push(id);
            }
        }

        let mut rows = Vec::with_capacity(config.row_stacks);
        for _ in 0..config.row_stacks {
            let id = StackId::new(stacks_len_to_u16(&stacks));
            stacks.push(Stack::row(id));
            rows.push(id);
        }

        let talon = StackId::new(stacks_len_to_u16(&stacks));
        stacks.push(Stack::talon(talon));

        let waste = if config.waste {
            let id = StackId::new(stacks_len_to_u16(&stacks));
            stacks.push(Stack::waste(id));
            Some(id)
        } else {
            None
        };

        let dropstacks: Vec<StackId> = tableaux
            .iter()
            .chain(rows.iter())
            .copied()
            .chain(waste)
            .collect();
        let openstacks: Vec<StackId> = foundations
            .iter()
            .copied()
            .chain(dropstacks.iter().copied())
            .collect();

        Self {
            stacks,
            foundations,
            tableaux,
            rows,
            talon,
            waste,
            dropstacks,
            openstacks,
        }
    }

    /// Number of stacks on the board.
    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Iterate over every stack in layout order.
    pub fn stacks(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter()
    }

    #[must_use]
    pub fn waste(&self) -> Option<StackId> {
        self.waste
    }

    /// Talon plus waste, the stacks dealing works through.
    pub fn talonstacks(&self) -> impl Iterator<Item = StackId> + '_ {
        std::iter::once(self.talon).chain(self.waste)
    }

    /// The single foundation.
    #[must_use]
    pub fn foundation(&self) -> &Stack {
        self.stack(self.foundations[0])
    }

    /// Replace a stack's cards without checking any rule.
    ///
    /// Used to set up positions and restore snapshots; play goes through
    /// the game's move API instead.
    pub fn arrange(&mut self, id: StackId, cards: &[Card]) {
        let stack = self.stack_mut(id);
        let _ = stack.take_top(stack.len());
        stack.extend_from_slice(cards);
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum()
    }

    pub(crate) fn stack_mut(&mut self, id: StackId) -> &mut Stack {
        &mut self.stacks[id.index()]
    }
}

fn stacks_len_to_u16(stacks: &[Stack]) -> u16 {
    u16::try_from(stacks.len()).expect("Board cannot hold more than u16::MAX stacks")
}

impl BoardView for Board {
    fn stack(&self, id: StackId) -> &Stack {
        &self.stacks[id.index()]
    }

    fn foundations(&self) -> &[StackId] {
        &self.foundations
    }

    fn tableaux(&self) -> &[StackId] {
        &self.tableaux
    }

    fn rows(&self) -> &[StackId] {
        &self.rows
    }

    fn talon(&self) -> StackId {
        self.talon
    }

    fn dropstacks(&self) -> &[StackId] {
        &self.dropstacks
    }

    fn openstacks(&self) -> &[StackId] {
        &self.openstacks
    }
}
