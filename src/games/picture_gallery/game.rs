//! Picture Gallery game implementation.

use anyhow::{ensure, Result};
use log::{debug, trace};

use crate::board::{is_legal_move, Board, BoardView, Move};
use crate::core::{Card, GameConfig, GameRng, HintScores};
use crate::rules::SolitaireRules;
use crate::stacks::{StackId, StackKind};

use super::variant::Variant;

/// A Picture Gallery game in progress.
#[derive(Clone, Debug)]
pub struct PictureGallery {
    config: GameConfig,
    board: Board,
}

/// Builder for creating a PictureGallery.
#[derive(Clone, Debug, Default)]
pub struct PictureGalleryBuilder {
    config: GameConfig,
}

impl PictureGalleryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a variant's configuration.
    pub fn variant(mut self, variant: Variant) -> Self {
        let seed = self.config.seed;
        self.config = variant.config().with_seed(seed);
        self
    }

    pub fn decks(mut self, decks: usize) -> Self {
        self.config.decks = decks;
        self
    }

    pub fn row_stacks(mut self, rows: usize) -> Self {
        self.config.row_stacks = rows;
        self
    }

    pub fn waste(mut self) -> Self {
        self.config.waste = true;
        self
    }

    pub fn scores(mut self, scores: HintScores) -> Self {
        self.config.scores = scores;
        self
    }

    /// Build the game and deal the opening position.
    pub fn build(self, seed: u64) -> Result<PictureGallery> {
        PictureGallery::new(self.config.with_seed(seed))
    }
}

impl PictureGallery {
    /// Create a game from `config` and deal the opening position.
    ///
    /// The shuffled cards go to the talon; one card is then dealt to every
    /// tableau and one to every row.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut board = Board::new(&config);
        let mut cards = Card::full_decks(config.decks);
        GameRng::new(config.seed).shuffle(&mut cards);
        let talon = board.talon();
        board.arrange(talon, &cards);

        let mut game = Self { config, board };
        let tableaux = game.board.tableaux().to_vec();
        let rows = game.board.rows().to_vec();
        game.deal_to(&tableaux);
        game.deal_to(&rows);

        debug!(
            "dealt seed {}: {} cards left in talon",
            game.config.seed,
            game.board.stack(talon).len()
        );
        Ok(game)
    }

    /// Resume a game from a saved board.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self> {
        config.validate()?;
        let expected = Board::new(&config).stack_count();
        ensure!(
            board.stack_count() == expected,
            "board has {} stacks, configuration needs {}",
            board.stack_count(),
            expected
        );
        Ok(Self { config, board })
    }

    /// Deal one card from the talon onto each of `targets`, in order, while
    /// cards remain. Returns the number of cards dealt.
    fn deal_to(&mut self, targets: &[StackId]) -> usize {
        let talon = self.board.talon();
        let mut dealt = 0;
        for &target in targets {
            let Some(card) = self.board.stack_mut(talon).pop() else {
                break;
            };
            trace!("deal {} -> {}", card, target);
            self.board.stack_mut(target).push(card);
            dealt += 1;
        }
        dealt
    }

    /// Flip a foundation face down once it is complete.
    fn close_stack(&mut self, id: StackId) {
        let stack = self.board.stack(id);
        if let StackKind::Foundation { capacity } = stack.kind() {
            if stack.len() == capacity && !stack.is_closed() {
                debug!("foundation {} complete, closing", id);
                self.board.stack_mut(id).close();
            }
        }
    }

    /// Refill an emptied row from the talon.
    fn fill_stack(&mut self, id: StackId) {
        let stack = self.board.stack(id);
        if stack.kind().is_row() && stack.is_empty() && self.board.can_deal_cards() {
            self.deal_to(&[id]);
        }
    }
}

impl SolitaireRules for PictureGallery {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn apply_move(&mut self, mv: &Move) -> Result<()> {
        ensure!(is_legal_move(&self.board, mv), "illegal move {}", mv);

        let cards = self.board.stack_mut(mv.source).take_top(mv.ncards);
        self.board.stack_mut(mv.target).extend_from_slice(&cards);
        debug!("moved {}", mv);

        self.close_stack(mv.target);
        self.fill_stack(mv.source);
        Ok(())
    }

    fn deal(&mut self) -> Result<usize> {
        ensure!(self.board.can_deal_cards(), "talon is empty");
        let rows = self.board.rows().to_vec();
        let dealt = self.deal_to(&rows);
        debug!("dealt {} cards to rows", dealt);
        Ok(dealt)
    }

    fn is_won(&self) -> bool {
        if self.board.foundation().len() != self.config.foundation_capacity() {
            return false;
        }
        self.board
            .tableaux()
            .iter()
            .all(|&t| self.board.stack(t).len() == self.config.tableau_max_cards)
    }

    fn shall_highlight_match(&self, a: Card, b: Card) -> bool {
        if a.is_ace() || b.is_ace() {
            return false;
        }
        let step = i16::from(self.config.tableau_dir);
        let diff = i16::from(a.rank.value()) - i16::from(b.rank.value());
        a.suit == b.suit && diff.abs() == step.abs()
    }
}
