//! The Klondike engine surface.

use log::{debug, trace};

use super::moves::{self, CardRun, MoveOutcome};
use crate::cards::{Card, Deck};
use crate::core::{Action, ActionRecord, EngineConfig, GameRng, GameRngState, GameState, MoveError, PileRef};
use crate::rules::{GameResult, RulesEngine};
use crate::zones::{Board, Pile};

/// A Klondike session: configuration, deal RNG and the current game.
///
/// Every gameplay entry point has two forms: `try_*` returns the reason for
/// a rejection, the plain form returns `bool` for callers that only need to
/// know whether to redraw. A rejected call never changes any state.
#[derive(Clone, Debug)]
pub struct Klondike {
    config: EngineConfig,
    rng: GameRng,
    state: GameState,
}

/// Builder for creating a Klondike session.
#[derive(Clone, Debug, Default)]
pub struct KlondikeBuilder {
    seed: Option<u64>,
    rng_state: Option<GameRngState>,
    config: EngineConfig,
    deck: Option<Deck>,
}

impl KlondikeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the deal RNG. Without a seed, one is drawn from the OS.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resume a session from `Klondike::rng_state`.
    ///
    /// `build` then deals the game that was current when the state was
    /// taken, so `replay` can rebuild any game of a session, not only the
    /// first. Takes precedence over `seed`. A state taken from a preset
    /// deck or `from_board` does not identify its board.
    #[must_use]
    pub fn rng_state(mut self, state: GameRngState) -> Self {
        self.rng_state = Some(state);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Deal the first game from this deck instead of a shuffled one.
    /// Later `new_game` calls shuffle as usual.
    #[must_use]
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the session and deal the first game.
    #[must_use]
    pub fn build(self) -> Klondike {
        let mut rng = match self.rng_state {
            // Wind back one fork so the next deal is the saved game.
            Some(state) => GameRng::from_state(&GameRngState {
                fork_counter: state.fork_counter.saturating_sub(1),
                ..state
            }),
            None => GameRng::new(self.seed.unwrap_or_else(rand::random)),
        };
        let board = match self.deck {
            Some(deck) => deck.deal(),
            None => shuffled_deal(&mut rng),
        };
        debug!("klondike session seed {}, deal {}", rng.seed(), rng.state().fork_counter);

        Klondike {
            state: GameState::new(board, &self.config),
            config: self.config,
            rng,
        }
    }

    /// Build, then apply `actions` in order.
    ///
    /// With the same seed (or deck) and config this reproduces a game from
    /// its action log. On rejection returns the index of the failing action.
    pub fn replay(self, actions: &[Action]) -> Result<Klondike, (usize, MoveError)> {
        let mut game = self.build();
        game.apply_all(actions)?;
        Ok(game)
    }
}

fn shuffled_deal(rng: &mut GameRng) -> Board {
    let mut deal_rng = rng.fork();
    let mut deck = Deck::standard();
    deck.shuffle(&mut deal_rng);
    deck.deal()
}

fn rejected(op: &str, err: MoveError) -> MoveError {
    trace!("{op} rejected: {err}");
    err
}

impl Klondike {
    #[must_use]
    pub fn builder() -> KlondikeBuilder {
        KlondikeBuilder::new()
    }

    /// Start from a prepared board (scenarios, tests, puzzles).
    #[must_use]
    pub fn from_board(config: EngineConfig, board: Board) -> Self {
        Self {
            state: GameState::new(board, &config),
            rng: GameRng::new(rand::random()),
            config,
        }
    }

    /// Discard the current game and deal a new one.
    ///
    /// Score, moves, undo budget and history all reset.
    pub fn new_game(&mut self) {
        let board = shuffled_deal(&mut self.rng);
        self.state = GameState::new(board, &self.config);
        debug!("new game dealt ({} forks into session)", self.rng.state().fork_counter);
    }

    // === Gameplay ===

    /// Draw from the stock, or turn the waste over when the stock is empty.
    pub fn try_draw(&mut self) -> Result<(), MoveError> {
        let board = &self.state.board;
        if !board.stock.is_empty() {
            self.state.checkpoint();
            let board = &mut self.state.board;
            if let Some(card) = board.stock.pop() {
                board.waste.push(card.flipped_up());
                debug!("drew {card}, {} left in stock", board.stock.len());
            }
            self.state.count_move();
        } else if !board.waste.is_empty() {
            self.state.checkpoint();
            let board = &mut self.state.board;
            let waste = board.waste.take();
            board.stock = Pile::from_cards(waste.iter().rev().copied().map(Card::flipped_down));
            debug!("recycled {} waste cards into stock", board.stock.len());
            if self.config.recycle_counts_as_move {
                self.state.count_move();
            }
        } else {
            return Err(rejected("draw", MoveError::NothingToDraw));
        }

        self.state.record(Action::Draw);
        Ok(())
    }

    pub fn draw_from_stock(&mut self) -> bool {
        self.try_draw().is_ok()
    }

    /// Move the card or run at `from` onto `to`.
    pub fn try_move(&mut self, from: PileRef, to: PileRef) -> Result<MoveOutcome, MoveError> {
        let cards = moves::check_move(&self.state.board, from, to).map_err(|e| rejected("move", e))?;

        self.state.checkpoint();
        let outcome = moves::execute(&mut self.state.board, from, to, cards, &self.config.scoring);
        self.state.add_score(outcome.score_delta);
        self.state.count_move();
        self.state.record(Action::Move { from, to });

        debug!(
            "moved {} card(s) {from} -> {to}, delta {:+}, score {}",
            outcome.cards.len(),
            outcome.score_delta,
            self.state.score()
        );
        Ok(outcome)
    }

    pub fn attempt_move(&mut self, from: PileRef, to: PileRef) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Send the top card of waste or a tableau column to the first
    /// foundation that accepts it.
    pub fn try_auto_move(&mut self, from: PileRef) -> Result<MoveOutcome, MoveError> {
        let (source, target) =
            moves::resolve_auto(&self.state.board, from).map_err(|e| rejected("auto-move", e))?;
        self.try_move(source, target)
    }

    pub fn auto_move_to_foundation(&mut self, from: PileRef) -> bool {
        self.try_auto_move(from).is_ok()
    }

    /// Restore the state before the last action, spending one undo.
    pub fn try_undo(&mut self) -> Result<(), MoveError> {
        self.state.undo().map_err(|e| rejected("undo", e))?;
        debug!("undo, {} left", self.state.undo_budget());
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// All four foundations complete.
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.state.is_won()
    }

    // === Queries ===

    /// The cards a move from `from` would carry, if any.
    #[must_use]
    pub fn run_at(&self, from: PileRef) -> Option<CardRun> {
        moves::run_at(&self.state.board, from).ok()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    #[must_use]
    pub fn undo_budget(&self) -> u8 {
        self.state.undo_budget()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.state.history_len()
    }

    /// Actions applied in the current game, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &ActionRecord> + '_ {
        self.state.log().iter()
    }

    /// Session RNG state; with the config it identifies the current deal.
    /// Pass it to `KlondikeBuilder::rng_state` to deal this game again.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl RulesEngine for Klondike {
    fn apply_action(&mut self, action: &Action) -> Result<(), MoveError> {
        match *action {
            Action::Draw => self.try_draw(),
            Action::Move { from, to } => self.try_move(from, to).map(|_| ()),
            Action::AutoFoundation { from } => self.try_auto_move(from).map(|_| ()),
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.check_win().then(|| GameResult::Won {
            score: self.score(),
            moves: self.move_count(),
        })
    }
}
