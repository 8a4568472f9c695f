//! Game session: live state, history, and turn orchestration.
//!
//! ## Turn flow
//!
//! For every submitted move the session:
//! 1. Refuses it if the game already has a result
//! 2. Asks the rules engine to validate it against the live state
//! 3. Snapshots the pre-move state into history (clearing redo)
//! 4. Commits the outcome and passes the turn
//! 5. Autosaves, if configured
//!
//! A rejected move leaves state and history untouched and the same side
//! is asked again. Undo/redo bypass validation entirely and restore the
//! side to move from the snapshot.

use std::time::Instant;

use tracing::{debug, instrument, warn};

use crate::core::{
    Board, GameState, Move, MoveError, MoveOutcome, Phase, SessionConfig, Side, CAPTURES_TO_WIN,
};
use crate::history::History;
use crate::persist::{PersistError, SaveRecord, SaveSlots, AUTOSAVE_SLOT};
use crate::rules::{BaghChal, GameResult, RulesEngine};

use super::input::{Command, Input};
use super::timer::TurnTimer;

/// What a handled input line did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    /// A move was applied. `overdue` is advisory only.
    Moved { outcome: MoveOutcome, overdue: bool },
    Undone,
    Redone,
    /// The player asked to leave. The session is unchanged.
    Exit,
}

/// One game in progress.
#[derive(Clone, Debug)]
pub struct GameSession<R: RulesEngine = BaghChal> {
    rules: R,
    state: GameState,
    history: History,
    config: SessionConfig,
    timer: TurnTimer,
}

impl GameSession<BaghChal> {
    /// New game under the standard rules.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rules(BaghChal::new(), config)
    }
}

impl Default for GameSession<BaghChal> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<R: RulesEngine> GameSession<R> {
    /// New game under custom rules.
    pub fn with_rules(rules: R, config: SessionConfig) -> Self {
        Self {
            rules,
            state: GameState::new(),
            history: History::new(config.history_capacity, config.overflow_policy),
            timer: TurnTimer::start(config.turn_time_limit),
            config,
        }
    }

    // === Lifecycle ===

    /// Back to the opening position with empty history.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.restore(GameState::new());
    }

    /// Replace the live state and discard all history.
    pub fn restore(&mut self, state: GameState) {
        self.state = state;
        self.history.clear();
        self.timer.restart();
    }

    /// Replace the live state from a save record. History is discarded.
    ///
    /// On error the session is unchanged.
    #[instrument(skip(self, record))]
    pub fn load(&mut self, record: SaveRecord) -> Result<(), PersistError> {
        let state = record.into_state()?;
        self.restore(state);
        debug!(moves_played = state.moves_played(), turn = %state.turn(), "game loaded");
        Ok(())
    }

    /// Current state in on-disk form.
    #[must_use]
    pub fn save_record(&self) -> SaveRecord {
        SaveRecord::from_state(&self.state)
    }

    /// Start timing the side to move.
    pub fn begin_turn(&mut self) {
        self.timer.restart();
    }

    // === Input ===

    /// Parse and act on one line of player input.
    ///
    /// The time check happens before parsing, so an overdue warning is
    /// logged even when the line turns out to be invalid. A rejected line
    /// restarts the clock for the retry.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn handle_line(&mut self, line: &str) -> Result<TurnEvent, MoveError> {
        let overdue = self.timer.is_overdue_at(Instant::now());
        if overdue {
            warn!(limit = ?self.timer.limit(), "turn took longer than the time limit");
        }

        self.dispatch(line, overdue).inspect_err(|_| self.timer.restart())
    }

    fn dispatch(&mut self, line: &str, overdue: bool) -> Result<TurnEvent, MoveError> {
        match Input::parse(line)? {
            Input::Command(Command::Undo) => self.undo().map(|()| TurnEvent::Undone),
            Input::Command(Command::Redo) => self.redo().map(|()| TurnEvent::Redone),
            Input::Command(Command::Exit) => Ok(TurnEvent::Exit),
            Input::Move(input) => {
                let mv = input.to_move(self.state.turn(), self.state.phase())?;
                let outcome = self.play(mv)?;
                Ok(TurnEvent::Moved { outcome, overdue })
            }
        }
    }

    /// Validate and apply a move for the side to move.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if let Some(result) = self.result() {
            debug!(?result, "move refused, game is over");
            return Err(MoveError::GameOver);
        }

        let outcome = self.rules.validate(&self.state, &mv).inspect_err(|err| {
            debug!(%err, "move rejected");
        })?;

        let mut next = self.state;
        next.apply(outcome)?;
        self.history.snapshot(self.state);
        self.state = next;
        debug!(?outcome, moves_played = next.moves_played(), "move applied");

        self.autosave();
        self.timer.restart();
        Ok(outcome)
    }

    /// Step back one move.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let previous = self.history.undo(self.state).ok_or(MoveError::NoHistoryAvailable)?;
        self.state = previous;
        self.timer.restart();
        Ok(())
    }

    /// Re-apply one undone move.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<(), MoveError> {
        let next = self.history.redo(self.state).ok_or(MoveError::NoHistoryAvailable)?;
        self.state = next;
        self.timer.restart();
        Ok(())
    }

    fn autosave(&self) {
        let Some(dir) = &self.config.autosave_dir else {
            return;
        };
        if let Err(err) = SaveSlots::new(dir).save(AUTOSAVE_SLOT, &self.save_record()) {
            warn!(%err, "autosave failed");
        }
    }

    // === Read-only accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn turn(&self) -> Side {
        self.state.turn()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Goats not yet placed.
    #[must_use]
    pub fn goats_to_place(&self) -> u32 {
        self.state.goats_remaining()
    }

    /// Captured goats and the number that ends the game.
    #[must_use]
    pub fn captures(&self) -> (u32, u32) {
        (self.state.goats_captured(), CAPTURES_TO_WIN)
    }

    /// Result of the live position, if the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.legal_moves(&self.state)
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }
}
