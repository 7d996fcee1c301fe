//! The game controller: turn order, modes and the `InProgress -> Over` state machine.

use super::contracts::{Contract, MoveContract};
use super::resolver::CellResolver;
use super::search;
use super::{Board, Cell, GameMode, GameState, Mark, Move, MoveError, MoveResult, Outcome, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// How a game is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GameSettings {
    /// Human vs AI or human vs human.
    pub mode: GameMode,
    /// The mark the AI plays in single-player mode.
    pub ai_mark: Mark,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            ai_mark: Mark::X,
        }
    }
}

/// Tic-tac-toe game controller.
///
/// Owns the board exclusively. Every mutation goes through [`Game::play`],
/// [`Game::attempt_move`] or [`Game::play_ai_turn`], and a refused move
/// changes nothing.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) state: GameState,
    pub(crate) settings: GameSettings,
    pub(crate) turn: Mark,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game with X to move on an empty board.
    #[instrument]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            board: Board::new(),
            state: GameState::InProgress,
            settings,
            turn: Mark::X,
            history: Vec::new(),
        }
    }

    /// Creates a game in `mode` with the AI playing X.
    pub fn with_mode(mode: GameMode) -> Self {
        Self::new(GameSettings {
            mode,
            ..GameSettings::default()
        })
    }

    /// Replays moves on a fresh two-player game.
    ///
    /// # Errors
    ///
    /// The first move that would be refused.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::with_mode(GameMode::TwoPlayer);
        for mov in moves {
            game.apply(*mov)?;
        }
        Ok(game)
    }

    /// Resets to an empty board, X to move, in `mode`.
    ///
    /// The AI's mark carries over. When the AI plays X the board stays empty;
    /// call [`Game::play_ai_turn`] for its opening move.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: GameMode) {
        *self = Self::new(GameSettings {
            mode,
            ..self.settings
        });
        info!(mode = mode.name(), "New game");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfRange` for coordinates outside the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        self.board.cell_at(row, col)
    }

    /// Returns the game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The final outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::InProgress => None,
            GameState::Over => Some(self.board.winner()),
        }
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    /// Returns the mark the AI plays in single-player mode.
    pub fn ai_mark(&self) -> Mark {
        self.settings.ai_mark
    }

    /// Returns the settings.
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True when the engine, not a human, is due to move.
    pub fn is_ai_turn(&self) -> bool {
        self.settings.mode == GameMode::SinglePlayer
            && self.state == GameState::InProgress
            && self.turn == self.settings.ai_mark
    }

    /// Resolves a presentation-layer point and plays it.
    ///
    /// A point the resolver cannot place on the board yields
    /// `MoveResult::OffBoard` and changes nothing.
    pub fn attempt_move<P, R>(&mut self, point: P, resolver: &R) -> MoveResult
    where
        R: CellResolver<P> + ?Sized,
    {
        match resolver.resolve(point) {
            Some((row, col)) => self.play(row, col),
            None => {
                debug!("Point outside the board");
                MoveResult::OffBoard
            }
        }
    }

    /// Plays the side to move at `(row, col)`.
    ///
    /// In single-player mode the AI answers before this returns. A refused
    /// move comes back as `MoveResult::Rejected` and leaves the game untouched.
    #[instrument(skip(self), fields(turn = %self.turn, mode = ?self.settings.mode))]
    pub fn play(&mut self, row: usize, col: usize) -> MoveResult {
        let Some(position) = Position::from_row_col(row, col) else {
            debug!("Coordinates out of range");
            return MoveResult::Rejected(MoveError::OutOfRange { row, col });
        };

        if self.is_ai_turn() {
            debug!("Waiting on the AI");
            return MoveResult::Rejected(MoveError::NotYourTurn(self.settings.ai_mark.opponent()));
        }

        let placed = Move::new(self.turn, position);
        if let Err(err) = self.apply(placed) {
            debug!(error = %err, "Move rejected");
            return MoveResult::Rejected(err);
        }

        let reply = self.play_ai_turn();
        MoveResult::Accepted { placed, reply }
    }

    /// Plays the AI's move if it is the AI's turn, returning it.
    ///
    /// Returns `None` in two-player mode, when a human is to move, or once
    /// the game is over.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> Option<Move> {
        if !self.is_ai_turn() {
            return None;
        }

        let side = self.turn;
        let report = match search::best_move(&mut self.board, side) {
            Ok(report) => report,
            Err(err) => {
                error!(error = %err, board = %self.board, "Search called on a finished board");
                return None;
            }
        };

        let reply = Move::new(side, report.position);
        match self.apply(reply) {
            Ok(()) => {
                debug!(mov = %reply, score = report.score, nodes = report.nodes, "AI moved");
                Some(reply)
            }
            Err(err) => {
                error!(error = %err, mov = %reply, "AI chose an illegal move");
                None
            }
        }
    }

    /// Validates, places, records, flips the turn and re-evaluates.
    fn apply(&mut self, mov: Move) -> Result<(), MoveError> {
        MoveContract::pre(self, &mov)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place_at(mov.position, mov.mark)?;
        self.history.push(mov);
        self.turn = mov.mark.opponent();
        self.update_state();

        #[cfg(debug_assertions)]
        super::contracts::assert_post(&before, self);

        Ok(())
    }

    /// Applies the transition rule after a placement.
    fn update_state(&mut self) {
        let outcome = self.board.winner();
        if outcome != Outcome::Undecided {
            self.state = GameState::Over;
            info!(%outcome, moves = self.board.move_count(), "Game over\n{}", self.board);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
