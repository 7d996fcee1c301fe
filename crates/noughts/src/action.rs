//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent a side's
//! intent, are recorded in the controller's history and can be replayed.

use super::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The side making the move.
    pub mark: Mark,
    /// Where the mark goes.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The engine is waiting on the AI, not on this side.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),
}

impl MoveError {
    /// True for coordinates that never named a cell.
    ///
    /// Front ends usually ignore these silently.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MoveError::OutOfRange { .. })
    }

    /// True for a real cell that may not be played right now.
    pub fn is_illegal(&self) -> bool {
        !self.is_out_of_range()
    }
}

impl std::error::Error for MoveError {}

/// What a move attempt did.
///
/// Only `Accepted` changed any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was played.
    Accepted {
        /// The human move that was placed.
        placed: Move,
        /// The AI's answer, when single-player mode produced one.
        reply: Option<Move>,
    },
    /// The point did not resolve to any cell.
    OffBoard,
    /// The cell resolved but the placement was refused.
    Rejected(MoveError),
}

impl MoveResult {
    /// Returns true if the board changed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }
}
