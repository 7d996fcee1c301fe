//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: `{P} move {Q}`. Preconditions
//! are always checked; postconditions only in debug builds.

use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{Game, GameState, Move, MoveError};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game is still running.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` once the game has ended.
    pub fn check(game: &Game) -> Result<(), MoveError> {
        match game.state() {
            GameState::InProgress => Ok(()),
            GameState::Over => Err(MoveError::GameOver),
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `NotYourTurn` for the wrong mark.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.mark != game.turn() {
            Err(MoveError::NotYourTurn(mov.mark))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `Occupied` for a taken cell.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::Occupied(mov.position))
        }
    }
}

/// Contract for move actions.
///
/// Preconditions: game in progress, mover's turn, empty cell.
/// Postconditions: exactly one more move recorded, plus [`GameInvariants`].
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(action, game)?;
        SquareIsEmpty::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();
        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new("Exactly one move recorded per placement"));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Checks the move postcondition and panics on violation in debug builds.
#[instrument(level = "trace", skip_all)]
pub fn assert_post(before: &Game, after: &Game) {
    if let Err(violations) = MoveContract::post(before, after) {
        for violation in &violations {
            warn!(description = %violation.description, "Move postcondition violated");
        }
        debug_assert!(violations.is_empty(), "Move postcondition violated: {violations:?}");
    }
}
