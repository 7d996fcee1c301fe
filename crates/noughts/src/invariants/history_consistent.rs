//! History consistency invariant: replaying the history rebuilds the board.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: the move history replays to exactly the current board.
///
/// Every recorded move landed on an empty cell, and no cell was filled
/// without a recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut rebuilt = Board::new();
        for mov in game.history() {
            if !rebuilt.is_empty(mov.position) {
                return false;
            }
            rebuilt.fill(mov.position, mov.mark);
        }
        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}
