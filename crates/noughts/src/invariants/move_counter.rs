//! Move counter invariant: the counter matches the occupied cells.

use super::super::Game;
use super::Invariant;

/// Invariant: the board's move counter equals its number of occupied cells.
pub struct MoveCounterInvariant;

impl Invariant<Game> for MoveCounterInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .rows()
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count();
        occupied == usize::from(game.board().move_count())
    }

    fn description() -> &'static str {
        "Move counter equals number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Mark};

    #[test]
    fn test_empty_game_holds() {
        assert!(MoveCounterInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_holds_through_a_whole_game() {
        let mut game = Game::with_mode(GameMode::TwoPlayer);
        for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 0)] {
            game.play(row, col);
            assert!(MoveCounterInvariant::holds(&game));
        }
        assert_eq!(game.board().move_count(), 9);
    }

    #[test]
    fn test_rejected_moves_keep_it() {
        let mut game = Game::with_mode(GameMode::TwoPlayer);
        game.play(1, 1);
        game.play(1, 1);
        game.play(5, 5);
        assert!(MoveCounterInvariant::holds(&game));
        assert_eq!(game.board().count(Mark::X), 1);
    }
}
