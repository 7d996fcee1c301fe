//! Game outcomes and their minimax utilities.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Always derived from the board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X holds a complete line.
    XWins,
    /// O holds a complete line.
    OWins,
    /// Board is full and nobody holds a line.
    Draw,
    /// No line yet and cells remain.
    Undecided,
}

impl Outcome {
    /// The outcome in which `mark` won.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
        }
    }

    /// Signed utility from X's point of view.
    pub fn utility(self) -> i8 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw | Outcome::Undecided => 0,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Draw | Outcome::Undecided => None,
        }
    }

    /// Returns true if somebody holds a line.
    pub fn is_decisive(self) -> bool {
        self.winner().is_some()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "Player X wins"),
            Outcome::OWins => write!(f, "Player O wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Undecided => write!(f, "Undecided"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilities() {
        assert_eq!(Outcome::XWins.utility(), 1);
        assert_eq!(Outcome::OWins.utility(), -1);
        assert_eq!(Outcome::Draw.utility(), 0);
        assert_eq!(Outcome::Undecided.utility(), 0);
    }

    #[test]
    fn test_won_by_round_trips() {
        assert_eq!(Outcome::won_by(Mark::O).winner(), Some(Mark::O));
        assert!(!Outcome::Draw.is_decisive());
        assert_eq!(Outcome::XWins.to_string(), "Player X wins");
    }
}
