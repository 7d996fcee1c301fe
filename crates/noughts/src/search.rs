//! Exhaustive minimax search.
//!
//! Full-depth, unpruned, unweighted: a forced win scores +1 for X no matter
//! how many plies away it is, and among equal scores the first empty cell in
//! row-major order wins. Both properties are relied on by callers and tests.
//!
//! The search explores the tree by mutating one board in place. Every
//! provisional mark is held by a [`Probe`], which owns the board exclusively
//! for the duration of one recursive call and clears the cell when it is
//! dropped, so the board leaves [`best_move`] exactly as it came in.

use super::{Board, Mark, Outcome, Position};
use tracing::{debug, instrument, trace};

/// The search was asked to move on a finished board.
///
/// The controller's state machine never does this; seeing one is a bug in
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// Every cell is taken.
    #[display("No empty cells left to search")]
    NoEmptyCells,
    /// A line is already complete.
    #[display("Board is already decided")]
    AlreadyDecided,
}

impl std::error::Error for SearchError {}

/// The chosen move plus instrumentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Cell to play.
    pub position: Position,
    /// Minimax utility of playing there, from X's point of view.
    pub score: i8,
    /// Positions visited below the root.
    pub nodes: u64,
    /// Deepest ply reached, counting the candidate move as ply 1.
    pub max_depth: u8,
}

#[derive(Debug, Default)]
struct Stats {
    nodes: u64,
    max_depth: u8,
}

/// A provisional mark that is rolled back on drop.
struct Probe<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, position: Position, mark: Mark) -> Self {
        board.fill(position, mark);
        Self { board, position }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Does `score` beat the best so far for `side`? Strict, so earlier cells keep ties.
fn improves(side: Mark, score: i8, best: Option<i8>) -> bool {
    match best {
        None => true,
        Some(best) if side.is_maximizer() => score > best,
        Some(best) => score < best,
    }
}

fn minimax(board: &mut Board, to_move: Mark, depth: u8, stats: &mut Stats) -> i8 {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    let outcome = board.winner();
    if outcome != Outcome::Undecided {
        return outcome.utility();
    }

    let mut best = None;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let score = {
            let mut probe = Probe::place(board, pos, to_move);
            minimax(probe.board(), to_move.opponent(), depth + 1, stats)
        };
        if improves(to_move, score, best) {
            best = Some(score);
        }
    }

    // Unreachable for a non-terminal board, which always has an empty cell.
    best.unwrap_or(0)
}

/// Minimax value of a position with `to_move` on move, from X's point of view.
///
/// The board is borrowed mutably for the search and restored before return.
#[instrument(level = "debug", skip(board), fields(moves = board.move_count()))]
pub fn evaluate(board: &mut Board, to_move: Mark) -> i8 {
    let mut stats = Stats::default();
    let value = minimax(board, to_move, 0, &mut stats);
    debug!(value, nodes = stats.nodes, "Evaluated position");
    value
}

/// Picks the best cell for `side`.
///
/// Every empty cell is scored by one ply plus a full minimax of the reply
/// tree; the first cell with the best score in row-major order wins. X
/// maximizes, O minimizes. The board is left unchanged; committing the move
/// is up to the caller.
///
/// # Errors
///
/// `SearchError` if the board is already terminal.
#[instrument(skip(board), fields(moves = board.move_count()))]
pub fn best_move(board: &mut Board, side: Mark) -> Result<SearchReport, SearchError> {
    if board.winner().is_decisive() {
        return Err(SearchError::AlreadyDecided);
    }
    if board.is_full() {
        return Err(SearchError::NoEmptyCells);
    }

    let mut stats = Stats::default();
    let mut best: Option<(Position, i8)> = None;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let score = {
            let mut probe = Probe::place(board, pos, side);
            minimax(probe.board(), side.opponent(), 1, &mut stats)
        };
        trace!(position = %pos, score, "Scored candidate");
        if improves(side, score, best.map(|(_, score)| score)) {
            best = Some((pos, score));
        }
    }

    let (position, score) = best.ok_or(SearchError::NoEmptyCells)?;
    debug!(
        position = %position,
        score,
        nodes = stats.nodes,
        max_depth = stats.max_depth,
        "Search complete"
    );
    Ok(SearchReport {
        position,
        score,
        nodes: stats.nodes,
        max_depth: stats.max_depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("valid board")
    }

    #[test]
    fn test_probe_rolls_back() {
        let mut b = board("X . .\n. O .\n. . .");
        let before = b.clone();
        {
            let mut probe = Probe::place(&mut b, Position::BottomRight, Mark::X);
            assert_eq!(probe.board().move_count(), 3);
        }
        assert_eq!(b, before);
    }

    #[test]
    fn test_empty_board_is_a_draw_and_picks_first_cell() {
        let mut b = Board::new();
        let report = best_move(&mut b, Mark::X).unwrap();
        assert_eq!(report.position, Position::TopLeft);
        assert_eq!(report.score, 0);
        assert_eq!(report.max_depth, 9);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_takes_the_only_winning_cell() {
        let mut b = board("X O O\nO X .\nX . .");
        let report = best_move(&mut b, Mark::X).unwrap();
        assert_eq!(report.position, Position::BottomRight);
        assert_eq!(report.score, 1);
    }

    #[test]
    fn test_equal_wins_prefer_row_major_order() {
        // (0,2), (2,0) and (2,2) all force a win; (0,2) comes first.
        let mut b = board("X X .\nX O O\n. O .");
        let report = best_move(&mut b, Mark::X).unwrap();
        assert_eq!(report.position, Position::TopRight);
        assert_eq!(report.score, 1);
    }

    #[test]
    fn test_minimizer_blocks() {
        let mut b = board("X X .\n. O .\n. . .");
        let report = best_move(&mut b, Mark::O).unwrap();
        assert_eq!(report.position, Position::TopRight);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_minimizer_wins_when_it_can() {
        let mut b = board("X X .\nO O .\nX . .");
        let report = best_move(&mut b, Mark::O).unwrap();
        assert_eq!(report.position, Position::MiddleRight);
        assert_eq!(report.score, -1);
    }

    #[test]
    fn test_evaluate_restores_board() {
        let mut b = board("X . .\n. . .\n. . .");
        let before = b.clone();
        assert_eq!(evaluate(&mut b, Mark::O), 0);
        assert_eq!(b, before);
    }

    #[test]
    fn test_terminal_boards_are_caller_errors() {
        let mut won = board("X X X\nO O .\n. . .");
        assert_eq!(best_move(&mut won, Mark::O), Err(SearchError::AlreadyDecided));

        let mut full = board("X O X\nX O O\nO X X");
        assert_eq!(best_move(&mut full, Mark::O), Err(SearchError::NoEmptyCells));
    }
}
