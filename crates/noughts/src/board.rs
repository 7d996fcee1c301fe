//! The 3x3 board and its move counter.

use super::rules;
use super::{Cell, Mark, MoveError, Outcome, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// The move counter always equals the number of occupied cells. Cells only
/// go from empty to occupied; the single exception is the search rollback
/// in [`crate::search`], which restores a cell it placed itself.
///
/// Serializes as its text dump, and deserializing goes through the parser,
/// so the counter is always recomputed from the cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
    /// Number of occupied cells (0-9).
    moves: u8,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
            moves: 0,
        }
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfRange` if either coordinate is not in `0..3`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Position::from_row_col(row, col)
            .map(|pos| self.get(pos))
            .ok_or(MoveError::OutOfRange { row, col })
    }

    /// Returns the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// A refused placement leaves the board untouched.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` for coordinates outside the board
    /// - `GameOver` if a line is already complete
    /// - `Occupied` if the cell already holds a mark
    #[instrument(level = "debug", skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<Position, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        self.place_at(pos, mark)?;
        Ok(pos)
    }

    /// Places `mark` at a position, with the same checks as [`Board::place`].
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if self.winner().is_decisive() {
            return Err(MoveError::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.fill(pos, mark);
        Ok(())
    }

    /// Marks an empty cell without the legality checks. Search only.
    pub(crate) fn fill(&mut self, pos: Position, mark: Mark) {
        debug_assert!(self.is_empty(pos), "filling an occupied cell");
        self.cells[pos.row()][pos.col()] = Cell::Occupied(mark);
        self.moves += 1;
    }

    /// Empties a cell the caller placed earlier. Search rollback only.
    pub(crate) fn clear(&mut self, pos: Position) {
        debug_assert!(!self.is_empty(pos), "clearing an empty cell");
        self.cells[pos.row()][pos.col()] = Cell::Empty;
        self.moves -= 1;
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> u8 {
        self.moves
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Evaluates the board.
    ///
    /// `Draw` when full with no line, `Undecided` when cells remain.
    pub fn winner(&self) -> Outcome {
        match rules::check_winner(self) {
            Some(mark) => Outcome::won_by(mark),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Undecided,
        }
    }

    /// True once a line is complete or no cell remains.
    pub fn is_terminal(&self) -> bool {
        self.winner() != Outcome::Undecided
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per line, marks separated by spaces, `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", row[0].symbol(), row[1].symbol(), row[2].symbol())?;
        }
        Ok(())
    }
}

/// Errors from parsing a board dump.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Not exactly three non-blank lines.
    #[display("expected 3 rows, found {}", _0)]
    RowCount(usize),

    /// A row without exactly three cells.
    #[display("row {row} has {found} cells, expected 3")]
    CellCount {
        /// Zero-based row.
        row: usize,
        /// Cells found.
        found: usize,
    },

    /// A token that is not `X`, `O` or `.`.
    #[display("unknown cell symbol {:?}", _0)]
    UnknownSymbol(String),

    /// Mark counts that alternating play starting with X cannot produce.
    #[display("impossible mark counts: {x} X, {o} O")]
    ImpossibleCounts {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(dump: String) -> Result<Self, Self::Error> {
        dump.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() != 3 {
            return Err(BoardParseError::RowCount(lines.len()));
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 3 {
                return Err(BoardParseError::CellCount {
                    row,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                let cell = match *token {
                    "." => Cell::Empty,
                    "X" | "x" => Cell::Occupied(Mark::X),
                    "O" | "o" => Cell::Occupied(Mark::O),
                    other => return Err(BoardParseError::UnknownSymbol(other.to_string())),
                };
                if !cell.is_empty() {
                    board.moves += 1;
                }
                board.cells[row][col] = cell;
            }
        }

        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        if x != o && x != o + 1 {
            return Err(BoardParseError::ImpossibleCounts { x, o });
        }
        Ok(board)
    }
}
