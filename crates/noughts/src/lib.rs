//! Noughts - a tic-tac-toe engine with a perfect minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, its move counter and pure queries
//! - **Rules**: win and draw detection shared by everything else
//! - **Search**: exhaustive, unpruned minimax with in-place rollback
//! - **Game**: the controller owning the board, enforcing turns and modes
//! - **Resolver**: the seam through which a front end maps its own
//!   coordinates onto board cells
//!
//! # Example
//!
//! ```
//! use noughts::{BandResolver, Game, GameMode, GameState, Mark, MoveResult};
//!
//! let mut game = Game::with_mode(GameMode::SinglePlayer);
//!
//! // The AI plays X and opens.
//! let opening = game.play_ai_turn().expect("AI moves first");
//! assert_eq!(opening.mark, Mark::X);
//!
//! // A click in the middle of a 900x900 window lands on the center cell.
//! let window = BandResolver::default();
//! let result = game.attempt_move((450.0_f64, 450.0_f64), &window);
//! assert!(matches!(result, MoveResult::Accepted { reply: Some(_), .. }));
//! assert_eq!(game.state(), GameState::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod outcome;
mod position;
mod resolver;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{Move, MoveError, MoveResult};
pub use board::{Board, BoardParseError};
pub use game::{Game, GameSettings};
pub use outcome::Outcome;
pub use position::Position;
pub use resolver::{BandResolver, CellResolver};
pub use search::{best_move, SearchError, SearchReport};
pub use types::{Cell, GameMode, GameState, Mark};
