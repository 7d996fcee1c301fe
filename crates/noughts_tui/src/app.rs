//! Application state for the terminal front end.

use crate::input::{self, Command};
use crossterm::event::KeyCode;
use noughts::{BandResolver, Game, GameMode, GameSettings, GameState, MoveResult, Position};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

/// Terminal app: one game, a cursor and a status line.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    status: String,
    board_area: Rect,
    should_quit: bool,
}

impl App {
    /// Starts the first game; an AI playing X opens immediately.
    #[instrument]
    pub fn new(settings: GameSettings) -> Self {
        let mut app = Self {
            game: Game::new(settings),
            cursor: Position::Center,
            status: String::new(),
            board_area: Rect::default(),
            should_quit: false,
        };
        app.open();
        app
    }

    /// The game being shown.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was last drawn, for mouse hit-testing.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(command) = input::command_for(self.cursor, key) else {
            return;
        };
        debug!(?command, "Key command");

        match command {
            Command::Cursor(position) => self.cursor = position,
            Command::PlayCursor => {
                let result = self.game.play(self.cursor.row(), self.cursor.col());
                self.report(result);
            }
            Command::Play(position) => {
                self.cursor = position;
                let result = self.game.play(position.row(), position.col());
                self.report(result);
            }
            Command::NewGame => self.restart(self.game.mode()),
            Command::ToggleMode => self.restart(self.game.mode().toggled()),
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a left click at terminal `(column, row)`.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let area = self.board_area;
        let resolver = BandResolver::new(f64::from(area.width), f64::from(area.height))
            .with_origin(f64::from(area.x), f64::from(area.y));
        let result = self.game.attempt_move((column, row), &resolver);
        if let MoveResult::Accepted { placed, .. } = result {
            self.cursor = placed.position;
        }
        self.report(result);
    }

    fn restart(&mut self, mode: GameMode) {
        self.game.new_game(mode);
        self.cursor = Position::Center;
        self.open();
    }

    /// Lets the AI open if it plays X, then refreshes the status line.
    fn open(&mut self) {
        if let Some(opening) = self.game.play_ai_turn() {
            debug!(mov = %opening, "AI opened");
        }
        self.status = self.turn_status();
    }

    fn report(&mut self, result: MoveResult) {
        self.status = match result {
            MoveResult::Accepted { .. } => self.turn_status(),
            MoveResult::OffBoard => "Click inside the board".to_string(),
            MoveResult::Rejected(err) => err.to_string(),
        };
    }

    fn turn_status(&self) -> String {
        if let Some(outcome) = self.game.outcome() {
            return format!("{}! Press n for a new game, q to quit", outcome);
        }
        debug_assert_eq!(self.game.state(), GameState::InProgress);
        match self.game.mode() {
            GameMode::SinglePlayer => format!("Your move ({})", self.game.turn()),
            GameMode::TwoPlayer => format!("Player {} to move", self.game.turn()),
        }
    }
}
