//! Application state and logic.

use crossterm::event::KeyCode;
use noughts_engine::{Game, MoveResult, Position, RoundStatus};
use tracing::debug;

use crate::input;

/// Main application state: the engine plus presentation-only extras
/// (cursor, status message).
pub struct App {
    game: Game,
    cursor: Position,
    status: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            status: "Player X's turn. Press 1-9, or move with arrows and press Enter.".to_string(),
        }
    }

    /// The engine, for rendering.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The winning line to highlight, if the round has been won.
    pub fn highlight(&self) -> Option<[Position; 3]> {
        match self.game.state().status() {
            RoundStatus::Won(win) => Some(win.cells()),
            _ => None,
        }
    }

    /// Plays at the given board index and updates the status line.
    pub fn play(&mut self, index: usize) {
        debug!(index, "Making move");

        self.status = match self.game.apply_move(index) {
            MoveResult::Continue(player) => format!("Player {player}'s turn"),
            MoveResult::Won(win) => {
                format!(
                    "Player {} wins! Press 'r' for a new round or 'q' to quit.",
                    win.player()
                )
            }
            MoveResult::Draw => {
                "It's a draw! Press 'r' for a new round or 'q' to quit.".to_string()
            }
            MoveResult::Rejected(reason) => format!("Ignored: {reason}."),
        };
    }

    /// Plays at the cursor position.
    pub fn play_cursor(&mut self) {
        self.play(self.cursor.to_index());
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Starts a fresh round. Scores are preserved by the engine.
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.game.reset_board();
        self.status =
            "Player X's turn. Press 1-9, or move with arrows and press Enter.".to_string();
    }
}
