//! Application state and input handling.

use super::{input, ui};
use crate::{DisplayConfig, GameEngine, Position};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, instrument};

/// Terminal application state.
///
/// Owns one [`GameEngine`] and turns key presses and clicks into engine
/// calls. Everything drawn comes from the engine's snapshot.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    display: DisplayConfig,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            display,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell highlighted for keyboard play.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Display options.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the area of the last drawn frame, for mapping clicks.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.engine.place(self.cursor);
            }
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.engine.place(pos);
                }
            }
            other => self.cursor = input::move_cursor(self.cursor, other),
        }
    }

    /// Handles a left click at terminal coordinates.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(pos) = ui::cell_at(self.viewport, column, row) {
            self.cursor = pos;
            self.engine.place(pos);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
    }
}

/// Maps '1'..='9' to the cell it names.
fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Position::from_index(d as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameStatus, Player, Square};

    #[test]
    fn test_digit_keys_place() {
        let mut app = App::new(DisplayConfig::default());
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        let board = app.engine().board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_zero_key_ignored() {
        let mut app = App::new(DisplayConfig::default());
        app.handle_key(KeyCode::Char('0'));
        assert!(app.engine().history().is_empty());
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = App::new(DisplayConfig::default());
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().history(), &[Position::TopLeft]);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(DisplayConfig::default());
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        assert!(matches!(app.engine().status(), GameStatus::Won { winner: Player::X, .. }));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.engine(), &GameEngine::new());
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut app = App::new(DisplayConfig::default());
        app.set_viewport(Rect::new(0, 0, 80, 24));
        app.handle_click(0, 0);
        assert!(app.engine().history().is_empty());
    }
}
