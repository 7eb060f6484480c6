use crate::error::GameError;
use crate::game::{GameEngine, GameStatus, MoveError, PutOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    poll_interval: Duration,
}

impl App {
    pub fn new(size: usize, poll_interval: Duration) -> Result<Self, GameError> {
        Ok(App {
            engine: GameEngine::new(size)?,
            selected_column: middle_column(size),
            should_quit: false,
            message: None,
            poll_interval,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Selected column, 0-indexed
    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.size() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        let size = self.engine.size();
        match GameEngine::new(size) {
            Ok(engine) => {
                self.engine = engine;
                self.selected_column = middle_column(size);
                self.message = Some("New game started!".to_string());
                tracing::info!(size, "new game started");
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Drop a token in the selected column
    fn drop_token(&mut self) {
        let column = self.selected_column + 1;
        let player = self.engine.current_player();

        match self.engine.put(column) {
            Ok(PutOutcome::Ok) => {}
            Ok(PutOutcome::Win) => {
                tracing::info!(column, ?player, "game won");
                self.message = Some(format!("{} wins!", player.name()));
            }
            Ok(PutOutcome::Draw) => {
                tracing::info!(column, "game drawn");
                self.message = Some("It's a draw!".to_string());
            }
            Err(MoveError::ColumnFull) if self.engine.status() == GameStatus::Draw => {
                self.message = Some("Board is full! Press 'r' to restart.".to_string());
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            self.message.as_deref(),
        );
    }
}

fn middle_column(size: usize) -> usize {
    size.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(size: usize) -> App {
        App::new(size, Duration::from_millis(100)).unwrap()
    }

    #[test]
    fn test_starts_in_middle() {
        assert_eq!(app(4).selected_column(), 1);
        assert_eq!(app(7).selected_column(), 3);
        assert_eq!(app(1).selected_column(), 0);
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = app(4);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_enter_drops_token() {
        let mut app = app(4);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().moves().collect::<Vec<_>>(), vec![2]);
        assert_eq!(app.engine().current_player(), Player::Two);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = app(4);
        for _ in 0..4 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.engine().move_count(), 4);
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = app(2);
        // 2x2: player one takes the bottom row
        press(&mut app, KeyCode::Enter); // P1 col 1
        press(&mut app, KeyCode::Enter); // P2 col 1
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter); // P1 col 2
        assert_eq!(app.message(), Some("Player 1 wins!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.message(), Some("New game started!"));
        assert_eq!(app.engine().move_count(), 0);
        assert_eq!(app.selected_column(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app(4);
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
