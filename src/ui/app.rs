use crate::config::UiConfig;
use crate::error::GameError;
use crate::game::GameState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    ui: UiConfig,
}

impl App {
    pub fn new(game_state: GameState, ui: UiConfig) -> Self {
        let selected_column = game_state.width() / 2; // Start in middle
        App {
            game_state,
            selected_column,
            should_quit: false,
            message: None,
            ui,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            if let Err(err) = terminal.draw(|f| self.render(f)) {
                return Err(err.into());
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.ui.tick_rate_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game_state.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.game_state.width() {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.game_state.width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.apply_move(self.selected_column) {
            Ok(result) => {
                self.message = super::outcome_message(result.outcome, &self.ui);
            }
            Err(GameError::ColumnFull(column)) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(GameError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                debug!(%err, "move rejected");
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.ui,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::initial(), UiConfig::default())
    }
}
