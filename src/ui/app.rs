use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::SearchEngine;
use crate::config::GameConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player};

pub struct App {
    config: GameConfig,
    game_state: GameState,
    engine: SearchEngine,
    human: Player,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let human = if config.human_first {
            Player::Red
        } else {
            Player::Yellow
        };
        App {
            game_state: GameState::new(config.rows, config.cols),
            engine: SearchEngine::new(config.search_depth),
            human,
            selected_column: config.cols / 2,
            should_quit: false,
            message: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The engine answers synchronously whenever it is to move,
            // including the very first ply when the human plays second.
            if !self.game_state.is_terminal()
                && self.game_state.current_player() == self.human.other()
            {
                self.engine_move();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
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
                if self.selected_column + 1 < self.config.cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::new(self.config.rows, self.config.cols);
                self.selected_column = self.config.cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece in the selected column for the human side
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => self.announce_outcome(),
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Let the engine counter the human's last move
    fn engine_move(&mut self) {
        let Some(col) = self
            .engine
            .choose_counter_move(self.game_state.board(), self.human)
        else {
            return; // board is full; the state machine has declared the draw
        };

        match self.game_state.apply_move_mut(col) {
            Ok(()) => self.announce_outcome(),
            Err(err) => {
                self.message = Some(format!("Engine move failed: {err:?}"));
            }
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) if player == self.human => {
                    format!("{} wins — congratulations!", player.name())
                }
                GameOutcome::Winner(player) => format!("{} (engine) wins!", player.name()),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.human,
            self.engine.depth(),
        );
    }
}
