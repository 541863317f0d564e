use crate::config::UiConfig;
use crate::game::{GameEngine, GameOutcome, Position, COLS};
use crate::error::MoveError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

pub struct App {
    engine: GameEngine,
    config: UiConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    last_drop: Option<(Position, Instant)>,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        App {
            engine: GameEngine::new(),
            selected_column: config.start_column.min(COLS - 1),
            config,
            should_quit: false,
            message: None,
            last_drop: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.poll_interval_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                _ => {}
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
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.config.start_column.min(COLS - 1);
                self.last_drop = None;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Forward a column selection to the engine
    fn drop_piece(&mut self, column: usize) {
        match self.engine.drop_piece(column) {
            Ok(drop) => {
                self.last_drop = Some((drop.position, Instant::now()));
                if let Some(outcome) = drop.outcome {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => format!("{} wins!", player.name()),
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(err) => {
                debug!(column, %err, "ignored column selection");
                self.message = Some(match err {
                    MoveError::ColumnFull { column } => format!("Column {} is full!", column + 1),
                    MoveError::InvalidColumn { column } => {
                        format!("Column {} does not exist!", column + 1)
                    }
                    MoveError::GameOver => "Game over! Press 'r' to restart.".to_string(),
                });
            }
        }
    }

    /// Most recent drop, while its cue is still lit
    fn active_cue(&self) -> Option<Position> {
        let (pos, at) = self.last_drop?;
        (at.elapsed() < Duration::from_millis(self.config.drop_cue_ms)).then_some(pos)
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.engine.state(),
            self.selected_column,
            self.active_cue(),
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
