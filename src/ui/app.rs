use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};

use crate::config::UiConfig;
use crate::error::DropError;
use crate::game::{player_name, GameOutcome, GameState, MoveError};

use super::board_view;

pub struct App {
    game_state: GameState,
    config: UiConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// When the current game ended, for the replay delay
    finished_at: Option<Instant>,
    /// Where the board was last drawn, for mouse clicks
    board_area: Rect,
}

impl App {
    pub fn new(game_state: GameState, config: UiConfig) -> Self {
        let selected_column = game_state.board().width() / 2;
        App {
            game_state,
            config,
            selected_column,
            should_quit: false,
            message: None,
            finished_at: None,
            board_area: Rect::default(),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        log::info!(
            "starting {}x{} game",
            self.game_state.board().width(),
            self.game_state.board().height()
        );

        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Whether the post-game pause is still running
    fn input_locked(&self) -> bool {
        self.finished_at.is_some_and(|finished| {
            finished.elapsed() < Duration::from_millis(self.config.replay_delay_ms)
        })
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }
        if self.input_locked() {
            return;
        }

        match key.code {
            KeyCode::Left => {
                self.message = None;
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                self.message = None;
                if self.selected_column + 1 < self.game_state.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = usize::from(c as u8 - b'1');
                if column < self.game_state.board().width() {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.input_locked() {
            return;
        }
        let board = self.game_state.board();
        let Some(column) = board_view::column_at(board, self.board_area, mouse.column, mouse.row)
        else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved => self.selected_column = column,
            MouseEventKind::Down(MouseButton::Left) => {
                self.selected_column = column;
                self.drop_piece(column);
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state.reset();
        self.selected_column = self.game_state.board().width() / 2;
        self.finished_at = None;
        self.message = Some("New game started!".to_string());
        log::info!("new game started");
    }

    fn drop_piece(&mut self, column: usize) {
        if self.game_state.is_over() {
            self.message = Some("Game over! Press 'r' to play again.".to_string());
            return;
        }

        match self.game_state.play(column) {
            Ok(placement) => {
                log::debug!(
                    "player {} dropped into column {} (row {})",
                    placement.player,
                    placement.column,
                    placement.row
                );
                self.message = None;
                if let Some(outcome) = self.game_state.outcome() {
                    self.finish(outcome);
                }
            }
            Err(err) => {
                log::debug!("move rejected: {err}");
                self.message = Some(match err {
                    MoveError::Drop(DropError::ColumnFull { .. }) => {
                        "That column is already full!".to_string()
                    }
                    MoveError::Drop(DropError::InvalidColumn { width, .. }) => {
                        format!("Please choose a column between 1 and {width}.")
                    }
                    MoveError::GameOver => "Game is over!".to_string(),
                });
            }
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        let announcement = match outcome {
            GameOutcome::Winner(player) => format!("{} wins!", player_name(player)),
            GameOutcome::Tie => "Tie game!".to_string(),
        };
        log::info!(
            "{announcement} after {} moves",
            self.game_state.turns().move_count()
        );
        self.message = Some(format!("{announcement} Press 'r' to play again."));
        self.finished_at = Some(Instant::now());
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        let layout = super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
        );
        self.board_area = board_view::board_rect(self.game_state.board(), layout);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::default(), UiConfig::default())
    }
}
