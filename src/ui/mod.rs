//! Presentation: a ratatui terminal app with keyboard and mouse input, and a
//! plain line-oriented prompt. Both only drive [`crate::game::GameState`].

mod app;
pub mod board_view;
mod game_view;
pub mod prompt;

pub use app::App;
pub use prompt::Prompt;
