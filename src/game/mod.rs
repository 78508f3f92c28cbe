//! Core Connect Four game logic: cells, the gravity board with win detection,
//! the turn tracker, and a game session tying them together.

mod board;
mod cell;
mod player;
mod state;
mod turns;

pub use board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};
pub use cell::{Cell, Piece};
pub use player::{opponent, player_name, PlayerId, NO_OWNER, PLAYER_ONE, PLAYER_TWO};
pub use state::{GameOutcome, GameState, MoveError, Placement};
pub use turns::TurnTracker;
