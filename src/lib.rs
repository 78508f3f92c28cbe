//! # Connect Four
//!
//! A two-player gravity grid game: pieces dropped into a column fall to the
//! lowest empty row, and four in a row horizontally, vertically, or diagonally
//! wins.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: cells, board, win detection, turn tracking
//! - [`ui`]: Terminal UI and a line-oriented text prompt
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
