//! Line-oriented front-end: prints the board as text and reads 1-based column
//! numbers, one per line.

use std::io::{self, BufRead, Write};

use crate::error::DropError;
use crate::game::{player_name, GameOutcome, GameState, MoveError};

pub struct Prompt<R, W> {
    game_state: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(game_state: GameState, input: R, output: W) -> Self {
        Prompt {
            game_state,
            input,
            output,
        }
    }

    /// Play games until the players decline a rematch or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        let board = self.game_state.board();
        writeln!(
            self.output,
            "Connect Four: {} columns x {} rows. Get four in a row to win.",
            board.width(),
            board.height()
        )?;

        loop {
            let Some(outcome) = self.play_game()? else {
                return Ok(());
            };

            write!(self.output, "\n{}", self.game_state.board())?;
            match outcome {
                GameOutcome::Winner(player) => {
                    writeln!(self.output, "{} wins!", player_name(player))?
                }
                GameOutcome::Tie => writeln!(self.output, "Tie game!")?,
            }
            log::info!(
                "game finished after {} moves: {outcome:?}",
                self.game_state.turns().move_count()
            );

            write!(self.output, "Play again? [y/N]: ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if matches!(answer.as_str(), "y" | "yes") => {
                    self.game_state.reset();
                    log::info!("new game started");
                }
                _ => return Ok(()),
            }
        }
    }

    /// Run one game to completion. `None` when input ends first.
    fn play_game(&mut self) -> io::Result<Option<GameOutcome>> {
        loop {
            let player = self.game_state.active_player();
            write!(
                self.output,
                "\n{}{}'s turn! Enter a column (1-{}): ",
                self.game_state.board(),
                player_name(player),
                self.game_state.board().width()
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let Ok(number) = line.parse::<usize>() else {
                writeln!(self.output, "Please enter a valid column number.")?;
                continue;
            };
            // Column 0 is as invalid as one past the edge
            let column = number.checked_sub(1).unwrap_or(usize::MAX);

            match self.game_state.play(column) {
                Ok(placement) => {
                    log::debug!(
                        "player {} dropped into column {} (row {})",
                        placement.player,
                        placement.column,
                        placement.row
                    );
                    if let Some(outcome) = self.game_state.outcome() {
                        return Ok(Some(outcome));
                    }
                }
                Err(MoveError::Drop(DropError::InvalidColumn { .. })) => {
                    log::debug!("move rejected: column {number} is off the board");
                    writeln!(self.output, "Please enter a valid column on the game board.")?;
                }
                Err(MoveError::Drop(DropError::ColumnFull { .. })) => {
                    log::debug!("move rejected: column {number} is full");
                    writeln!(self.output, "That column is already full!")?;
                }
                Err(MoveError::GameOver) => return Ok(self.game_state.outcome()),
            }
        }
    }

    /// Read one trimmed, lowercased line. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}
