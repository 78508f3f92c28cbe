use crate::error::{BoardError, DropError};

use super::{Board, PlayerId, TurnTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Drop(#[from] DropError),

    #[error("the game is already over")]
    GameOver,
}

/// Where a successful move landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub player: PlayerId,
}

/// One game session: the board, the turn tracker, and the decided outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turns: TurnTracker,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game on an empty board
    pub fn new(mut board: Board) -> Self {
        board.reset();
        GameState {
            board,
            turns: TurnTracker::new(),
            outcome: None,
        }
    }

    pub fn with_dimensions(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::new(Board::with_dimensions(width, height)?))
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> &TurnTracker {
        &self.turns
    }

    /// Player whose move it is. After a win this stays on the winner.
    pub fn active_player(&self) -> PlayerId {
        self.turns.active_player()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop a piece for the active player.
    ///
    /// A rejected move changes nothing: no piece, no move counted, same player
    /// to move.
    pub fn play(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.turns.active_player();
        let row = self.board.drop_piece(column, player)?;
        self.turns.record_move();

        if self.board.has_won(player) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.turns.move_count() == self.board.capacity() {
            self.outcome = Some(GameOutcome::Tie);
        } else {
            self.turns.switch_player();
        }

        Ok(Placement {
            column,
            row,
            player,
        })
    }

    /// Clear the board and start over with player one. Dimensions are kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turns.reset();
        self.outcome = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::new())
    }
}
