use super::player::{opponent, PlayerId, PLAYER_ONE};

/// Whose move it is and how many moves have been made.
///
/// Only two players are supported; switching toggles between the canonical
/// players one and two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTracker {
    active_player: PlayerId,
    move_count: usize,
}

impl TurnTracker {
    pub fn new() -> Self {
        TurnTracker {
            active_player: PLAYER_ONE,
            move_count: 0,
        }
    }

    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    pub fn switch_player(&mut self) {
        self.active_player = opponent(self.active_player);
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Count a move. Call once per successful drop and never for a rejected
    /// one, otherwise `move_count` stops matching the number of filled cells.
    pub fn record_move(&mut self) {
        self.move_count += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new()
    }
}
