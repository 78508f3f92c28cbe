/// Identifier of the player owning a piece. Valid identifiers are positive.
pub type PlayerId = u32;

/// Returned by board queries for empty or out-of-range cells. Never a valid
/// player identifier.
pub const NO_OWNER: PlayerId = 0;

pub const PLAYER_ONE: PlayerId = 1;
pub const PLAYER_TWO: PlayerId = 2;

/// Get the other canonical player. Anything that isn't player one maps back to
/// player one.
pub fn opponent(player: PlayerId) -> PlayerId {
    if player == PLAYER_ONE {
        PLAYER_TWO
    } else {
        PLAYER_ONE
    }
}

/// Get player name for display
pub fn player_name(player: PlayerId) -> String {
    format!("Player {player}")
}
