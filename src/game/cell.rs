use crate::error::OccupiedError;

use super::player::{PlayerId, NO_OWNER};

/// A placed piece. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    owner: PlayerId,
}

impl Piece {
    pub fn new(owner: PlayerId) -> Self {
        debug_assert!(owner != NO_OWNER, "player identifiers must be positive");
        Piece { owner }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }
}

/// A single board location holding at most one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    piece: Option<Piece>,
}

impl Cell {
    pub fn new() -> Self {
        Cell { piece: None }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Place a piece owned by `player`. Fails without touching the cell if it
    /// is already occupied.
    pub fn add_piece(&mut self, player: PlayerId) -> Result<(), OccupiedError> {
        match self.piece {
            Some(existing) => Err(OccupiedError {
                owner: existing.owner(),
            }),
            None => {
                self.piece = Some(Piece::new(player));
                Ok(())
            }
        }
    }

    /// Owning player, or [`NO_OWNER`] when empty.
    pub fn owner(&self) -> PlayerId {
        self.piece.map_or(NO_OWNER, |piece| piece.owner())
    }

    pub fn matches(&self, player: PlayerId) -> bool {
        self.piece.is_some_and(|piece| piece.owner() == player)
    }

    pub(crate) fn clear(&mut self) {
        self.piece = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new();
        assert!(cell.is_empty());
        assert_eq!(cell.owner(), NO_OWNER);
        assert_eq!(cell.piece(), None);
    }

    #[test]
    fn test_add_piece() {
        let mut cell = Cell::new();
        cell.add_piece(2).unwrap();
        assert!(!cell.is_empty());
        assert_eq!(cell.owner(), 2);
        assert_eq!(cell.piece(), Some(Piece::new(2)));
    }

    #[test]
    fn test_add_piece_to_occupied_cell_fails() {
        let mut cell = Cell::new();
        cell.add_piece(1).unwrap();

        let err = cell.add_piece(2).unwrap_err();
        assert_eq!(err, OccupiedError { owner: 1 });
        // Original piece untouched
        assert_eq!(cell.owner(), 1);
    }

    #[test]
    fn test_matches() {
        let mut cell = Cell::new();
        assert!(!cell.matches(1));
        assert!(!cell.matches(NO_OWNER));

        cell.add_piece(1).unwrap();
        assert!(cell.matches(1));
        assert!(!cell.matches(2));
    }

    #[test]
    fn test_matches_supports_more_than_two_players() {
        let mut cell = Cell::new();
        cell.add_piece(7).unwrap();
        assert!(cell.matches(7));
        assert_eq!(cell.owner(), 7);
    }

    #[test]
    fn test_clear() {
        let mut cell = Cell::new();
        cell.add_piece(1).unwrap();
        cell.clear();
        assert!(cell.is_empty());
        assert_eq!(cell, Cell::new());

        cell.add_piece(2).unwrap();
        assert_eq!(cell.owner(), 2);
    }
}
