//! Property tests for board mechanics over arbitrary dimensions and drop
//! sequences.

use connect_four::error::DropError;
use connect_four::game::{Board, PlayerId, NO_OWNER};
use proptest::prelude::*;

fn dimensions() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=10, 1usize..=10)
}

/// (column seed, player) pairs; the seed is reduced modulo the board width.
fn drops() -> impl Strategy<Value = Vec<(usize, PlayerId)>> {
    prop::collection::vec((0usize..64, 1u32..=4), 0..150)
}

fn board_after(width: usize, height: usize, drops: &[(usize, PlayerId)]) -> Board {
    let mut board = Board::with_dimensions(width, height).unwrap();
    for &(seed, player) in drops {
        let _ = board.drop_piece(seed % width, player);
    }
    board
}

proptest! {
    #[test]
    fn every_column_is_full_after_capacity_drops(
        (width, height) in dimensions(),
        drops in drops(),
    ) {
        let mut board = board_after(width, height, &drops);
        let mut successes = board.filled();
        for column in 0..width {
            while board.drop_piece(column, 1).is_ok() {
                successes += 1;
            }
        }

        prop_assert_eq!(successes, width * height);
        prop_assert!(board.is_full());
        for column in 0..width {
            prop_assert_eq!(
                board.drop_piece(column, 2),
                Err(DropError::ColumnFull { column })
            );
        }
    }

    #[test]
    fn drops_in_one_column_stack_upward(
        (width, height) in dimensions(),
        seed in 0usize..64,
        player in 1u32..=4,
    ) {
        let column = seed % width;
        let mut board = Board::with_dimensions(width, height).unwrap();
        for expected in 0..height {
            prop_assert_eq!(board.drop_piece(column, player), Ok(expected));
        }
        prop_assert_eq!(
            board.drop_piece(column, player),
            Err(DropError::ColumnFull { column })
        );
    }

    #[test]
    fn dropped_piece_is_owned_by_its_player(
        (width, height) in dimensions(),
        drops in drops(),
    ) {
        let mut board = Board::with_dimensions(width, height).unwrap();
        for (seed, player) in drops {
            let column = seed % width;
            if let Ok(row) = board.drop_piece(column, player) {
                let (c, r) = (column as isize, row as isize);
                prop_assert_eq!(board.owner_at(c, r), player);
                prop_assert!(board.is_owned_by(c, r, player));
            }
        }
    }

    #[test]
    fn failed_drop_leaves_board_unchanged(
        (width, height) in dimensions(),
        drops in drops(),
        column in 0usize..16,
    ) {
        let mut board = board_after(width, height, &drops);
        let before = board.clone();
        if board.drop_piece(column, 3).is_err() {
            prop_assert_eq!(board, before);
        }
    }

    #[test]
    fn reset_matches_fresh_board(
        (width, height) in dimensions(),
        drops in drops(),
    ) {
        let mut board = board_after(width, height, &drops);
        board.reset();
        prop_assert_eq!(&board, &Board::with_dimensions(width, height).unwrap());

        // Resetting an empty board changes nothing either
        board.reset();
        prop_assert_eq!(&board, &Board::with_dimensions(width, height).unwrap());
        for (row, column, _) in board.iter() {
            prop_assert_eq!(board.owner_at(column as isize, row as isize), NO_OWNER);
        }
    }

    #[test]
    fn out_of_bounds_queries_report_no_owner(
        (width, height) in dimensions(),
        drops in drops(),
        column in -20isize..40,
        row in -20isize..40,
        player in 0u32..=4,
    ) {
        let board = board_after(width, height, &drops);
        prop_assume!(
            column < 0 || row < 0 || column >= width as isize || row >= height as isize
        );
        prop_assert_eq!(board.owner_at(column, row), NO_OWNER);
        prop_assert!(!board.is_owned_by(column, row, player));
    }

    #[test]
    fn iteration_visits_every_cell_once(
        (width, height) in dimensions(),
        drops in drops(),
    ) {
        let board = board_after(width, height, &drops);
        let mut seen = vec![false; width * height];
        for (row, column, cell) in board.iter() {
            let index = row * width + column;
            prop_assert!(!seen[index]);
            seen[index] = true;
            prop_assert_eq!(cell.owner(), board.owner_at(column as isize, row as isize));
        }
        prop_assert!(seen.into_iter().all(|visited| visited));
    }

    #[test]
    fn winning_line_is_owned_and_consistent(
        (width, height) in dimensions(),
        drops in drops(),
        player in 1u32..=4,
    ) {
        let board = board_after(width, height, &drops);
        match board.winning_line(player) {
            Some(line) => {
                prop_assert!(board.has_won(player));
                for (column, row) in line {
                    prop_assert!(board.is_owned_by(column as isize, row as isize, player));
                }
            }
            None => prop_assert!(!board.has_won(player)),
        }
    }
}
