//! Board-level rule verification.
//!
//! Exercises initial setup, move generation, and move application through
//! the public API only, the way a rendering client would observe them.

use checkers_core::{Board, Color, Piece, Square};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

/// Every cell of the starting position, all 64 of them.
#[test]
fn test_initial_position_full_scan() {
    let board = Board::new();
    let mut occupied = 0;

    for square in Square::all() {
        match board.get(square) {
            Some(piece) => {
                occupied += 1;
                assert!(square.is_dark(), "{square} holds a piece on a light square");
                assert!(!piece.king, "{square} starts crowned");
                match piece.color {
                    Color::White => assert!(square.row() < 3, "White out of home rows at {square}"),
                    Color::Red => assert!(square.row() > 4, "Red out of home rows at {square}"),
                }
            }
            None => {
                if square.is_dark() {
                    assert!(
                        (3..=4).contains(&square.row()),
                        "dark square {square} unexpectedly empty"
                    );
                }
            }
        }
    }

    assert_eq!(occupied, 24);
}

/// A lone piece with open board in every direction.
#[test]
fn test_lone_piece_has_four_simple_moves() {
    let mut board = Board::empty();
    board.place(sq(2, 1), Piece::new(Color::White));

    let moves = board.valid_moves(sq(2, 1));

    assert_eq!(moves.len(), 4);
    for dest in [sq(1, 0), sq(1, 2), sq(3, 0), sq(3, 2)] {
        let captured = moves.get(&dest).expect("missing simple move");
        assert!(captured.is_empty());
    }
}

/// A full capture: (2,1) jumps (3,2) and lands on (4,3).
#[test]
fn test_capture_end_to_end() {
    let mut board = Board::empty();
    board.place(sq(2, 1), Piece::new(Color::White));
    board.place(sq(3, 2), Piece::new(Color::Red));

    let moves = board.valid_moves(sq(2, 1));
    let captured = moves.get(&sq(4, 3)).expect("jump not generated");
    assert_eq!(captured.as_slice(), &[sq(3, 2)]);

    let mut board = board;
    board.apply_move(sq(2, 1), sq(4, 3));
    board.remove(captured);

    assert_eq!(board.get(sq(2, 1)), None);
    assert_eq!(board.get(sq(3, 2)), None);
    assert_eq!(board.get(sq(4, 3)), Some(Piece::new(Color::White)));
    assert_eq!(board.count(Color::Red), 0);
}

/// Captures are single jumps: a second opponent beyond the landing square
/// does not extend the generated move.
#[test]
fn test_no_multi_jump_chains() {
    let mut board = Board::empty();
    board.place(sq(2, 1), Piece::new(Color::White));
    board.place(sq(3, 2), Piece::new(Color::Red));
    board.place(sq(5, 4), Piece::new(Color::Red));

    let moves = board.valid_moves(sq(2, 1));

    let captured = moves.get(&sq(4, 3)).expect("first jump missing");
    assert_eq!(captured.as_slice(), &[sq(3, 2)]);
    // No destination reaches past the first landing square.
    assert!(!moves.contains_key(&sq(6, 5)));
}

/// A capture being available does not suppress simple moves - captures are
/// never mandatory in this rule set.
#[test]
fn test_captures_are_not_mandatory() {
    let mut board = Board::empty();
    board.place(sq(2, 1), Piece::new(Color::White));
    board.place(sq(3, 2), Piece::new(Color::Red));

    let moves = board.valid_moves(sq(2, 1));

    assert!(moves.contains_key(&sq(4, 3)), "capture missing");
    assert!(moves.contains_key(&sq(1, 0)), "simple move suppressed");
    assert!(moves.contains_key(&sq(3, 0)), "simple move suppressed");
}

/// Kings generate exactly the moves a regular piece would.
#[test]
fn test_king_moves_match_regular_piece() {
    let mut man_board = Board::empty();
    man_board.place(sq(4, 3), Piece::new(Color::Red));
    man_board.place(sq(3, 2), Piece::new(Color::White));

    let mut king_board = Board::empty();
    king_board.place(sq(4, 3), Piece::king(Color::Red));
    king_board.place(sq(3, 2), Piece::new(Color::White));

    let man_moves = man_board.valid_moves(sq(4, 3));
    let king_moves = king_board.valid_moves(sq(4, 3));

    assert_eq!(man_moves, king_moves);
}

/// In the opening position only rows 2 and 5 have movable pieces, each with
/// steps into the empty middle rows.
#[test]
fn test_opening_mobility() {
    let board = Board::new();

    for (square, _) in board.pieces() {
        let moves = board.valid_moves(square);
        match square.row() {
            2 | 5 => assert!(!moves.is_empty(), "{square} should be mobile"),
            _ => assert!(moves.is_empty(), "{square} should be locked in"),
        }
    }
}

mod movegen_properties {
    use super::*;
    use proptest::prelude::*;

    /// Index into the 32 dark squares.
    fn dark_square(index: usize) -> Square {
        Square::all()
            .filter(|s| s.is_dark())
            .nth(index)
            .expect("dark square index out of range")
    }

    /// An arbitrary sparse position plus a focus piece.
    fn position() -> impl Strategy<Value = (Board, Square)> {
        (
            proptest::collection::hash_map(0usize..32, (any::<bool>(), any::<bool>()), 1..20),
            0usize..32,
        )
            .prop_map(|(placements, focus_index)| {
                let mut board = Board::empty();
                for (&index, &(is_red, king)) in &placements {
                    let color = if is_red { Color::Red } else { Color::White };
                    let piece = if king {
                        Piece::king(color)
                    } else {
                        Piece::new(color)
                    };
                    board.place(dark_square(index), piece);
                }

                let focus = dark_square(focus_index);
                if board.get(focus).is_none() {
                    board.place(focus, Piece::new(Color::Red));
                }
                (board, focus)
            })
    }

    proptest! {
        /// Destinations are always empty dark squares; captures always name
        /// an adjacent opposing piece with the landing two steps away.
        #[test]
        fn test_valid_moves_invariants((board, from) in position()) {
            let piece = board.get(from).unwrap();

            for (dest, captured) in board.valid_moves(from) {
                prop_assert!(dest.is_dark());
                prop_assert!(board.get(dest).is_none());

                let row_delta = dest.row() as i32 - from.row() as i32;
                let col_delta = dest.col() as i32 - from.col() as i32;
                prop_assert_eq!(row_delta.abs(), col_delta.abs());

                match captured.len() {
                    0 => prop_assert_eq!(row_delta.abs(), 1),
                    1 => {
                        prop_assert_eq!(row_delta.abs(), 2);
                        let jumped = captured[0];
                        let occupant = board.get(jumped);
                        prop_assert!(occupant.is_some());
                        prop_assert_ne!(occupant.unwrap().color, piece.color);
                        // The jumped square sits midway between from and dest.
                        prop_assert_eq!(jumped.row() as i32 * 2, from.row() as i32 + dest.row() as i32);
                        prop_assert_eq!(jumped.col() as i32 * 2, from.col() as i32 + dest.col() as i32);
                    }
                    n => prop_assert!(false, "unexpected capture count {}", n),
                }
            }
        }

        /// Applying any generated move keeps every piece on a dark square
        /// and removes exactly the captured pieces.
        #[test]
        fn test_apply_generated_move_preserves_occupancy((board, from) in position()) {
            let total_before = board.pieces().count();

            for (dest, captured) in board.valid_moves(from) {
                let mut applied = board.clone();
                applied.apply_move(from, dest);
                applied.remove(&captured);

                prop_assert!(applied.get(from).is_none());
                prop_assert!(applied.get(dest).is_some());
                prop_assert_eq!(applied.pieces().count(), total_before - captured.len());
                for (square, _) in applied.pieces() {
                    prop_assert!(square.is_dark());
                }
            }
        }
    }
}
