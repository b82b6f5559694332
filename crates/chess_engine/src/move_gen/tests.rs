//! Test suite for move legality and generation
//!
//! # Test Organization
//!
//! - `test_guard_*` - own-color destination guard
//! - `test_pawn_*` - pushes, double pushes, diagonal captures
//! - `test_knight_*`, `test_king_*` - stepping pieces
//! - `test_sliding_*` - rook/bishop/queen geometry and path blocking
//! - `test_generation_*` - `all_moves` contents and ordering
//! - `test_scenario_*` - positions from real play

use super::*;
use crate::board::Board;

fn sq(row: u8, col: u8) -> Square {
    Square::at(row, col)
}

fn board(text: &str) -> Board {
    text.parse().expect("test board should parse")
}

// ============================================================================
// Own-color guard
// ============================================================================

#[test]
fn test_guard_never_lands_on_own_piece_initial_board() {
    //! Every piece on the starting board is refused every friendly square
    let board = Board::initial();

    for (from, piece) in board.pieces() {
        for (to, other) in board.pieces() {
            if other.color == piece.color {
                assert!(
                    !is_legal(&board, from, to),
                    "{:?} on {} must not land on friendly {}",
                    piece.kind,
                    from,
                    to
                );
            }
        }
    }
}

#[test]
fn test_guard_applies_to_every_kind() {
    //! Each piece kind is placed next to a friendly piece it could otherwise reach
    let targets = [
        (PieceKind::Pawn, sq(4, 4), sq(3, 4)),
        (PieceKind::Knight, sq(4, 4), sq(2, 3)),
        (PieceKind::Bishop, sq(4, 4), sq(3, 5)),
        (PieceKind::Rook, sq(4, 4), sq(4, 5)),
        (PieceKind::Queen, sq(4, 4), sq(3, 3)),
        (PieceKind::King, sq(4, 4), sq(5, 5)),
    ];

    for color in [Color::White, Color::Black] {
        for (kind, from, to) in targets {
            // Black pawns move down the board, so mirror the pawn target for Black
            let to = if kind == PieceKind::Pawn && color == Color::Black {
                sq(5, 4)
            } else {
                to
            };
            let board = Board::from_pieces(&[
                (from, Piece::new(kind, color)),
                (to, Piece::new(PieceKind::Pawn, color)),
            ]);
            assert!(!is_legal(&board, from, to), "{:?} {:?} captured its own piece", color, kind);

            let opponent_board = board.with_piece(to, Some(Piece::new(PieceKind::Pawn, color.opposite())));
            if kind != PieceKind::Pawn {
                assert!(
                    is_legal(&opponent_board, from, to),
                    "{:?} {:?} should capture an opposing piece",
                    color,
                    kind
                );
            }
        }
    }
}

#[test]
fn test_guard_rejects_null_move_and_empty_source() {
    let board = Board::initial();
    assert!(!is_legal(&board, sq(7, 4), sq(7, 4)), "King null move is not a move");
    assert!(!is_legal(&board, sq(4, 4), sq(3, 4)), "Empty source square has no moves");
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_single_forward_move() {
    //! White pawns move towards row 0, Black pawns towards row 7
    let board = Board::initial();
    assert!(is_legal(&board, sq(6, 2), sq(5, 2)));
    assert!(is_legal(&board, sq(1, 2), sq(2, 2)));
    assert!(!is_legal(&board, sq(6, 2), sq(7, 2)), "No backward pawn moves");
}

#[test]
fn test_pawn_double_move_from_home_row_only() {
    let board = board(
        "........
         ........
         ........
         ........
         ........
         ...P....
         ....P...
         ........",
    );
    assert!(is_legal(&board, sq(6, 4), sq(4, 4)), "Double push from the home row");
    assert!(!is_legal(&board, sq(5, 3), sq(3, 3)), "Double push only from the home row");
}

#[test]
fn test_pawn_double_move_needs_both_squares_empty() {
    let blocked_middle = board(
        "........
         ........
         ........
         ........
         ........
         ....n...
         ....P...
         ........",
    );
    assert!(!is_legal(&blocked_middle, sq(6, 4), sq(4, 4)));

    let blocked_target = board(
        "........
         ........
         ........
         ........
         ....n...
         ........
         ....P...
         ........",
    );
    assert!(!is_legal(&blocked_target, sq(6, 4), sq(4, 4)));
    assert!(is_legal(&blocked_target, sq(6, 4), sq(5, 4)));
}

#[test]
fn test_pawn_never_moves_straight_onto_occupied_square() {
    let board = board(
        "........
         ........
         ........
         ...p....
         ...P....
         ........
         ........
         ........",
    );
    assert!(!is_legal(&board, sq(4, 3), sq(3, 3)), "White pawn cannot capture straight ahead");
    assert!(!is_legal(&board, sq(3, 3), sq(4, 3)), "Black pawn cannot capture straight ahead");
}

#[test]
fn test_pawn_captures_diagonally_only_onto_opponent() {
    let board = board(
        "........
         ........
         ........
         ..p.....
         ...P....
         ........
         ........
         ........",
    );
    assert!(is_legal(&board, sq(4, 3), sq(3, 2)), "Diagonal capture of a black pawn");
    assert!(!is_legal(&board, sq(4, 3), sq(3, 4)), "Diagonal onto an empty square");
    assert!(is_legal(&board, sq(3, 2), sq(4, 3)), "Black captures diagonally downwards");
    assert!(!is_legal(&board, sq(4, 3), sq(5, 2)), "No backward captures");
}

#[test]
fn test_pawn_never_moves_diagonally_onto_empty_square_anywhere() {
    //! Sweeps a lone pawn of each color over the board
    for color in [Color::White, Color::Black] {
        for from in Square::all() {
            let board = Board::from_pieces(&[(from, Piece::new(PieceKind::Pawn, color))]);
            for to in Square::all() {
                if from.col() != to.col() {
                    assert!(!is_legal(&board, from, to), "{:?} pawn {} -> {}", color, from, to);
                }
            }
        }
    }
}

// ============================================================================
// Knight and King Tests
// ============================================================================

#[test]
fn test_knight_jumps_over_pieces() {
    //! On the starting board the knights are fully surrounded and still move
    let board = Board::initial();
    assert!(is_legal(&board, sq(7, 1), sq(5, 0)));
    assert!(is_legal(&board, sq(7, 1), sq(5, 2)));
    assert!(is_legal(&board, sq(0, 6), sq(2, 5)));
    assert!(!is_legal(&board, sq(7, 1), sq(5, 1)), "Knights only move in an L");
}

#[test]
fn test_knight_all_eight_jumps() {
    let board = Board::from_pieces(&[(sq(4, 4), Piece::white(PieceKind::Knight))]);
    assert_eq!(legal_destinations(&board, sq(4, 4)).len(), 8);
}

#[test]
fn test_king_single_steps() {
    let board = Board::from_pieces(&[(sq(4, 4), Piece::black(PieceKind::King))]);
    let destinations = legal_destinations(&board, sq(4, 4));
    assert_eq!(destinations.len(), 8);
    assert!(!is_legal(&board, sq(4, 4), sq(2, 4)), "No two-square king moves");
    assert!(!is_legal(&board, sq(4, 4), sq(4, 6)), "No castling");
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_sliding_blocked_by_intermediate_piece() {
    //! Blocked paths are illegal whether the destination is empty or an opponent
    let board = board(
        "........
         ........
         ........
         ........
         ........
         ....P...
         ......P.
         R..N..qB",
    );
    // Rook on (7,0): the knight on (7,3) blocks the row
    assert!(is_legal(&board, sq(7, 0), sq(7, 2)));
    assert!(!is_legal(&board, sq(7, 0), sq(7, 4)), "Empty destination behind a blocker");
    assert!(!is_legal(&board, sq(7, 0), sq(7, 6)), "Opponent behind a blocker");
    // Bishop on (7,7): the pawn on (6,6) blocks the long diagonal
    assert!(!is_legal(&board, sq(7, 7), sq(4, 4)));
    // Black queen on (7,6): the pawn on (5,4) blocks the diagonal, the knight the row
    assert!(is_legal(&board, sq(7, 6), sq(6, 5)));
    assert!(is_legal(&board, sq(7, 6), sq(5, 4)), "Capturing the blocker itself is fine");
    assert!(!is_legal(&board, sq(7, 6), sq(4, 3)), "Queen blocked by the pawn on (5,4)");
    assert!(!is_legal(&board, sq(7, 6), sq(7, 2)), "Queen blocked along the row by (7,3)");
}

#[test]
fn test_sliding_geometry() {
    let board = Board::from_pieces(&[
        (sq(4, 4), Piece::white(PieceKind::Rook)),
        (sq(2, 2), Piece::white(PieceKind::Bishop)),
        (sq(5, 1), Piece::white(PieceKind::Queen)),
    ]);
    assert!(is_legal(&board, sq(4, 4), sq(0, 4)));
    assert!(!is_legal(&board, sq(4, 4), sq(3, 3)), "Rooks do not move diagonally");
    assert!(is_legal(&board, sq(2, 2), sq(0, 0)));
    assert!(!is_legal(&board, sq(2, 2), sq(2, 5)), "Bishops do not move along rows");
    assert!(is_legal(&board, sq(5, 1), sq(5, 7)));
    assert!(is_legal(&board, sq(5, 1), sq(1, 5)));
    assert!(!is_legal(&board, sq(5, 1), sq(3, 2)), "Queens do not jump like knights");
}

#[test]
fn test_path_clear_helper() {
    let board = Board::initial();
    assert!(!is_path_clear(&board, sq(7, 0), sq(7, 4)));
    assert!(is_path_clear(&board, sq(5, 0), sq(2, 0)));
    assert!(is_path_clear(&board, sq(6, 0), sq(5, 1)), "Adjacent squares have no path");
}

// ============================================================================
// Generation Tests
// ============================================================================

#[test]
fn test_generation_initial_position() {
    //! 16 pawn moves plus 4 knight moves for each side
    let board = Board::initial();
    assert_eq!(all_moves(&board, Color::White).len(), 20);
    assert_eq!(all_moves(&board, Color::Black).len(), 20);
}

#[test]
fn test_generation_order_is_row_major() {
    let moves = all_moves(&Board::initial(), Color::Black);
    assert_eq!(moves[0], Move::new(sq(0, 1), sq(2, 0)), "Knight on (0,1) comes first");
    assert!(
        moves
            .windows(2)
            .all(|w| (w[0].from.index(), w[0].to.index()) < (w[1].from.index(), w[1].to.index())),
        "Moves must be sorted by source then destination"
    );
}

#[test]
fn test_generation_only_moves_own_pieces() {
    let board = Board::initial();
    for mv in all_moves(&board, Color::White) {
        assert_eq!(board.color_at(mv.from), Some(Color::White));
    }
}

#[test]
fn test_generation_empty_when_stuck() {
    //! A lone Black pawn blocked head-on has nowhere to go
    let board = board(
        "........
         ........
         ...p....
         ...P....
         ........
         ........
         ........
         ........",
    );
    assert!(all_moves(&board, Color::Black).is_empty());
    assert!(!has_any_move(&board, Color::Black));
    assert!(all_moves(&board, Color::White).is_empty());
    assert!(!has_any_move(&Board::empty(), Color::White));
    assert!(has_any_move(&Board::initial(), Color::White));
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_scenario_opening_double_push() {
    //! (6,4) -> (4,4) from the starting board, then apply it
    let board = Board::initial();
    let (from, to) = (sq(6, 4), sq(4, 4));

    assert!(is_legal(&board, from, to));
    let captured = board.piece_at(to);
    let after = board.clone_with_move(from, to);

    assert_eq!(captured, None, "Nothing is captured by the opening push");
    assert!(after.is_empty(from));
    assert_eq!(after.piece_at(to), Some(Piece::white(PieceKind::Pawn)));
}

#[test]
fn test_scenario_rook_blocked_on_back_rank() {
    //! The knight on (7,1) blocks the rook on (7,0) from reaching (7,4)
    let board = Board::initial();
    assert!(!is_legal(&board, sq(7, 0), sq(7, 4)));
    assert!(legal_destinations(&board, sq(7, 0)).is_empty());
}

#[test]
fn test_scenario_king_may_walk_into_attack() {
    //! No check detection: stepping next to an enemy queen is still legal
    let board = board(
        "........
         ........
         ........
         ...q....
         ........
         ....K...
         ........
         ........",
    );
    assert!(is_legal(&board, sq(5, 4), sq(4, 4)));
}
