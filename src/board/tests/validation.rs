//! Checks that run before any piece geometry.

use super::{board_with, piece, sq};
use crate::board::{
    legal_destinations, validate_move, Board, BoardPiece, BoardQuery, InvalidMoveCause,
    MoveCategory, PieceIdentity, PieceKind,
};

#[test]
fn test_own_piece_on_destination() {
    let board = Board::new();
    let outcome = validate_move(&piece(&board, "d1"), sq("d2"), &board);
    assert_eq!(outcome.cause(), Some(InvalidMoveCause::SameColorCapture));

    // Even when the geometry is wrong as well
    let outcome = validate_move(&piece(&board, "b1"), sq("h2"), &board);
    assert_eq!(outcome.cause(), Some(InvalidMoveCause::SameColorCapture));
}

#[test]
fn test_enemy_king_cannot_be_captured() {
    let board = board_with(&[
        (PieceIdentity::WhiteRook, "a1"),
        (PieceIdentity::WhiteKnight, "c3"),
        (PieceIdentity::WhitePawn, "f7"),
        (PieceIdentity::BlackKing, "e8"),
    ]);

    for from in ["a1", "c3", "f7"] {
        let outcome = validate_move(&piece(&board, from), sq("e8"), &board);
        assert_eq!(
            outcome.cause(),
            Some(InvalidMoveCause::CannotCaptureKing),
            "from {from}"
        );
    }
}

#[test]
fn test_king_capture_reported_for_geometric_attack() {
    // The knight does attack e8 from d6; the king still cannot be taken.
    let board = board_with(&[
        (PieceIdentity::WhiteKnight, "d6"),
        (PieceIdentity::BlackKing, "e8"),
    ]);
    let outcome = validate_move(&piece(&board, "d6"), sq("e8"), &board);
    let illegal = outcome.illegal().unwrap();
    assert_eq!(illegal.cause, InvalidMoveCause::CannotCaptureKing);
    assert_eq!(illegal.piece, PieceIdentity::WhiteKnight);
    assert_eq!((illegal.from, illegal.to), (sq("d6"), sq("e8")));
}

#[test]
fn test_detached_piece_gets_kind_cause() {
    let board = Board::new();
    let mut detached = BoardPiece::new(PieceIdentity::BlackBishop, sq("c8"));
    detached.set_square(None);

    let illegal = validate_move(&detached, sq("e6"), &board)
        .into_result()
        .unwrap_err();
    assert_eq!(illegal.cause, InvalidMoveCause::InvalidBishopMove);
    assert_eq!(illegal.from, sq("e6"));
    assert_eq!(illegal.to, sq("e6"));
}

#[test]
fn test_validation_ignores_turn() {
    let board = Board::new();
    assert_eq!(board.color_to_move(), crate::board::Color::White);
    let outcome = validate_move(&piece(&board, "e7"), sq("e5"), &board);
    assert_eq!(outcome.category(), Some(MoveCategory::Normal));
}

#[test]
fn test_validation_does_not_touch_the_piece() {
    let board = Board::new();
    let pawn = piece(&board, "e2");
    let before = board.clone();
    let outcome = validate_move(&pawn, sq("e4"), &board);
    assert!(outcome.is_legal());
    assert!(!pawn.has_moved());
    assert!(!pawn.is_en_passant_vulnerable());
    assert_eq!(board, before);
}

#[test]
fn test_starting_position_destinations() {
    let board = Board::new();
    let mut total = 0;
    for p in board.pieces() {
        let targets = legal_destinations(p, &board);
        if p.color() == board.color_to_move() {
            total += targets.len();
        }
        if p.kind() == PieceKind::Pawn {
            assert_eq!(targets.len(), 2, "{} on {:?}", p.identity(), p.square());
        }
    }
    // 16 pawn moves and 4 knight moves
    assert_eq!(total, 20);
    assert_eq!(
        board.legal_destinations(sq("b8")),
        vec![sq("a6"), sq("c6")]
    );
    assert!(board.legal_destinations(sq("e4")).is_empty());
}
