use super::{board_with, piece, sq};
use crate::board::{
    validate_move, Board, Coordinate, InvalidMoveCause, MoveCategory, PieceIdentity, PieceKind,
};

#[test]
fn test_knight_jumps_over_pieces() {
    let board = Board::new();
    let knight = piece(&board, "g1");
    assert_eq!(
        validate_move(&knight, sq("f3"), &board).category(),
        Some(MoveCategory::Normal)
    );
    assert_eq!(
        validate_move(&knight, sq("h3"), &board).category(),
        Some(MoveCategory::Normal)
    );
    assert_eq!(
        validate_move(&knight, sq("e2"), &board).cause(),
        Some(InvalidMoveCause::SameColorCapture)
    );
}

#[test]
fn test_knight_shapes() {
    let board = board_with(&[(PieceIdentity::BlackKnight, "d4")]);
    let knight = piece(&board, "d4");
    let legal = ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"];
    for to in Coordinate::all().filter(|&to| to != sq("d4")) {
        let outcome = validate_move(&knight, to, &board);
        if legal.contains(&to.to_string().as_str()) {
            assert!(outcome.is_legal(), "d4{to}");
        } else {
            assert_eq!(
                outcome.cause(),
                Some(InvalidMoveCause::InvalidKnightMove),
                "d4{to}"
            );
        }
    }
}

#[test]
fn test_knight_capture() {
    let board = board_with(&[
        (PieceIdentity::WhiteKnight, "e5"),
        (PieceIdentity::BlackQueen, "f7"),
    ]);
    let outcome = validate_move(&piece(&board, "e5"), sq("f7"), &board);
    assert_eq!(outcome.category(), Some(MoveCategory::Capture));
    assert_eq!(outcome.legal().unwrap().captured, Some(PieceKind::Queen));
}
