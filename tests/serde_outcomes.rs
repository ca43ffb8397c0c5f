#![cfg(feature = "serde")]

use chess_rules::board::{validate_move, Board, BoardQuery, MoveOutcome};

#[test]
fn outcomes_survive_json() {
    let board = Board::new();
    let knight = board.piece_at("g1".parse().unwrap()).unwrap();

    for to in ["f3", "g3", "e2"] {
        let outcome = validate_move(knight, to.parse().unwrap(), &board);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: MoveOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome, "{json}");
    }
}

#[test]
fn board_piece_serializes_flags() {
    let mut board = Board::new();
    board.play_move_text("e2e4").unwrap();
    let pawn = board.piece_at("e4".parse().unwrap()).unwrap();

    let value = serde_json::to_value(pawn).unwrap();
    assert_eq!(value["has_moved"], true);
    assert_eq!(value["en_passant_vulnerable"], true);
    assert_eq!(value["identity"], "WhitePawn");
}
