//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `validation.rs` - Checks shared by every piece (own pieces, kings, detached pieces)
//! - `sliders.rs` - Rook, bishop and queen geometry and blocking
//! - `knights.rs` - Knight jumps
//! - `kings.rs` - King steps and castling
//! - `pawns.rs` - Pushes, captures, en passant and promotion
//! - `proptest.rs` - Property-based tests

mod knights;
mod validation;

use crate::board::{Board, BoardPiece, BoardQuery, Coordinate, PieceIdentity};

pub(super) fn sq(s: &str) -> Coordinate {
    s.parse().unwrap()
}

/// The piece on `square`, copied out so the board can still be borrowed.
pub(super) fn piece(board: &Board, square: &str) -> BoardPiece {
    *board.piece_at(sq(square)).unwrap()
}

/// An empty board with the given pieces placed fresh, White to move.
pub(super) fn board_with(pieces: &[(PieceIdentity, &str)]) -> Board {
    let mut board = Board::empty();
    for &(identity, square) in pieces {
        board.place(identity, sq(square));
    }
    board
}
