//! The read-only view of a board that the rule engine needs.

use super::board_piece::BoardPiece;
use super::types::{Color, Coordinate};

/// Queries the rule engine makes against a board.
///
/// [`Board`](super::Board) is the implementation used throughout this crate; other
/// position stores (a database replayer, a UI model) can implement it to reuse
/// [`validate_move`](super::validate_move) directly. All answers within one validation
/// must describe the same position.
pub trait BoardQuery {
    /// The piece standing on `square`, if any.
    fn piece_at(&self, square: Coordinate) -> Option<&BoardPiece>;

    /// Side to move.
    fn color_to_move(&self) -> Color;

    /// True if any square strictly between `from` and `to` is occupied.
    ///
    /// Only meaningful for squares sharing a rank, file or diagonal; for any other pair
    /// the answer is `false`.
    fn has_piece_between(&self, from: Coordinate, to: Coordinate) -> bool;

    /// Whether `king` may castle king side: king and rook unmoved, rook in its corner and
    /// the squares between them empty.
    fn can_castle_short(&self, king: &BoardPiece) -> bool;

    /// Queen-side counterpart of [`can_castle_short`](Self::can_castle_short).
    fn can_castle_long(&self, king: &BoardPiece) -> bool;
}
