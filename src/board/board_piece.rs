//! A physical piece standing on (or removed from) a board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Color, Coordinate, PieceIdentity, PieceKind};

/// One piece instance.
///
/// The piece references its square by coordinate; the [`Board`](super::Board) owns the
/// grid and keeps the two in agreement. `square` is `None` once the piece has been
/// captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardPiece {
    identity: PieceIdentity,
    square: Option<Coordinate>,
    has_moved: bool,
    en_passant_vulnerable: bool,
}

impl BoardPiece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(identity: PieceIdentity, square: Coordinate) -> Self {
        BoardPiece {
            identity,
            square: Some(square),
            has_moved: false,
            en_passant_vulnerable: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn identity(&self) -> PieceIdentity {
        self.identity
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.identity.kind()
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.identity.color()
    }

    /// Current square, or `None` if the piece is off the board.
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Option<Coordinate> {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// True only for a pawn whose last move was a two-square advance and whose owner's
    /// opponent has not yet replied.
    #[inline]
    #[must_use]
    pub const fn is_en_passant_vulnerable(&self) -> bool {
        self.en_passant_vulnerable
    }

    /// Returns the piece with its moved flag replaced
    #[must_use]
    pub const fn moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    pub(crate) fn set_square(&mut self, square: Option<Coordinate>) {
        self.square = square;
    }

    pub(crate) fn set_moved(&mut self, has_moved: bool) {
        self.has_moved = has_moved;
    }

    /// Only pawns carry the flag; the call is ignored for other kinds.
    pub(crate) fn set_en_passant_vulnerable(&mut self, vulnerable: bool) {
        self.en_passant_vulnerable = vulnerable && self.kind() == PieceKind::Pawn;
    }
}
