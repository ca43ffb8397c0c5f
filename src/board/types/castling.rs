//! Castling geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Coordinate;

/// File the king starts on
pub(crate) const KING_HOME_FILE: u8 = 4;

/// Which side of the board the king castles towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// King side (O-O)
    Short,
    /// Queen side (O-O-O)
    Long,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    /// File offset the king travels: +2 short, -2 long
    #[inline]
    #[must_use]
    pub const fn king_step(self) -> i8 {
        match self {
            CastleSide::Short => 2,
            CastleSide::Long => -2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_from_file(self) -> u8 {
        match self {
            CastleSide::Short => 7,
            CastleSide::Long => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_to_file(self) -> u8 {
        match self {
            CastleSide::Short => 5,
            CastleSide::Long => 3,
        }
    }

    /// The king's starting square for `color`.
    #[must_use]
    pub fn king_home(color: Color) -> Coordinate {
        Coordinate::from_index(color.back_rank() as usize * 8 + KING_HOME_FILE as usize)
    }

    /// Corner square of the rook taking part in this castle.
    #[must_use]
    pub fn rook_home(self, color: Color) -> Coordinate {
        Coordinate::from_index(color.back_rank() as usize * 8 + self.rook_from_file() as usize)
    }

    /// Square the rook lands on.
    #[must_use]
    pub fn rook_destination(self, color: Color) -> Coordinate {
        Coordinate::from_index(color.back_rank() as usize * 8 + self.rook_to_file() as usize)
    }

    /// FEN castling letter for `color` (K, Q, k, q).
    #[must_use]
    pub const fn fen_char(self, color: Color) -> char {
        match (color, self) {
            (Color::White, CastleSide::Short) => 'K',
            (Color::White, CastleSide::Long) => 'Q',
            (Color::Black, CastleSide::Short) => 'k',
            (Color::Black, CastleSide::Long) => 'q',
        }
    }
}
