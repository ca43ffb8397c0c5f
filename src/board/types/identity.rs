//! The twelve colored piece identities and their 4-bit encoding.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, PieceKind};
use crate::board::error::IdentityError;

/// A (kind, color) pair.
///
/// Encoded in four bits as `color_bit << 3 | kind_code`, which is how the database and
/// interchange layers store pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceIdentity {
    WhitePawn,
    WhiteRook,
    WhiteKnight,
    WhiteBishop,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackRook,
    BlackKnight,
    BlackBishop,
    BlackQueen,
    BlackKing,
}

impl PieceIdentity {
    pub const ALL: [PieceIdentity; 12] = [
        PieceIdentity::WhitePawn,
        PieceIdentity::WhiteRook,
        PieceIdentity::WhiteKnight,
        PieceIdentity::WhiteBishop,
        PieceIdentity::WhiteQueen,
        PieceIdentity::WhiteKing,
        PieceIdentity::BlackPawn,
        PieceIdentity::BlackRook,
        PieceIdentity::BlackKnight,
        PieceIdentity::BlackBishop,
        PieceIdentity::BlackQueen,
        PieceIdentity::BlackKing,
    ];

    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => PieceIdentity::WhitePawn,
            (Color::White, PieceKind::Rook) => PieceIdentity::WhiteRook,
            (Color::White, PieceKind::Knight) => PieceIdentity::WhiteKnight,
            (Color::White, PieceKind::Bishop) => PieceIdentity::WhiteBishop,
            (Color::White, PieceKind::Queen) => PieceIdentity::WhiteQueen,
            (Color::White, PieceKind::King) => PieceIdentity::WhiteKing,
            (Color::Black, PieceKind::Pawn) => PieceIdentity::BlackPawn,
            (Color::Black, PieceKind::Rook) => PieceIdentity::BlackRook,
            (Color::Black, PieceKind::Knight) => PieceIdentity::BlackKnight,
            (Color::Black, PieceKind::Bishop) => PieceIdentity::BlackBishop,
            (Color::Black, PieceKind::Queen) => PieceIdentity::BlackQueen,
            (Color::Black, PieceKind::King) => PieceIdentity::BlackKing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            PieceIdentity::WhitePawn | PieceIdentity::BlackPawn => PieceKind::Pawn,
            PieceIdentity::WhiteRook | PieceIdentity::BlackRook => PieceKind::Rook,
            PieceIdentity::WhiteKnight | PieceIdentity::BlackKnight => PieceKind::Knight,
            PieceIdentity::WhiteBishop | PieceIdentity::BlackBishop => PieceKind::Bishop,
            PieceIdentity::WhiteQueen | PieceIdentity::BlackQueen => PieceKind::Queen,
            PieceIdentity::WhiteKing | PieceIdentity::BlackKing => PieceKind::King,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            PieceIdentity::WhitePawn
            | PieceIdentity::WhiteRook
            | PieceIdentity::WhiteKnight
            | PieceIdentity::WhiteBishop
            | PieceIdentity::WhiteQueen
            | PieceIdentity::WhiteKing => Color::White,
            _ => Color::Black,
        }
    }

    /// The 4-bit pattern: color bit in bit 3, kind code in bits 0-2.
    #[inline]
    #[must_use]
    pub const fn encode(self) -> u8 {
        (self.color().bit() << 3) | self.kind().code()
    }

    /// Decode a 4-bit pattern produced by [`encode`](Self::encode).
    ///
    /// Patterns whose kind bits name no piece (0 and 7), and anything wider than four
    /// bits, are rejected.
    pub const fn decode(bits: u8) -> Result<Self, IdentityError> {
        if bits > 0x0F {
            return Err(IdentityError::InvalidEncoding { bits });
        }
        let color = if bits & 0x08 == 0 {
            Color::White
        } else {
            Color::Black
        };
        match PieceKind::from_code(bits & 0x07) {
            Some(kind) => Ok(PieceIdentity::new(kind, color)),
            None => Err(IdentityError::InvalidEncoding { bits }),
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    #[must_use]
    pub const fn fen_char(self) -> char {
        let c = self.kind().to_char();
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a FEN letter.
    pub fn from_fen_char(c: char) -> Result<Self, IdentityError> {
        let kind = PieceKind::from_char(c).ok_or(IdentityError::UnknownLetter { letter: c })?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(PieceIdentity::new(kind, color))
    }

    /// Name of the image resource the client draws this piece with.
    #[must_use]
    pub const fn resource_name(self) -> &'static str {
        match self {
            PieceIdentity::WhitePawn => "white_pawn",
            PieceIdentity::WhiteRook => "white_rook",
            PieceIdentity::WhiteKnight => "white_knight",
            PieceIdentity::WhiteBishop => "white_bishop",
            PieceIdentity::WhiteQueen => "white_queen",
            PieceIdentity::WhiteKing => "white_king",
            PieceIdentity::BlackPawn => "black_pawn",
            PieceIdentity::BlackRook => "black_rook",
            PieceIdentity::BlackKnight => "black_knight",
            PieceIdentity::BlackBishop => "black_bishop",
            PieceIdentity::BlackQueen => "black_queen",
            PieceIdentity::BlackKing => "black_king",
        }
    }
}

impl fmt::Display for PieceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color(), self.kind())
    }
}

impl TryFrom<u8> for PieceIdentity {
    type Error = IdentityError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        PieceIdentity::decode(bits)
    }
}

impl From<PieceIdentity> for u8 {
    fn from(identity: PieceIdentity) -> u8 {
        identity.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        for identity in PieceIdentity::ALL {
            assert_eq!(PieceIdentity::decode(identity.encode()), Ok(identity));
        }
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(PieceIdentity::WhiteKnight.resource_name(), "white_knight");
        assert_eq!(PieceIdentity::BlackQueen.resource_name(), "black_queen");
        for identity in PieceIdentity::ALL {
            let name = identity.resource_name();
            assert!(name.starts_with(&identity.color().to_string()), "{name}");
            assert!(name.ends_with(identity.kind().name()), "{name}");
        }
    }

    #[test]
    fn test_encoding_layout() {
        assert_eq!(PieceIdentity::WhitePawn.encode(), 0b0001);
        assert_eq!(PieceIdentity::WhiteKing.encode(), 0b0110);
        assert_eq!(PieceIdentity::BlackPawn.encode(), 0b1001);
        assert_eq!(PieceIdentity::BlackKing.encode(), 0b1110);
    }

    #[test]
    fn test_unused_patterns_rejected() {
        let valid: Vec<u8> = PieceIdentity::ALL.iter().map(|id| id.encode()).collect();
        let rejected: Vec<u8> = (0u8..=255)
            .filter(|bits| PieceIdentity::decode(*bits).is_err())
            .collect();
        assert_eq!(valid.len() + rejected.len(), 256);
        for bits in [0b0000, 0b0111, 0b1000, 0b1111, 0x10, 0xFF] {
            assert_eq!(
                PieceIdentity::try_from(bits),
                Err(IdentityError::InvalidEncoding { bits })
            );
        }
    }

    #[test]
    fn test_kind_and_color_recovered() {
        for color in Color::BOTH {
            for kind in PieceKind::ALL {
                let identity = PieceIdentity::new(kind, color);
                assert_eq!(identity.kind(), kind);
                assert_eq!(identity.color(), color);
            }
        }
    }

    #[test]
    fn test_fen_letters() {
        assert_eq!(PieceIdentity::WhiteKnight.fen_char(), 'N');
        assert_eq!(PieceIdentity::BlackQueen.fen_char(), 'q');
        assert_eq!(
            PieceIdentity::from_fen_char('k'),
            Ok(PieceIdentity::BlackKing)
        );
        assert_eq!(
            PieceIdentity::from_fen_char('x'),
            Err(IdentityError::UnknownLetter { letter: 'x' })
        );
    }
}
