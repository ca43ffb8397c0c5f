//! Error types for board operations.
//!
//! Rule violations are not errors: the engine reports them as
//! [`MoveOutcome::Illegal`](super::MoveOutcome::Illegal). The types here cover malformed
//! input and failed commits.

use std::fmt;

use super::types::{Color, Coordinate, IllegalMove, PieceKind};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece identity decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    /// The bit pattern names none of the twelve identities
    InvalidEncoding { bits: u8 },
    /// Not a FEN piece letter
    UnknownLetter { letter: char },
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::InvalidEncoding { bits } => {
                write!(f, "Invalid piece encoding {bits:#06b}")
            }
            IdentityError::UnknownLetter { letter } => {
                write!(f, "Invalid piece character '{letter}'")
            }
        }
    }
}

impl std::error::Error for IdentityError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Wrong number of ranks in position string
    InvalidRankCount { found: usize },
    /// A rank describes more or fewer than eight files
    InvalidFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN must describe 8 ranks, found {found}")
            }
            FenError::InvalidFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for coordinate move text ("e2e4", "e7e8q")
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for committing a move to a [`Board`](super::Board)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// Move text could not be parsed
    Parse(MoveParseError),
    /// No piece on the origin square
    EmptySquare { square: Coordinate },
    /// The piece on the origin square belongs to the side not on move
    NotYourTurn { square: Coordinate, to_move: Color },
    /// The rule engine rejected the move
    Illegal(IllegalMove),
    /// Promotion to this kind is not allowed, or the move does not promote
    InvalidPromotion { kind: PieceKind },
    /// The board no longer matches the validated move
    StaleMove { square: Coordinate },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Parse(e) => write!(f, "{e}"),
            PlayError::EmptySquare { square } => write!(f, "No piece on {square}"),
            PlayError::NotYourTurn { square, to_move } => {
                write!(f, "Piece on {square} cannot move, {to_move} to move")
            }
            PlayError::Illegal(mv) => write!(f, "{mv}"),
            PlayError::InvalidPromotion { kind } => {
                write!(f, "Cannot promote to {kind}")
            }
            PlayError::StaleMove { square } => {
                write!(f, "Board changed since the move from {square} was validated")
            }
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::Parse(e) => Some(e),
            PlayError::Illegal(mv) => Some(mv),
            _ => None,
        }
    }
}

impl From<MoveParseError> for PlayError {
    fn from(e: MoveParseError) -> Self {
        PlayError::Parse(e)
    }
}

impl From<IllegalMove> for PlayError {
    fn from(mv: IllegalMove) -> Self {
        PlayError::Illegal(mv)
    }
}
