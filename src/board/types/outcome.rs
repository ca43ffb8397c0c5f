//! Move outcomes: what the rule engine answers for a candidate move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::identity::PieceIdentity;
use super::piece::PieceKind;
use super::square::Coordinate;

/// What kind of move a legal outcome describes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveCategory {
    Normal,
    Capture,
    CaptureEnPassant,
    Promote,
    PromoteAndCapture,
    CastleShort,
    CastleLong,
}

impl MoveCategory {
    /// Returns true if this move removes an enemy piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveCategory::Capture | MoveCategory::CaptureEnPassant | MoveCategory::PromoteAndCapture
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveCategory::Promote | MoveCategory::PromoteAndCapture)
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveCategory::CastleShort | MoveCategory::CastleLong)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MoveCategory::Normal => "normal",
            MoveCategory::Capture => "capture",
            MoveCategory::CaptureEnPassant => "capture-en-passant",
            MoveCategory::Promote => "promote",
            MoveCategory::PromoteAndCapture => "promote-and-capture",
            MoveCategory::CastleShort => "castle-short",
            MoveCategory::CastleLong => "castle-long",
        }
    }
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a move was rejected. Exactly one cause accompanies every illegal outcome.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InvalidMoveCause {
    SameColorCapture,
    CannotCaptureKing,
    InvalidRookMove,
    InvalidBishopMove,
    InvalidKnightMove,
    InvalidQueenMove,
    InvalidKingMove,
    InvalidPawnMove,
}

impl InvalidMoveCause {
    pub const ALL: [InvalidMoveCause; 8] = [
        InvalidMoveCause::SameColorCapture,
        InvalidMoveCause::CannotCaptureKing,
        InvalidMoveCause::InvalidRookMove,
        InvalidMoveCause::InvalidBishopMove,
        InvalidMoveCause::InvalidKnightMove,
        InvalidMoveCause::InvalidQueenMove,
        InvalidMoveCause::InvalidKingMove,
        InvalidMoveCause::InvalidPawnMove,
    ];

    /// The geometry rejection for a given piece kind.
    #[must_use]
    pub const fn invalid_move_for(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => InvalidMoveCause::InvalidPawnMove,
            PieceKind::Rook => InvalidMoveCause::InvalidRookMove,
            PieceKind::Knight => InvalidMoveCause::InvalidKnightMove,
            PieceKind::Bishop => InvalidMoveCause::InvalidBishopMove,
            PieceKind::Queen => InvalidMoveCause::InvalidQueenMove,
            PieceKind::King => InvalidMoveCause::InvalidKingMove,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            InvalidMoveCause::SameColorCapture => "same-color-capture",
            InvalidMoveCause::CannotCaptureKing => "cannot-capture-king",
            InvalidMoveCause::InvalidRookMove => "invalid-rook-move",
            InvalidMoveCause::InvalidBishopMove => "invalid-bishop-move",
            InvalidMoveCause::InvalidKnightMove => "invalid-knight-move",
            InvalidMoveCause::InvalidQueenMove => "invalid-queen-move",
            InvalidMoveCause::InvalidKingMove => "invalid-king-move",
            InvalidMoveCause::InvalidPawnMove => "invalid-pawn-move",
        }
    }
}

impl fmt::Display for InvalidMoveCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Change to the moving pawn's en-passant vulnerability, applied when the move is
/// committed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnPassantEffect {
    #[default]
    Unchanged,
    /// Two-square advance: the pawn may be taken en passant on the next turn.
    MarkVulnerable,
    /// One-square advance.
    ClearVulnerable,
}

/// A fully described legal move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegalMove {
    pub piece: PieceIdentity,
    pub from: Coordinate,
    pub to: Coordinate,
    pub category: MoveCategory,
    /// Kind of the piece removed by this move, if any
    pub captured: Option<PieceKind>,
    pub en_passant: EnPassantEffect,
}

impl LegalMove {
    pub(crate) const fn new(
        piece: PieceIdentity,
        from: Coordinate,
        to: Coordinate,
        category: MoveCategory,
    ) -> Self {
        LegalMove {
            piece,
            from,
            to,
            category,
            captured: None,
            en_passant: EnPassantEffect::Unchanged,
        }
    }

    #[must_use]
    pub(crate) fn capturing(mut self, kind: PieceKind) -> Self {
        self.captured = Some(kind);
        self
    }

    #[must_use]
    pub(crate) fn with_en_passant(mut self, effect: EnPassantEffect) -> Self {
        self.en_passant = effect;
        self
    }

    /// Square of the pawn removed by an en-passant capture.
    #[must_use]
    pub fn en_passant_victim(&self) -> Option<Coordinate> {
        if self.category == MoveCategory::CaptureEnPassant {
            Coordinate::new(self.to.file(), self.from.rank())
        } else {
            None
        }
    }
}

impl fmt::Display for LegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{} {}", self.piece, self.from, self.to, self.category)?;
        if let Some(kind) = self.captured {
            write!(f, " x{kind}")?;
        }
        Ok(())
    }
}

/// A rejected move and the reason for it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IllegalMove {
    pub cause: InvalidMoveCause,
    pub piece: PieceIdentity,
    pub from: Coordinate,
    pub to: Coordinate,
}

impl IllegalMove {
    pub(crate) const fn new(
        cause: InvalidMoveCause,
        piece: PieceIdentity,
        from: Coordinate,
        to: Coordinate,
    ) -> Self {
        IllegalMove {
            cause,
            piece,
            from,
            to,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_file(&self) -> u8 {
        self.from.file()
    }

    #[inline]
    #[must_use]
    pub const fn from_rank(&self) -> u8 {
        self.from.rank()
    }

    #[inline]
    #[must_use]
    pub const fn to_file(&self) -> u8 {
        self.to.file()
    }

    #[inline]
    #[must_use]
    pub const fn to_rank(&self) -> u8 {
        self.to.rank()
    }
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "illegal move {}{} by {}: {}",
            self.from, self.to, self.piece, self.cause
        )
    }
}

impl std::error::Error for IllegalMove {}

/// Result of validating one candidate move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    Legal(LegalMove),
    Illegal(IllegalMove),
}

impl MoveOutcome {
    #[inline]
    #[must_use]
    pub const fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Legal(_))
    }

    #[must_use]
    pub const fn legal(&self) -> Option<&LegalMove> {
        match self {
            MoveOutcome::Legal(mv) => Some(mv),
            MoveOutcome::Illegal(_) => None,
        }
    }

    #[must_use]
    pub const fn illegal(&self) -> Option<&IllegalMove> {
        match self {
            MoveOutcome::Legal(_) => None,
            MoveOutcome::Illegal(mv) => Some(mv),
        }
    }

    /// Category of a legal move
    #[must_use]
    pub const fn category(&self) -> Option<MoveCategory> {
        match self {
            MoveOutcome::Legal(mv) => Some(mv.category),
            MoveOutcome::Illegal(_) => None,
        }
    }

    /// Cause of an illegal move
    #[must_use]
    pub const fn cause(&self) -> Option<InvalidMoveCause> {
        match self {
            MoveOutcome::Legal(_) => None,
            MoveOutcome::Illegal(mv) => Some(mv.cause),
        }
    }

    /// Convert into a `Result`, treating the illegal variant as the error.
    pub fn into_result(self) -> Result<LegalMove, IllegalMove> {
        match self {
            MoveOutcome::Legal(mv) => Ok(mv),
            MoveOutcome::Illegal(mv) => Err(mv),
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Legal(mv) => write!(f, "legal {mv}"),
            MoveOutcome::Illegal(mv) => write!(f, "{mv}"),
        }
    }
}

impl From<LegalMove> for MoveOutcome {
    fn from(mv: LegalMove) -> Self {
        MoveOutcome::Legal(mv)
    }
}

impl From<IllegalMove> for MoveOutcome {
    fn from(mv: IllegalMove) -> Self {
        MoveOutcome::Illegal(mv)
    }
}
