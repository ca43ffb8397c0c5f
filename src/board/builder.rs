//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings, including
//! the per-piece flags FEN can only approximate.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Coordinate, PieceIdentity};
//!
//! let e1 = Coordinate::new(4, 0).unwrap();
//! let e8 = Coordinate::new(4, 7).unwrap();
//! let a2 = Coordinate::new(0, 1).unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, PieceIdentity::WhiteKing)
//!     .piece(e8, PieceIdentity::BlackKing)
//!     .piece(a2, PieceIdentity::WhitePawn)
//!     .moved(e1)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::state::BACK_RANK;
use super::{Board, BoardPiece, Color, Coordinate, PieceIdentity, PieceKind};

#[derive(Clone, Copy, Debug)]
struct Placement {
    square: Coordinate,
    identity: PieceIdentity,
    moved: bool,
    en_passant_vulnerable: bool,
}

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<Placement>,
    side_to_move: Color,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::BOTH {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let back = Coordinate::from_index(color.back_rank() as usize * 8 + file);
                let front = Coordinate::from_index(color.pawn_start_rank() as usize * 8 + file);
                builder = builder
                    .piece(back, PieceIdentity::new(kind, color))
                    .piece(front, PieceIdentity::new(PieceKind::Pawn, color));
            }
        }
        builder
    }

    /// Place a piece on the board, replacing anything already there.
    ///
    /// A pawn placed off its start rank is marked as moved.
    #[must_use]
    pub fn piece(mut self, square: Coordinate, identity: PieceIdentity) -> Self {
        self.pieces.retain(|p| p.square != square);
        let off_start = identity.kind() == PieceKind::Pawn
            && square.rank() != identity.color().pawn_start_rank();
        self.pieces.push(Placement {
            square,
            identity,
            moved: off_start,
            en_passant_vulnerable: false,
        });
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Coordinate) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Mark the piece on `square` as having moved. No-op on an empty square.
    #[must_use]
    pub fn moved(mut self, square: Coordinate) -> Self {
        if let Some(p) = self.pieces.iter_mut().find(|p| p.square == square) {
            p.moved = true;
        }
        self
    }

    /// Mark the pawn on `square` as capturable en passant. Ignored for other pieces.
    #[must_use]
    pub fn en_passant_vulnerable(mut self, square: Coordinate) -> Self {
        if let Some(p) = self
            .pieces
            .iter_mut()
            .find(|p| p.square == square && p.identity.kind() == PieceKind::Pawn)
        {
            p.moved = true;
            p.en_passant_vulnerable = true;
        }
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for p in self.pieces {
            let mut piece = BoardPiece::new(p.identity, p.square).moved(p.moved);
            if p.en_passant_vulnerable {
                piece.set_en_passant_vulnerable(true);
            }
            board.put(piece, p.square);
        }

        board.to_move = self.side_to_move;
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number;
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardQuery;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
        assert_eq!(built.to_fen(), Board::new().to_fen());
    }

    #[test]
    fn test_kings_only() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), PieceIdentity::WhiteKing)
            .piece(sq("e8"), PieceIdentity::BlackKing)
            .build();

        assert!(board.piece_at(sq("e1")).is_some());
        assert!(board.piece_at(sq("e8")).is_some());
        assert!(board.piece_at(sq("a1")).is_none());
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn test_pawn_off_start_rank_is_moved() {
        let board = BoardBuilder::new()
            .piece(sq("a2"), PieceIdentity::WhitePawn)
            .piece(sq("b4"), PieceIdentity::WhitePawn)
            .piece(sq("c7"), PieceIdentity::BlackPawn)
            .build();

        assert!(!board.piece_at(sq("a2")).unwrap().has_moved());
        assert!(board.piece_at(sq("b4")).unwrap().has_moved());
        assert!(!board.piece_at(sq("c7")).unwrap().has_moved());
    }

    #[test]
    fn test_moved_and_en_passant_flags() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), PieceIdentity::WhiteKing)
            .piece(sq("d5"), PieceIdentity::BlackPawn)
            .piece(sq("h1"), PieceIdentity::WhiteKnight)
            .moved(sq("e1"))
            .en_passant_vulnerable(sq("d5"))
            .en_passant_vulnerable(sq("h1"))
            .build();

        assert!(board.piece_at(sq("e1")).unwrap().has_moved());
        assert!(board.piece_at(sq("d5")).unwrap().is_en_passant_vulnerable());
        assert!(!board.piece_at(sq("h1")).unwrap().is_en_passant_vulnerable());
    }

    #[test]
    fn test_side_to_move_and_counters() {
        let board = BoardBuilder::new()
            .side_to_move(Color::Black)
            .halfmove_clock(7)
            .fullmove_number(30)
            .build();

        assert_eq!(board.color_to_move(), Color::Black);
        assert_eq!(board.halfmove_clock(), 7);
        assert_eq!(board.fullmove_number(), 30);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position().clear(sq("a1")).build();

        assert!(board.piece_at(sq("a1")).is_none());
        assert!(board.piece_at(sq("b1")).is_some());
    }
}
