//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! let e2: Coordinate = "e2".parse().unwrap();
//! assert!(board.piece_at(e2).is_some());
//! ```

pub use super::{
    validate_move, Board, BoardBuilder, BoardPiece, BoardQuery, Color, Coordinate, FenError,
    IllegalMove, InvalidMoveCause, LegalMove, MoveCategory, MoveOutcome, MoveParseError,
    PieceIdentity, PieceKind, PlayError,
};
