//! Core chess types.
//!
//! This module contains the value types shared by the rule engine and the board:
//! - `Coordinate` - a validated (file, rank) square
//! - `PieceKind`, `Color` and `PieceIdentity` - what a piece is
//! - `MoveOutcome` and friends - what the rule engine answers
//! - `CastleSide` - castling geometry
//! - `Bitboard` - occupancy sets

mod bitboard;
mod castling;
mod identity;
mod outcome;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastleSide;
pub use identity::PieceIdentity;
pub use outcome::{
    EnPassantEffect, IllegalMove, InvalidMoveCause, LegalMove, MoveCategory, MoveOutcome,
};
pub use piece::{Color, PieceKind};
pub use square::Coordinate;
