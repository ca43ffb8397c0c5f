//! Chess board representation and move legality.
//!
//! [`validate_move`] decides whether a piece may move to a square on any [`BoardQuery`]
//! implementation and classifies the move. [`Board`] is the concrete position: it answers
//! the queries, commits legal moves and reads/writes FEN.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, MoveCategory};
//!
//! let mut board = Board::new();
//! let mv = board.play_move_text("e2e4").unwrap();
//! assert_eq!(mv.category, MoveCategory::Normal);
//! println!("{board}");
//! ```

mod board_piece;
mod builder;
mod error;
mod fen;
mod lines;
mod make_move;
pub mod prelude;
mod query;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use board_piece::BoardPiece;
pub use builder::BoardBuilder;
pub use error::{FenError, IdentityError, MoveParseError, PlayError, SquareError};
pub use query::BoardQuery;
pub use rules::{legal_destinations, validate_move};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastleSide, Color, Coordinate, EnPassantEffect, IllegalMove,
    InvalidMoveCause, LegalMove, MoveCategory, MoveOutcome, PieceIdentity, PieceKind,
};

pub(crate) use fen::parse_move_text;
