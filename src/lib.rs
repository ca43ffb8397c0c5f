//! Move-legality rules for a chess database.
//!
//! The [`board`] module holds the rule engine ([`board::validate_move`]) together with the
//! board it queries. [`sync`] wraps a board for use across threads and [`cli`] is the
//! line-oriented front end used by the `chess_rules` binary.

#[macro_use]
mod log_macros;

pub mod board;
pub mod cli;
pub mod sync;

pub use board::{
    validate_move, Board, BoardPiece, BoardQuery, Color, Coordinate, IllegalMove,
    InvalidMoveCause, LegalMove, MoveCategory, MoveOutcome, PieceIdentity, PieceKind,
};
pub use sync::SharedBoard;
