//! Thread-safe access to a single game.
//!
//! Validation only reads the board, so many threads can ask about moves at once while a
//! committing thread takes the write lock.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::{
    validate_move, Board, BoardQuery, Coordinate, LegalMove, MoveOutcome, PieceKind, PlayError,
};

/// A board shared between threads.
///
/// Cloning is cheap and every clone sees the same position.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<RwLock<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(RwLock::new(board)))
    }

    /// Validate moving the piece on `from` to `to`. `None` if `from` is empty.
    #[must_use]
    pub fn validate(&self, from: Coordinate, to: Coordinate) -> Option<MoveOutcome> {
        let board = self.0.read();
        board
            .piece_at(from)
            .map(|piece| validate_move(piece, to, &*board))
    }

    #[must_use]
    pub fn legal_destinations(&self, square: Coordinate) -> Vec<Coordinate> {
        self.0.read().legal_destinations(square)
    }

    /// Validate and commit under the write lock, see [`Board::play`].
    pub fn play(
        &self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    ) -> Result<LegalMove, PlayError> {
        self.0.write().play(from, to, promotion)
    }

    pub fn play_move_text(&self, text: &str) -> Result<LegalMove, PlayError> {
        self.0.write().play_move_text(text)
    }

    /// A copy of the current position.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.read().clone()
    }

    /// Run `f` against the board under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        let board = self.0.read();
        f(&*board)
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}
