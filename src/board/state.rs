use std::fmt;

use super::board_piece::BoardPiece;
use super::lines::between;
use super::query::BoardQuery;
use super::types::{Bitboard, CastleSide, Color, Coordinate, PieceIdentity, PieceKind};

/// A chess position: the grid of pieces, the side to move and the move counters.
///
/// The board owns every piece on it. Pieces taken off the board are kept, detached, in
/// [`captured`](Board::captured).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<BoardPiece>; 64],
    pub(crate) occupied: Bitboard,
    pub(crate) to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) captured: Vec<BoardPiece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Back rank from the a-file to the h-file
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let sq = Coordinate::from_index(color.back_rank() as usize * 8 + file);
                board.place(PieceIdentity::new(kind, color), sq);
                let pawn_sq = Coordinate::from_index(color.pawn_start_rank() as usize * 8 + file);
                board.place(PieceIdentity::new(PieceKind::Pawn, color), pawn_sq);
            }
        }
        board
    }

    /// A board with no pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            occupied: Bitboard::EMPTY,
            to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            captured: Vec::new(),
        }
    }

    /// Put a fresh piece on `square`, replacing whatever stood there.
    ///
    /// The piece is unmoved, except a pawn off its start rank which can no longer
    /// double-step. Returns the replaced piece, detached.
    pub fn place(&mut self, identity: PieceIdentity, square: Coordinate) -> Option<BoardPiece> {
        let off_start = identity.kind() == PieceKind::Pawn
            && square.rank() != identity.color().pawn_start_rank();
        self.put(BoardPiece::new(identity, square).moved(off_start), square)
    }

    /// Take the piece off `square`, returning it detached.
    pub fn remove(&mut self, square: Coordinate) -> Option<BoardPiece> {
        let mut piece = self.squares[square.index()].take()?;
        self.occupied.remove(square);
        piece.set_square(None);
        Some(piece)
    }

    /// Put `piece` on `square`, keeping its flags.
    pub(crate) fn put(&mut self, mut piece: BoardPiece, square: Coordinate) -> Option<BoardPiece> {
        let previous = self.remove(square);
        piece.set_square(Some(square));
        self.squares[square.index()] = Some(piece);
        self.occupied.insert(square);
        previous
    }

    pub(crate) fn piece_at_mut(&mut self, square: Coordinate) -> Option<&mut BoardPiece> {
        self.squares[square.index()].as_mut()
    }

    /// All pieces on the board, in square order (a1 first).
    pub fn pieces(&self) -> impl Iterator<Item = &BoardPiece> + '_ {
        self.occupied
            .iter()
            .filter_map(move |sq| self.squares[sq.index()].as_ref())
    }

    /// Pieces captured so far, oldest first. Their square is `None`.
    #[must_use]
    pub fn captured(&self) -> &[BoardPiece] {
        &self.captured
    }

    /// The square of `color`'s king, if it has one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        let king = PieceIdentity::new(PieceKind::King, color);
        self.pieces()
            .find(|p| p.identity() == king)
            .and_then(BoardPiece::square)
    }

    #[must_use]
    pub fn occupancy(&self) -> Bitboard {
        self.occupied
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn set_color_to_move(&mut self, color: Color) {
        self.to_move = color;
    }

    /// Legal destinations of the piece on `square`, regardless of whose turn it is.
    #[must_use]
    pub fn legal_destinations(&self, square: Coordinate) -> Vec<Coordinate> {
        match self.piece_at(square) {
            Some(piece) => super::rules::legal_destinations(piece, self),
            None => Vec::new(),
        }
    }

    fn can_castle(&self, king: &BoardPiece, side: CastleSide) -> bool {
        if king.kind() != PieceKind::King || king.has_moved() {
            return false;
        }
        let color = king.color();
        let home = CastleSide::king_home(color);
        if king.square() != Some(home) {
            return false;
        }
        let rook_sq = side.rook_home(color);
        let rook_ready = self.piece_at(rook_sq).is_some_and(|rook| {
            rook.identity() == PieceIdentity::new(PieceKind::Rook, color) && !rook.has_moved()
        });
        rook_ready && !self.has_piece_between(home, rook_sq)
    }
}

impl BoardQuery for Board {
    #[inline]
    fn piece_at(&self, square: Coordinate) -> Option<&BoardPiece> {
        self.squares[square.index()].as_ref()
    }

    #[inline]
    fn color_to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    fn has_piece_between(&self, from: Coordinate, to: Coordinate) -> bool {
        !between(from, to).and(self.occupied).is_empty()
    }

    fn can_castle_short(&self, king: &BoardPiece) -> bool {
        self.can_castle(king, CastleSide::Short)
    }

    fn can_castle_long(&self, king: &BoardPiece) -> bool {
        self.can_castle(king, CastleSide::Long)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let sq = Coordinate::from_index(rank as usize * 8 + file as usize);
                let c = self
                    .piece_at(sq)
                    .map_or('.', |piece| piece.identity().fen_char());
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move", self.to_move)
    }
}
