use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{
    Board, BoardPiece, BoardQuery, CastleSide, Color, Coordinate, PieceIdentity, PieceKind,
};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// FEN has no per-piece history, so the flags are derived: pawns off their start rank
    /// count as moved, kings and rooks count as unmoved only where the castling field
    /// grants a matching right, and the pawn behind the en-passant target is vulnerable.
    /// The halfmove clock and fullmove number are optional.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let identity =
                    PieceIdentity::from_fen_char(c).map_err(|_| FenError::InvalidPiece { char: c })?;
                let square = Coordinate::new(file as u8, rank).ok_or(FenError::InvalidFileCount {
                    rank: rank_idx,
                    files: file + 1,
                })?;
                board.place(identity, square);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        // Parse side to move
        board.to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let mut rights: Vec<(Color, CastleSide)> = Vec::new();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                let right = match c {
                    'K' => (Color::White, CastleSide::Short),
                    'Q' => (Color::White, CastleSide::Long),
                    'k' => (Color::Black, CastleSide::Short),
                    'q' => (Color::Black, CastleSide::Long),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                rights.push(right);
            }
        }
        board.derive_moved_flags(&rights);

        // Parse en passant target
        if parts[3] != "-" {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target: Coordinate = parts[3].parse().map_err(|_| invalid())?;
            let mover = board.to_move.opponent();
            let pawn_sq = target
                .offset(0, mover.pawn_direction())
                .ok_or_else(invalid)?;
            let pawn = board.piece_at_mut(pawn_sq).ok_or_else(invalid)?;
            if pawn.identity() != PieceIdentity::new(PieceKind::Pawn, mover) {
                return Err(invalid());
            }
            pawn.set_en_passant_vulnerable(true);
        }

        // Parse counters (optional)
        if let Some(clock) = parts.get(4) {
            board.halfmove_clock = parse_counter(clock)?;
        }
        if let Some(number) = parts.get(5) {
            board.fullmove_number = parse_counter(number)?;
        }

        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                let sq = Coordinate::from_index(rank as usize * 8 + file as usize);
                if let Some(piece) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.identity().fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.has_castling_right(color, side) {
                    castling.push(side.fen_char(color));
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .pieces()
            .find(|piece| piece.kind() == PieceKind::Pawn && piece.is_en_passant_vulnerable())
            .and_then(|pawn| {
                let dir = pawn.color().pawn_direction();
                pawn.square().and_then(|sq| sq.offset(0, -dir))
            })
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Unmoved king and rook on their home squares. Pieces standing between them do not
    /// matter here, unlike for castling itself.
    fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        let unmoved = |sq: Coordinate, kind: PieceKind| {
            self.piece_at(sq).is_some_and(|piece| {
                piece.identity() == PieceIdentity::new(kind, color) && !piece.has_moved()
            })
        };
        unmoved(CastleSide::king_home(color), PieceKind::King)
            && unmoved(side.rook_home(color), PieceKind::Rook)
    }

    fn derive_moved_flags(&mut self, rights: &[(Color, CastleSide)]) {
        let squares: Vec<Coordinate> = self.occupied.iter().collect();
        for sq in squares {
            let Some(piece) = self.piece_at_mut(sq) else {
                continue;
            };
            let color = piece.color();
            let moved = match piece.kind() {
                PieceKind::Pawn => sq.rank() != color.pawn_start_rank(),
                PieceKind::King => !rights
                    .iter()
                    .any(|&(c, _)| c == color && sq == CastleSide::king_home(color)),
                PieceKind::Rook => !rights
                    .iter()
                    .any(|&(c, side)| c == color && sq == side.rook_home(color)),
                _ => false,
            };
            piece.set_moved(moved);
        }
    }
}

fn parse_counter(text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        found: text.to_string(),
    })
}

/// Parse coordinate move text ("e2e4", "e7e8q") into origin, destination and the
/// promotion choice.
///
/// Pawn and king are rejected as promotion letters.
pub(crate) fn parse_move_text(
    text: &str,
) -> Result<(Coordinate, Coordinate, Option<PieceKind>), MoveParseError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 4 || chars.len() > 5 {
        return Err(MoveParseError::InvalidLength { len: chars.len() });
    }

    let square = |file: char, rank: char| {
        let notation: String = [file, rank].iter().collect();
        notation
            .parse::<Coordinate>()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: text.to_string(),
            })
    };
    let from = square(chars[0], chars[1])?;
    let to = square(chars[2], chars[3])?;

    // Parse promotion piece if present
    let promotion = match chars.get(4) {
        Some(&c) => {
            let kind = PieceKind::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?;
            if matches!(kind, PieceKind::Pawn | PieceKind::King) {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
            Some(kind)
        }
        None => None,
    };

    Ok((from, to, promotion))
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

impl BoardPiece {
    /// FEN letter of this piece.
    #[must_use]
    pub const fn fen_char(&self) -> char {
        self.identity().fen_char()
    }
}
