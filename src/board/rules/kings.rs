use super::super::{
    BoardPiece, BoardQuery, CastleSide, Coordinate, LegalMove, MoveCategory, MoveOutcome,
};
use super::{reject, resolve_standard};

/// One step in any direction, or a two-file castling step on the king's own rank.
///
/// Castling eligibility (unmoved king and rook, empty squares between them) is the
/// board's call. Whether the king passes through an attacked square is not checked.
pub(super) fn validate<B>(
    piece: &BoardPiece,
    from: Coordinate,
    to: Coordinate,
    board: &B,
) -> MoveOutcome
where
    B: BoardQuery + ?Sized,
{
    let (df, dr) = from.delta(to);
    if (df, dr) != (0, 0) && df.abs() <= 1 && dr.abs() <= 1 {
        return resolve_standard(piece, from, to, board);
    }
    if dr != 0 {
        return reject(piece, from, to);
    }

    let castle = if df == CastleSide::Short.king_step() && board.can_castle_short(piece) {
        Some(MoveCategory::CastleShort)
    } else if df == CastleSide::Long.king_step() && board.can_castle_long(piece) {
        Some(MoveCategory::CastleLong)
    } else {
        None
    };

    match castle {
        Some(category) => LegalMove::new(piece.identity(), from, to, category).into(),
        None => reject(piece, from, to),
    }
}
