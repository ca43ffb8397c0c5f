use super::super::{BoardPiece, BoardQuery, Coordinate, MoveOutcome};
use super::{reject, resolve_standard};

/// Knights jump: only the (1, 2) / (2, 1) shape matters, never what stands in between.
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
    match (df.abs(), dr.abs()) {
        (1, 2) | (2, 1) => resolve_standard(piece, from, to, board),
        _ => reject(piece, from, to),
    }
}
