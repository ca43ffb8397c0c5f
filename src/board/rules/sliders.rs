use super::super::{BoardPiece, BoardQuery, Coordinate, MoveOutcome};
use super::{reject, resolve_standard};

/// Same file or same rank.
fn is_orthogonal(df: i8, dr: i8) -> bool {
    (df == 0) != (dr == 0)
}

fn is_diagonal(df: i8, dr: i8) -> bool {
    df != 0 && df.abs() == dr.abs()
}

/// Shared tail of the three sliders: the line must be clear before standard resolution.
fn slide<B>(piece: &BoardPiece, from: Coordinate, to: Coordinate, board: &B) -> MoveOutcome
where
    B: BoardQuery + ?Sized,
{
    let (df, dr) = from.delta(to);
    let distance = df.abs().max(dr.abs());
    if distance > 1 && board.has_piece_between(from, to) {
        return reject(piece, from, to);
    }
    resolve_standard(piece, from, to, board)
}

pub(super) fn validate_rook<B>(
    piece: &BoardPiece,
    from: Coordinate,
    to: Coordinate,
    board: &B,
) -> MoveOutcome
where
    B: BoardQuery + ?Sized,
{
    let (df, dr) = from.delta(to);
    if !is_orthogonal(df, dr) {
        return reject(piece, from, to);
    }
    slide(piece, from, to, board)
}

pub(super) fn validate_bishop<B>(
    piece: &BoardPiece,
    from: Coordinate,
    to: Coordinate,
    board: &B,
) -> MoveOutcome
where
    B: BoardQuery + ?Sized,
{
    let (df, dr) = from.delta(to);
    if !is_diagonal(df, dr) {
        return reject(piece, from, to);
    }
    slide(piece, from, to, board)
}

pub(super) fn validate_queen<B>(
    piece: &BoardPiece,
    from: Coordinate,
    to: Coordinate,
    board: &B,
) -> MoveOutcome
where
    B: BoardQuery + ?Sized,
{
    let (df, dr) = from.delta(to);
    if !is_orthogonal(df, dr) && !is_diagonal(df, dr) {
        return reject(piece, from, to);
    }
    slide(piece, from, to, board)
}
