use super::super::{
    BoardPiece, BoardQuery, Coordinate, EnPassantEffect, LegalMove, MoveCategory, MoveOutcome,
    PieceKind,
};
use super::reject;

/// What a diagonal pawn step would take.
enum CapturedPiece {
    Found { kind: PieceKind, en_passant: bool },
    NotFound,
}

/// Pawn moves, keyed by (steps forward, files sideways) relative to the pawn's color.
///
/// A one-square advance clears the pawn's en-passant vulnerability and a two-square
/// advance sets it; both are reported through [`LegalMove::en_passant`] rather than
/// applied here.
pub(super) fn validate<B>(
    piece: &BoardPiece,
    from: Coordinate,
    to: Coordinate,
    board: &B,
) -> MoveOutcome
where
    B: BoardQuery + ?Sized,
{
    let color = piece.color();
    let (df, dr) = from.delta(to);
    let forward = dr * color.pawn_direction();
    if forward <= 0 {
        return reject(piece, from, to);
    }

    let identity = piece.identity();
    let promotes = to.rank() == color.promotion_rank();

    match (forward, df.abs()) {
        (1, 1) => match resolve_capture(piece, from, to, board) {
            CapturedPiece::Found {
                kind,
                en_passant: true,
            } => LegalMove::new(identity, from, to, MoveCategory::CaptureEnPassant)
                .capturing(kind)
                .into(),
            CapturedPiece::Found { kind, .. } => {
                let category = if promotes {
                    MoveCategory::PromoteAndCapture
                } else {
                    MoveCategory::Capture
                };
                LegalMove::new(identity, from, to, category)
                    .capturing(kind)
                    .into()
            }
            CapturedPiece::NotFound => reject(piece, from, to),
        },
        (1, 0) => {
            if board.piece_at(to).is_some() {
                return reject(piece, from, to);
            }
            let category = if promotes {
                MoveCategory::Promote
            } else {
                MoveCategory::Normal
            };
            LegalMove::new(identity, from, to, category)
                .with_en_passant(EnPassantEffect::ClearVulnerable)
                .into()
        }
        (2, 0) => {
            if piece.has_moved()
                || board.piece_at(to).is_some()
                || board.has_piece_between(from, to)
            {
                return reject(piece, from, to);
            }
            LegalMove::new(identity, from, to, MoveCategory::Normal)
                .with_en_passant(EnPassantEffect::MarkVulnerable)
                .into()
        }
        _ => reject(piece, from, to),
    }
}

/// An occupied destination is a direct capture; an empty one is only a capture if the
/// square beside the pawn (destination file, origin rank) holds a vulnerable enemy pawn.
///
/// Own pieces and kings on the destination were filtered out before dispatch.
fn resolve_capture<B>(piece: &BoardPiece, from: Coordinate, to: Coordinate, board: &B) -> CapturedPiece
where
    B: BoardQuery + ?Sized,
{
    if let Some(target) = board.piece_at(to) {
        return CapturedPiece::Found {
            kind: target.kind(),
            en_passant: false,
        };
    }

    let passed = Coordinate::new(to.file(), from.rank()).and_then(|sq| board.piece_at(sq));
    match passed {
        Some(victim)
            if victim.kind() == PieceKind::Pawn
                && victim.color() != piece.color()
                && victim.is_en_passant_vulnerable() =>
        {
            CapturedPiece::Found {
                kind: PieceKind::Pawn,
                en_passant: true,
            }
        }
        _ => CapturedPiece::NotFound,
    }
}
