//! Move validation.
//!
//! [`validate_move`] is the single entry point. It applies the checks every piece shares
//! (own-piece and king targets) and then dispatches on the piece kind to the geometry in
//! the submodules. Nothing here mutates the board or the piece: side effects a move would
//! have are described in the returned [`MoveOutcome`] and applied by
//! [`Board::apply`](super::Board::apply).

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::board_piece::BoardPiece;
use super::query::BoardQuery;
use super::types::{
    Coordinate, IllegalMove, InvalidMoveCause, LegalMove, MoveCategory, MoveOutcome, PieceKind,
};

/// Decide whether `piece` may move to `to` on `board`.
///
/// Checks run in this order, and the first failure is the reported cause:
/// 1. `to` holds a piece of the mover's color: [`InvalidMoveCause::SameColorCapture`].
/// 2. `to` holds the enemy king: [`InvalidMoveCause::CannotCaptureKing`].
/// 3. The kind-specific geometry, which reports `Invalid<Kind>Move`.
///
/// # Example
/// ```
/// use chess_rules::board::{validate_move, Board, BoardQuery, MoveCategory};
///
/// let board = Board::new();
/// let pawn = board.piece_at("e2".parse().unwrap()).unwrap();
/// let outcome = validate_move(pawn, "e4".parse().unwrap(), &board);
/// assert_eq!(outcome.category(), Some(MoveCategory::Normal));
/// ```
pub fn validate_move<B>(piece: &BoardPiece, to: Coordinate, board: &B) -> MoveOutcome
where
    B: BoardQuery + ?Sized,
{
    let identity = piece.identity();
    let Some(from) = piece.square() else {
        warn_log!("validate_move called for {identity} which is not on the board");
        let cause = InvalidMoveCause::invalid_move_for(identity.kind());
        return IllegalMove::new(cause, identity, to, to).into();
    };

    let outcome = match board.piece_at(to) {
        Some(target) if target.color() == identity.color() => {
            IllegalMove::new(InvalidMoveCause::SameColorCapture, identity, from, to).into()
        }
        Some(target) if target.kind() == PieceKind::King => {
            IllegalMove::new(InvalidMoveCause::CannotCaptureKing, identity, from, to).into()
        }
        _ => match identity.kind() {
            PieceKind::Pawn => pawns::validate(piece, from, to, board),
            PieceKind::Rook => sliders::validate_rook(piece, from, to, board),
            PieceKind::Knight => knights::validate(piece, from, to, board),
            PieceKind::Bishop => sliders::validate_bishop(piece, from, to, board),
            PieceKind::Queen => sliders::validate_queen(piece, from, to, board),
            PieceKind::King => kings::validate(piece, from, to, board),
        },
    };

    trace_log!("{identity} {from}{to}: {outcome}");
    outcome
}

/// Every square `piece` may legally move to, in index order (a1 first).
#[must_use]
pub fn legal_destinations<B>(piece: &BoardPiece, board: &B) -> Vec<Coordinate>
where
    B: BoardQuery + ?Sized,
{
    Coordinate::all()
        .filter(|&to| validate_move(piece, to, board).is_legal())
        .collect()
}

/// Resolve a geometrically valid move for every kind but the pawn: an empty destination
/// is a normal move, an enemy piece is captured.
///
/// Own pieces and the enemy king have already been rejected by [`validate_move`].
pub(super) fn resolve_standard<B>(
    piece: &BoardPiece,
    from: Coordinate,
    to: Coordinate,
    board: &B,
) -> MoveOutcome
where
    B: BoardQuery + ?Sized,
{
    let identity = piece.identity();
    match board.piece_at(to) {
        None => LegalMove::new(identity, from, to, MoveCategory::Normal).into(),
        Some(target) => LegalMove::new(identity, from, to, MoveCategory::Capture)
            .capturing(target.kind())
            .into(),
    }
}

/// The kind-specific rejection for `piece`.
pub(super) fn reject(piece: &BoardPiece, from: Coordinate, to: Coordinate) -> MoveOutcome {
    let identity = piece.identity();
    IllegalMove::new(
        InvalidMoveCause::invalid_move_for(identity.kind()),
        identity,
        from,
        to,
    )
    .into()
}
