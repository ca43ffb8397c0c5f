//! Committing validated moves to a [`Board`].

use super::board_piece::BoardPiece;
use super::error::PlayError;
use super::query::BoardQuery;
use super::rules::validate_move;
use super::types::{
    CastleSide, Color, Coordinate, EnPassantEffect, LegalMove, MoveCategory, PieceIdentity,
    PieceKind,
};
use super::Board;

impl Board {
    /// Validate and commit a move for the side to move.
    ///
    /// `promotion` picks the piece a pawn becomes on the last rank (queen if `None`).
    pub fn play(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    ) -> Result<LegalMove, PlayError> {
        let piece = self
            .piece_at(from)
            .ok_or(PlayError::EmptySquare { square: from })?;
        if piece.color() != self.to_move {
            return Err(PlayError::NotYourTurn {
                square: from,
                to_move: self.to_move,
            });
        }

        let mv = validate_move(piece, to, self).into_result()?;
        self.apply(&mv, promotion)?;
        Ok(mv)
    }

    /// Commit a move previously returned by [`validate_move`] for this position.
    ///
    /// Moves the piece, removes whatever it captured (the passed pawn for en passant),
    /// brings the rook across when castling and swaps a promoting pawn for the chosen
    /// piece. The mover's moved flag and en-passant marker are updated, the side to move
    /// flips, and pawns of the new side to move lose their en-passant vulnerability since
    /// their opponent has had its chance to reply.
    ///
    /// Returns [`PlayError::StaleMove`] without touching the board when validating the
    /// move again on this position no longer gives `mv`.
    pub fn apply(&mut self, mv: &LegalMove, promotion: Option<PieceKind>) -> Result<(), PlayError> {
        let promote_to = match (mv.category.is_promotion(), promotion) {
            (true, None) => Some(PieceKind::Queen),
            (true, Some(kind)) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            (_, Some(kind)) => return Err(PlayError::InvalidPromotion { kind }),
            (false, None) => None,
        };

        // The move must still be exactly what validation gives on this board
        let still_legal = self
            .piece_at(mv.from)
            .is_some_and(|piece| validate_move(piece, mv.to, self).legal() == Some(mv));
        if !still_legal {
            return Err(PlayError::StaleMove { square: mv.from });
        }

        let captured_on = match mv.category {
            MoveCategory::CaptureEnPassant => mv.en_passant_victim(),
            category if category.is_capture() => Some(mv.to),
            _ => None,
        };
        if let Some(square) = captured_on {
            if let Some(taken) = self.remove(square) {
                self.captured.push(taken);
            }
        }

        let Some(mut piece) = self.remove(mv.from) else {
            return Err(PlayError::StaleMove { square: mv.from });
        };
        piece.set_moved(true);
        match mv.en_passant {
            EnPassantEffect::Unchanged => {}
            EnPassantEffect::MarkVulnerable => piece.set_en_passant_vulnerable(true),
            EnPassantEffect::ClearVulnerable => piece.set_en_passant_vulnerable(false),
        }

        let placed = match promote_to {
            Some(kind) => BoardPiece::new(PieceIdentity::new(kind, piece.color()), mv.to).moved(true),
            None => piece,
        };
        self.put(placed, mv.to);

        let castle = match mv.category {
            MoveCategory::CastleShort => Some(CastleSide::Short),
            MoveCategory::CastleLong => Some(CastleSide::Long),
            _ => None,
        };
        if let Some(side) = castle {
            let color = mv.piece.color();
            if let Some(mut rook) = self.remove(side.rook_home(color)) {
                rook.set_moved(true);
                self.put(rook, side.rook_destination(color));
            }
        }

        if mv.piece.kind() == PieceKind::Pawn || captured_on.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.to_move = self.to_move.opponent();
        self.expire_en_passant(self.to_move);

        debug_log!("applied {mv}; {} to move", self.to_move);
        Ok(())
    }

    /// Parse coordinate notation ("e2e4", "e7e8n") and [`play`](Self::play) it.
    pub fn play_move_text(&mut self, text: &str) -> Result<LegalMove, PlayError> {
        let (from, to, promotion) = super::fen::parse_move_text(text)?;
        self.play(from, to, promotion)
    }

    /// Clear the en-passant vulnerability of every pawn of `color`.
    pub(crate) fn expire_en_passant(&mut self, color: Color) {
        let pawn = PieceIdentity::new(PieceKind::Pawn, color);
        for sq in self.occupied.iter() {
            if let Some(piece) = self.piece_at_mut(sq) {
                if piece.identity() == pawn {
                    piece.set_en_passant_vulnerable(false);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn identity_at(board: &Board, s: &str) -> Option<PieceIdentity> {
        board.piece_at(sq(s)).map(BoardPiece::identity)
    }

    #[test]
    fn test_play_double_step_marks_pawn() {
        let mut board = Board::new();
        let mv = board.play(sq("e2"), sq("e4"), None).unwrap();
        assert_eq!(mv.en_passant, EnPassantEffect::MarkVulnerable);
        let pawn = board.piece_at(sq("e4")).unwrap();
        assert!(pawn.has_moved());
        assert!(pawn.is_en_passant_vulnerable());
        assert_eq!(board.color_to_move(), Color::Black);
        assert!(board.piece_at(sq("e2")).is_none());
    }

    #[test]
    fn test_vulnerability_lasts_one_reply() {
        let mut board = Board::new();
        board.play(sq("e2"), sq("e4"), None).unwrap();
        board.play(sq("g8"), sq("f6"), None).unwrap();
        assert!(!board.piece_at(sq("e4")).unwrap().is_en_passant_vulnerable());
    }

    #[test]
    fn test_play_rejects_wrong_side() {
        let mut board = Board::new();
        let err = board.play(sq("e7"), sq("e5"), None).unwrap_err();
        assert_eq!(
            err,
            PlayError::NotYourTurn {
                square: sq("e7"),
                to_move: Color::White
            }
        );
    }

    #[test]
    fn test_play_rejects_empty_origin() {
        let mut board = Board::new();
        let err = board.play(sq("e4"), sq("e5"), None).unwrap_err();
        assert_eq!(err, PlayError::EmptySquare { square: sq("e4") });
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();
        let err = board.play(sq("e2"), sq("e5"), None).unwrap_err();
        assert!(matches!(err, PlayError::Illegal(_)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let mut board = Board::new();
        for text in ["e2e4", "a7a6", "e4e5", "d7d5"] {
            board.play_move_text(text).unwrap();
        }
        let mv = board.play_move_text("e5d6").unwrap();
        assert_eq!(mv.category, MoveCategory::CaptureEnPassant);
        assert_eq!(mv.captured, Some(PieceKind::Pawn));
        assert!(board.piece_at(sq("d5")).is_none());
        assert_eq!(identity_at(&board, "d6"), Some(PieceIdentity::WhitePawn));
        assert_eq!(board.captured().len(), 1);
        assert_eq!(board.captured()[0].identity(), PieceIdentity::BlackPawn);
        assert_eq!(board.captured()[0].square(), None);
    }

    #[test]
    fn test_castle_short_moves_rook() {
        let mut board = Board::new();
        for text in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
            board.play_move_text(text).unwrap();
        }
        let mv = board.play_move_text("e1g1").unwrap();
        assert_eq!(mv.category, MoveCategory::CastleShort);
        assert_eq!(identity_at(&board, "g1"), Some(PieceIdentity::WhiteKing));
        assert_eq!(identity_at(&board, "f1"), Some(PieceIdentity::WhiteRook));
        assert!(board.piece_at(sq("h1")).is_none());
        assert!(board.piece_at(sq("f1")).unwrap().has_moved());
    }

    #[test]
    fn test_castle_long_moves_rook() {
        let mut board = Board::empty();
        board.place(PieceIdentity::BlackKing, sq("e8"));
        board.place(PieceIdentity::BlackRook, sq("a8"));
        board.place(PieceIdentity::WhiteKing, sq("e1"));
        board.set_color_to_move(Color::Black);
        let mv = board.play(sq("e8"), sq("c8"), None).unwrap();
        assert_eq!(mv.category, MoveCategory::CastleLong);
        assert_eq!(identity_at(&board, "c8"), Some(PieceIdentity::BlackKing));
        assert_eq!(identity_at(&board, "d8"), Some(PieceIdentity::BlackRook));
        assert_eq!(board.fullmove_number(), 2);
    }

    #[test]
    fn test_promotion_choice() {
        let mut board = Board::empty();
        board.place(PieceIdentity::WhiteKing, sq("a1"));
        board.place(PieceIdentity::BlackKing, sq("h8"));
        board.place(PieceIdentity::WhitePawn, sq("b7"));
        board.place(PieceIdentity::BlackRook, sq("c8"));

        let mut knight_board = board.clone();
        let mv = knight_board
            .play(sq("b7"), sq("c8"), Some(PieceKind::Knight))
            .unwrap();
        assert_eq!(mv.category, MoveCategory::PromoteAndCapture);
        assert_eq!(identity_at(&knight_board, "c8"), Some(PieceIdentity::WhiteKnight));

        let mv = board.play(sq("b7"), sq("b8"), None).unwrap();
        assert_eq!(mv.category, MoveCategory::Promote);
        assert_eq!(identity_at(&board, "b8"), Some(PieceIdentity::WhiteQueen));
        assert!(board.piece_at(sq("b8")).unwrap().has_moved());
    }

    #[test]
    fn test_promotion_choice_validated() {
        let mut board = Board::empty();
        board.place(PieceIdentity::WhitePawn, sq("b7"));
        assert_eq!(
            board.play(sq("b7"), sq("b8"), Some(PieceKind::King)),
            Err(PlayError::InvalidPromotion {
                kind: PieceKind::King
            })
        );

        let mut board = Board::new();
        assert_eq!(
            board.play(sq("e2"), sq("e4"), Some(PieceKind::Queen)),
            Err(PlayError::InvalidPromotion {
                kind: PieceKind::Queen
            })
        );
        assert!(board.piece_at(sq("e2")).is_some());
    }

    #[test]
    fn test_apply_rejects_stale_move() {
        let mut board = Board::new();
        let pawn = *board.piece_at(sq("e2")).unwrap();
        let mv = validate_move(&pawn, sq("e4"), &board).into_result().unwrap();
        board.remove(sq("e2"));
        assert_eq!(
            board.apply(&mv, None),
            Err(PlayError::StaleMove { square: sq("e2") })
        );
    }

    #[test]
    fn test_apply_rejects_changed_destination() {
        let mut board = Board::new();
        let pawn = *board.piece_at(sq("e2")).unwrap();
        let mv = validate_move(&pawn, sq("e4"), &board).into_result().unwrap();
        board.place(PieceIdentity::WhiteKnight, sq("e4"));
        let before = board.clone();

        assert_eq!(
            board.apply(&mv, None),
            Err(PlayError::StaleMove { square: sq("e2") })
        );
        assert_eq!(board, before);
        assert_eq!(
            board.piece_at(sq("e4")).map(BoardPiece::identity),
            Some(PieceIdentity::WhiteKnight)
        );
        assert!(board.captured().is_empty());
    }

    #[test]
    fn test_apply_rejects_move_from_other_position() {
        let mut board = Board::new();
        let pawn = *board.piece_at(sq("e2")).unwrap();
        let mv = validate_move(&pawn, sq("e4"), &board).into_result().unwrap();
        board.place(PieceIdentity::BlackPawn, sq("e3"));

        assert_eq!(
            board.apply(&mv, None),
            Err(PlayError::StaleMove { square: sq("e2") })
        );
        assert!(board.piece_at(sq("e2")).is_some());
    }

    #[test]
    fn test_clocks() {
        let mut board = Board::new();
        board.play_move_text("g1f3").unwrap();
        assert_eq!(board.halfmove_clock(), 1);
        assert_eq!(board.fullmove_number(), 1);
        board.play_move_text("g8f6").unwrap();
        assert_eq!(board.halfmove_clock(), 2);
        assert_eq!(board.fullmove_number(), 2);
        board.play_move_text("e2e4").unwrap();
        assert_eq!(board.halfmove_clock(), 0);
    }
}
