//! Move execution via copy-make.

use tracing::{trace, warn};

use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Apply a legal move in place.
    ///
    /// The move is played on a copy that replaces `self` only once every step
    /// succeeded, so on error the position is exactly as before.
    ///
    /// # Errors
    ///
    /// [`MoveError::NotLegal`] if the move was not produced by the legality
    /// filter, [`MoveError::EmptySource`] if no piece of the side to move
    /// stands where the move starts.
    pub fn apply(&mut self, mv: &Move) -> Result<(), MoveError> {
        if !mv.is_legal() {
            warn!(mv = %mv, "refusing move not flagged legal");
            return Err(MoveError::NotLegal {
                notation: mv.to_string(),
            });
        }

        let us = self.side_to_move();
        let mut next = *self;
        next.set_en_passant(None);

        let irreversible = match mv.kind() {
            MoveKind::Castle(side) => {
                next.castle(us, side)?;
                false
            }
            MoveKind::Regular { from, to } => next.relocate(us, from, to, None)?,
            MoveKind::Capture {
                from,
                to,
                en_passant,
            } => {
                next.relocate(us, from, to, None)?;
                if en_passant {
                    // The captured pawn stands beside the source, behind the target.
                    next.board_mut().clear(Square::at(to.file(), from.rank()));
                }
                true
            }
            MoveKind::Promotion {
                from,
                to,
                promote_to,
            }
            | MoveKind::CapturePromotion {
                from,
                to,
                promote_to,
            } => {
                next.relocate(us, from, to, Some(promote_to))?;
                true
            }
        };

        let clock = if irreversible {
            0
        } else {
            next.halfmove_clock().saturating_add(1)
        };
        next.set_halfmove_clock(clock);
        if us == Color::Black {
            next.set_fullmove_number(next.fullmove_number().saturating_add(1));
        }
        next.set_side_to_move(us.flip());

        trace!(mv = %mv.coordinates(), side = us.name(), "applied move");
        *self = next;
        Ok(())
    }

    /// Move the king two squares toward the rook and the rook onto the square
    /// the king crossed.
    fn castle(&mut self, us: Color, side: CastleSide) -> Result<(), MoveError> {
        let king_home = CastleSide::king_home(us);
        let rook_home = side.rook_home(us);
        let king = self.own_piece(king_home, us)?;
        let rook = self.own_piece(rook_home, us)?;

        let board = self.board_mut();
        board.clear(king_home);
        board.clear(rook_home);
        board.set(side.king_destination(us), king);
        board.set(side.rook_destination(us), rook);

        self.set_castling(self.castling().revoke_color(us));
        Ok(())
    }

    /// Move the piece on `from` to `to`, replacing whatever stood there.
    ///
    /// Returns `true` when the half-move clock must reset: a pawn moved or a
    /// piece was taken.
    fn relocate(
        &mut self,
        us: Color,
        from: Square,
        to: Square,
        promote_to: Option<PieceKind>,
    ) -> Result<bool, MoveError> {
        let piece = self.own_piece(from, us)?;

        self.set_castling(self.castling().revoke_square(from).revoke_square(to));

        let board = self.board_mut();
        board.clear(from);
        let captured = board.clear(to);
        let placed = promote_to.map_or(piece, |kind| piece.with_kind(kind));
        board.set(to, placed);

        let is_pawn = piece.kind() == PieceKind::Pawn;
        if is_pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.set_en_passant(Some(Square::at(from.file(), (from.rank() + to.rank()) / 2)));
        }

        Ok(is_pawn || captured.is_some())
    }

    fn own_piece(&self, sq: Square, us: Color) -> Result<Piece, MoveError> {
        self.piece_at(sq)
            .filter(|piece| piece.color() == us)
            .ok_or(MoveError::EmptySource { square: sq })
    }
}

#[cfg(test)]
mod tests {
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::movegen::legal_moves;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn position(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    fn legal(pos: &Position, coordinates: &str) -> Move {
        legal_moves(pos)
            .into_iter()
            .find(|m| m.coordinates() == coordinates)
            .unwrap_or_else(|| panic!("{coordinates} not legal in {pos:?}"))
    }

    fn play(fen: &str, coordinates: &str) -> Position {
        let mut pos = position(fen);
        let mv = legal(&pos, coordinates);
        pos.apply(&mv).unwrap();
        pos
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut pos = Position::starting_position();
        assert_eq!(pos.en_passant(), None);
        pos.apply(&legal(&pos, "e2e4")).unwrap();
        assert_eq!(pos.en_passant(), Some(sq("e3")));
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.fullmove_number(), 1);

        pos.apply(&legal(&pos, "g8f6")).unwrap();
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.fullmove_number(), 2);
        assert_eq!(pos.halfmove_clock(), 1);
    }

    #[test]
    fn en_passant_removes_pawn_beside_source() {
        let pos = play("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5d6");
        assert_eq!(pos.piece_at(sq("d6")), Some(Piece::WHITE_PAWN));
        assert_eq!(pos.piece_at(sq("d5")), None);
        assert_eq!(pos.piece_at(sq("e5")), None);
        assert_eq!(pos.halfmove_clock(), 0);
    }

    #[test]
    fn black_en_passant() {
        let pos = play("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1", "e4d3");
        assert_eq!(pos.piece_at(sq("d3")), Some(Piece::BLACK_PAWN));
        assert_eq!(pos.piece_at(sq("d4")), None);
    }

    #[test]
    fn castling_moves_king_and_rook() {
        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 1", "0-0");
        assert_eq!(pos.piece_at(Square::G1), Some(Piece::WHITE_KING));
        assert_eq!(pos.piece_at(Square::F1), Some(Piece::WHITE_ROOK));
        assert_eq!(pos.piece_at(Square::E1), None);
        assert_eq!(pos.piece_at(Square::H1), None);
        assert!(!pos.castling().has(Color::White, CastleSide::QueenSide));
        assert!(pos.castling().has(Color::Black, CastleSide::QueenSide));
        assert_eq!(pos.halfmove_clock(), 4);

        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "0-0-0");
        assert_eq!(pos.piece_at(Square::C8), Some(Piece::BLACK_KING));
        assert_eq!(pos.piece_at(Square::D8), Some(Piece::BLACK_ROOK));
        assert_eq!(pos.castling().to_fen(), "KQ");
    }

    #[test]
    fn rook_move_revokes_one_side() {
        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "h1h4");
        assert_eq!(pos.castling().to_fen(), "Qkq");
    }

    #[test]
    fn capturing_home_rook_revokes_opponent_right() {
        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "a1a8");
        assert_eq!(pos.castling().to_fen(), "Kk");
    }

    #[test]
    fn king_move_revokes_both() {
        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1e2");
        assert_eq!(pos.castling().to_fen(), "kq");
    }

    #[test]
    fn underpromotion_places_chosen_piece() {
        let pos = play("4k3/P7/8/8/8/8/8/4K3 w - - 7 1", "a7a8n");
        assert_eq!(pos.piece_at(Square::A8), Some(Piece::WHITE_KNIGHT));
        assert_eq!(pos.halfmove_clock(), 0);
    }

    #[test]
    fn counters_saturate() {
        let mut pos = position("4k3/8/8/8/8/8/8/R3K3 b - - 65535 65535");
        pos.apply(&legal(&pos, "e8e7")).unwrap();
        assert_eq!(pos.halfmove_clock(), u16::MAX);
        assert_eq!(pos.fullmove_number(), u16::MAX);
    }

    #[test]
    fn unflagged_move_refused_without_mutation() {
        let mut pos = Position::starting_position();
        let before = pos;
        let err = pos.apply(&Move::regular(sq("e2"), sq("e4"))).unwrap_err();
        assert!(matches!(err, MoveError::NotLegal { .. }));
        assert_eq!(pos, before);
    }

    #[test]
    fn empty_source_refused_without_mutation() {
        let start = Position::starting_position();
        let mv = legal(&start, "e2e4");
        let mut pos = position("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let before = pos;
        assert_eq!(pos.apply(&mv), Err(MoveError::EmptySource { square: sq("e2") }));
        assert_eq!(pos, before);

        let mut rights = position("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        rights.set_castling(CastleRights::ALL);
        let castle = legal(&position("4k3/8/8/8/8/8/8/4K2R w K - 0 1"), "0-0");
        assert!(rights.apply(&castle).is_err());
    }
}
