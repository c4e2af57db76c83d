//! Turns geometric candidates into semantically valid moves.

use crate::chess_move::{Move, MoveKind};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// Drop candidates landing on a friendly piece, mark captures and en passant,
/// and expand last-rank pawn moves into one move per promotion kind.
pub(super) fn resolve(position: &Position, candidates: MoveList) -> MoveList {
    let mut valid = MoveList::new();
    for candidate in candidates {
        resolve_one(position, candidate, &mut valid);
    }
    valid
}

fn resolve_one(position: &Position, candidate: Move, out: &mut MoveList) {
    let MoveKind::Regular { from, to } = candidate.kind() else {
        // Castling is fully checked at generation time.
        out.push(candidate);
        return;
    };

    let board = position.board();
    let Some(mover) = board.piece_at(from) else {
        return;
    };
    let target = board.piece_at(to);
    if target.is_some_and(|piece| piece.color() == mover.color()) {
        return;
    }

    let mut capture = target.is_some();
    let mut en_passant = false;
    if mover.kind() == PieceKind::Pawn && target.is_none() && position.en_passant() == Some(to) {
        let passed = board.piece_at(Square::at(to.file(), from.rank()));
        if passed != Some(Piece::new(PieceKind::Pawn, mover.color().flip())) {
            return;
        }
        capture = true;
        en_passant = true;
    }

    if mover.kind() == PieceKind::Pawn && to.rank() == mover.color().promotion_rank() {
        for promote_to in PieceKind::PROMOTIONS {
            let kind = if capture {
                MoveKind::CapturePromotion {
                    from,
                    to,
                    promote_to,
                }
            } else {
                MoveKind::Promotion {
                    from,
                    to,
                    promote_to,
                }
            };
            out.push(candidate.with_kind(kind));
        }
        return;
    }

    let kind = if capture {
        MoveKind::Capture {
            from,
            to,
            en_passant,
        }
    } else {
        MoveKind::Regular { from, to }
    };
    out.push(candidate.with_kind(kind));
}
