//! Castling candidate generation.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::MoveList;
use super::attacks::attacked_squares;

/// Push a castle candidate for each side whose right is held, whose king and
/// rook stand at home with nothing between them, and whose king path (start,
/// crossed and destination squares) is not attacked.
pub(super) fn gen_castles(position: &Position, list: &mut MoveList) {
    let us = position.side_to_move();
    let board = position.board();
    let rights = position.castling();

    let king_home = CastleSide::king_home(us);
    if !board
        .piece_at(king_home)
        .is_some_and(|piece| piece.is(PieceKind::King, us))
    {
        return;
    }

    // Computed lazily: most positions fail the cheaper checks first.
    let mut threatened = None;

    for side in CastleSide::ALL {
        if !rights.has(us, side) {
            continue;
        }
        let rook_home = board.piece_at(side.rook_home(us));
        if !rook_home.is_some_and(|piece| piece.is(PieceKind::Rook, us)) {
            continue;
        }
        if !side.between(us).all(|sq| board.is_empty(sq)) {
            continue;
        }

        let attacked = threatened.get_or_insert_with(|| attacked_squares(position, us.flip()));
        if side.king_path(us).any(|sq| attacked.contains(&sq)) {
            continue;
        }

        list.push(Move::castle(side));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str) -> Vec<CastleSide> {
        let pos: Position = fen.parse().unwrap();
        let mut list = MoveList::new();
        gen_castles(&pos, &mut list);
        list.iter().filter_map(|m| m.castle_side()).collect()
    }

    #[test]
    fn both_sides_when_clear() {
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(sides, vec![CastleSide::KingSide, CastleSide::QueenSide]);
        let black = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(black.len(), 2);
    }

    #[test]
    fn blocked_path_refused() {
        let sides = castles("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1");
        assert!(sides.is_empty());
        let sides = castles("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1");
        assert_eq!(sides, vec![CastleSide::QueenSide]);
    }

    #[test]
    fn crossing_attacked_square_refused() {
        // bishop on a6 covers f1 only; e1 and g1 are safe
        assert_eq!(
            castles("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1"),
            vec![CastleSide::QueenSide]
        );
    }

    #[test]
    fn attacked_b_file_square_does_not_matter() {
        // rook on b8 attacks b1, which the king never crosses
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"),
            vec![CastleSide::QueenSide]
        );
    }

    #[test]
    fn pawn_threat_on_path_refused() {
        // black pawn on e2 threatens d1 and f1
        assert!(castles("4k3/8/8/8/8/8/4p3/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn in_check_refused() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }

    #[test]
    fn missing_right_or_rook_refused() {
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1"),
            vec![CastleSide::KingSide]
        );
    }
}
