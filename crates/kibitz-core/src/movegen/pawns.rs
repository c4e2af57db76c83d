//! Pawn candidate generation.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// File steps of the two capture diagonals.
pub(super) const CAPTURE_FILES: [i8; 2] = [-1, 1];

/// Push pawn candidates: single and double steps onto empty squares, and
/// diagonals holding an opponent piece or equal to the en-passant target.
pub(super) fn gen_pawn(position: &Position, from: Square, us: Color, list: &mut MoveList) {
    let board = position.board();
    let forward = us.forward();

    if let Some(one) = from.offset(0, forward)
        && board.is_empty(one)
    {
        list.push(Move::regular(from, one));
        if from.rank() == us.pawn_rank()
            && let Some(two) = one.offset(0, forward)
            && board.is_empty(two)
        {
            list.push(Move::regular(from, two));
        }
    }

    for file_step in CAPTURE_FILES {
        let Some(diagonal) = from.offset(file_step, forward) else {
            continue;
        };
        let holds_enemy = board
            .piece_at(diagonal)
            .is_some_and(|piece| piece.color() != us);
        if holds_enemy || position.en_passant() == Some(diagonal) {
            list.push(Move::regular(from, diagonal));
        }
    }
}

/// Squares a pawn of `color` on `from` threatens, occupied or not.
pub(super) fn pawn_attacks(from: Square, color: Color) -> impl Iterator<Item = Square> {
    CAPTURE_FILES
        .into_iter()
        .filter_map(move |file_step| from.offset(file_step, color.forward()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn targets(fen: &str, from: &str) -> Vec<String> {
        let pos: Position = fen.parse().unwrap();
        let mut list = MoveList::new();
        gen_pawn(&pos, sq(from), pos.side_to_move(), &mut list);
        let mut out: Vec<String> = list.iter().filter_map(|m| m.to()).map(|s| s.to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn start_rank_double_step() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(targets(fen, "e2"), vec!["e3", "e4"]);
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        assert!(targets("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2").is_empty());
        assert_eq!(targets("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2"), vec!["e3"]);
    }

    #[test]
    fn diagonals_need_enemy_or_en_passant() {
        assert_eq!(targets("4k3/8/8/8/8/3p1P2/4P3/4K3 w - - 0 1", "e2"), vec!["d3", "e3", "e4"]);
        assert_eq!(targets("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5"), vec!["d6", "e6"]);
    }

    #[test]
    fn black_pawns_move_down() {
        assert_eq!(targets("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", "d7"), vec!["d5", "d6"]);
    }

    #[test]
    fn attacks_ignore_occupancy() {
        let mut attacked: Vec<_> = pawn_attacks(sq("a2"), Color::White).collect();
        attacked.sort_by_key(|s| s.file());
        assert_eq!(attacked, vec![sq("b3")]);
        let black: Vec<_> = pawn_attacks(sq("e7"), Color::Black).collect();
        assert_eq!(black.len(), 2);
        assert!(black.contains(&sq("d6")) && black.contains(&sq("f6")));
    }
}
