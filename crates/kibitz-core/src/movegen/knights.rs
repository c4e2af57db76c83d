//! Knight candidate generation.

use crate::chess_move::Move;
use crate::square::Square;

use super::MoveList;

/// The eight knight jumps as (file, rank) steps.
pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Squares a knight on `from` reaches, regardless of what stands there.
pub(super) fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(df, dr)| from.offset(df, dr))
}

/// Push every on-board knight jump; occupancy is resolved by the validity filter.
pub(super) fn gen_knight(from: Square, list: &mut MoveList) {
    for to in knight_targets(from) {
        list.push(Move::regular(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_knight_has_eight_jumps() {
        let mut list = MoveList::new();
        gen_knight(Square::from_algebraic("d4").unwrap(), &mut list);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        let targets: Vec<_> = knight_targets(Square::A1).map(|s| s.to_string()).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&"b3".to_string()));
        assert!(targets.contains(&"c2".to_string()));
    }
}
