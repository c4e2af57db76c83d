//! Ray casting for bishops, rooks, queens and the king.

use crate::board::Board;
use crate::chess_move::Move;
use crate::square::Square;

use super::MoveList;

pub(super) const CARDINAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub(super) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub(super) const ALL: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Walk each direction from `from` until the edge, the first occupied square
/// (included) or `max_distance` steps.
pub(super) fn ray_targets(
    board: &Board,
    from: Square,
    directions: &[(i8, i8)],
    max_distance: Option<u8>,
) -> Vec<Square> {
    let limit = max_distance.unwrap_or(Square::SIZE);
    let mut targets = Vec::new();
    for &(df, dr) in directions {
        let mut current = from;
        for _ in 0..limit {
            let Some(next) = current.offset(df, dr) else {
                break;
            };
            targets.push(next);
            if !board.is_empty(next) {
                break;
            }
            current = next;
        }
    }
    targets
}

/// Push ray candidates; own pieces at the end of a ray are dropped by the
/// validity filter.
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    directions: &[(i8, i8)],
    max_distance: Option<u8>,
    list: &mut MoveList,
) {
    for to in ray_targets(board, from, directions, max_distance) {
        list.push(Move::regular(from, to));
    }
}
