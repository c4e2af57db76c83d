//! Simulate-and-discard legality filter.

use crate::evaluate::in_check;
use crate::position::Position;

use super::MoveList;

/// Keep the valid moves that do not leave the mover's king attacked, with
/// their `legal` flag set.
///
/// Each candidate is applied to a by-value copy of `position`; the copy is
/// dropped afterwards, so the caller's position is never touched.
pub(super) fn filter_legal(position: &Position, valid: MoveList) -> MoveList {
    let mover = position.side_to_move();
    valid
        .into_iter()
        .filter_map(|mut mv| {
            mv.set_legal(true);
            let mut after = *position;
            after.apply(&mv).ok()?;
            (!in_check(&after, mover)).then_some(mv)
        })
        .collect()
}
