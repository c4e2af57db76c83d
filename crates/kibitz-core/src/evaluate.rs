//! Check and stalemate detection.

use crate::chess_move::Outlook;
use crate::color::Color;
use crate::movegen::{attacked_squares, legal_moves_for};
use crate::position::Position;

/// Return `true` if the king of `color` stands on a square the opponent threatens.
///
/// Uses attack-only generation, so it is safe to call from the legality filter.
/// A side without a king is never in check.
pub fn in_check(position: &Position, color: Color) -> bool {
    let Some(king) = position.board().king_square(color) else {
        return false;
    };
    attacked_squares(position, color.flip()).contains(&king)
}

/// Return `true` if `color` has no legal move.
///
/// This is the "out of moves" half of checkmate; combine with [`in_check`]
/// to tell checkmate from stalemate.
pub fn is_stalemated(position: &Position, color: Color) -> bool {
    legal_moves_for(position, color).is_empty()
}

/// Check and out-of-moves state of `color` in `position`.
pub fn outlook(position: &Position, color: Color) -> Outlook {
    Outlook {
        check: in_check(position, color),
        stalemate: is_stalemated(position, color),
    }
}
