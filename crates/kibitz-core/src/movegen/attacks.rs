//! Attack-only generation.
//!
//! Threats are computed from piece geometry alone: no castling, no
//! validity resolution and never the legality filter. Pawns threaten both
//! forward diagonals whether or not anything stands there, and their pushes
//! are not threats.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::knights::knight_targets;
use super::pawns::pawn_attacks;
use super::sliders::{self, ray_targets};

/// Every square a piece of color `by` threatens. May contain duplicates.
pub fn attacked_squares(position: &Position, by: Color) -> Vec<Square> {
    let board = position.board();
    let mut attacked = Vec::with_capacity(64);

    for (from, piece) in board.pieces().filter(|(_, piece)| piece.color() == by) {
        match piece.kind() {
            PieceKind::Pawn => attacked.extend(pawn_attacks(from, by)),
            PieceKind::Knight => attacked.extend(knight_targets(from)),
            PieceKind::Bishop => attacked.extend(ray_targets(board, from, &sliders::DIAGONAL, None)),
            PieceKind::Rook => attacked.extend(ray_targets(board, from, &sliders::CARDINAL, None)),
            PieceKind::Queen => attacked.extend(ray_targets(board, from, &sliders::ALL, None)),
            PieceKind::King => attacked.extend(ray_targets(board, from, &sliders::ALL, Some(1))),
        }
    }

    attacked
}

/// Return `true` if a piece of color `by` threatens `sq`.
pub fn is_attacked(position: &Position, sq: Square, by: Color) -> bool {
    attacked_squares(position, by).contains(&sq)
}
