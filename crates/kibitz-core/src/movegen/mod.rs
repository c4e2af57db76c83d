//! Move generation pipeline: geometric candidates, validity, legality.
//!
//! There are two entry points. [`legal_moves`] runs the full pipeline and
//! simulates every candidate. [`attacked_squares`] only walks piece geometry
//! and never simulates, so check detection can call it from inside the
//! legality filter.

pub(crate) mod attacks;
mod castling;
mod knights;
mod legality;
mod pawns;
mod sliders;
mod validity;

use tracing::trace;

use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

pub use self::attacks::{attacked_squares, is_attacked};

/// Growable list of generated moves. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Return the first move whose rendered notation equals `notation`.
    pub fn find_notation(&self, notation: &str) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.notation() == notation)
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

/// Geometric candidates for the side to move, castling included.
pub(crate) fn pseudo_legal_moves(position: &Position) -> MoveList {
    let us = position.side_to_move();
    let board = position.board();
    let mut list = MoveList::new();

    for (from, piece) in board.pieces().filter(|(_, piece)| piece.color() == us) {
        match piece.kind() {
            PieceKind::Pawn => pawns::gen_pawn(position, from, us, &mut list),
            PieceKind::Knight => knights::gen_knight(from, &mut list),
            PieceKind::Bishop => sliders::gen_slider(board, from, &sliders::DIAGONAL, None, &mut list),
            PieceKind::Rook => sliders::gen_slider(board, from, &sliders::CARDINAL, None, &mut list),
            PieceKind::Queen => sliders::gen_slider(board, from, &sliders::ALL, None, &mut list),
            PieceKind::King => sliders::gen_slider(board, from, &sliders::ALL, Some(1), &mut list),
        }
    }

    castling::gen_castles(position, &mut list);
    list
}

/// Candidates resolved into captures, en passant and promotions.
pub(crate) fn valid_moves(position: &Position) -> MoveList {
    validity::resolve(position, pseudo_legal_moves(position))
}

/// Generate every legal move for the side to move, each flagged legal.
///
/// The result is unannotated: notation and outlook stay empty. Use
/// [`Game::legal_moves`](crate::game::Game::legal_moves) for display-ready
/// moves.
pub fn legal_moves(position: &Position) -> MoveList {
    let list = legality::filter_legal(position, valid_moves(position));
    trace!(count = list.len(), side = position.side_to_move().name(), "generated legal moves");
    list
}

impl Position {
    /// Unannotated legal moves for the side to move. See [`legal_moves`].
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(self)
    }
}

/// Generate every legal move `color` would have if it were on move.
///
/// When `color` is not the side to move, the position is viewed with the turn
/// handed over and the en-passant target dropped, since that target is only
/// capturable by the side to move.
pub fn legal_moves_for(position: &Position, color: Color) -> MoveList {
    if color == position.side_to_move() {
        return legal_moves(position);
    }
    let mut view = *position;
    view.set_side_to_move(color);
    view.set_en_passant(None);
    legal_moves(&view)
}
