//! The copyable position: placement, side to move, castling, en passant, and
//! move counters.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Complete position state.
///
/// `Position` is `Copy`: legality checks and move annotation simulate moves on
/// a value copy and simply drop it afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    /// Square skipped by the last two-square pawn advance; valid for one ply.
    en_passant: Option<Square>,
    /// Half-moves since the last pawn move or capture, saturating.
    halfmove_clock: u16,
    /// Starts at 1 and increments after each Black move.
    fullmove_number: u16,
}

impl Position {
    /// Return the standard starting position.
    pub fn starting_position() -> Position {
        Position {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Construct a position from raw components. Used by FEN parsing.
    pub(crate) fn from_raw(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Position {
        Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_state() {
        let pos = Position::starting_position();
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling(), CastleRights::ALL);
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
        assert_eq!(pos.piece_at(Square::E1), Some(Piece::WHITE_KING));
    }

    #[test]
    fn copies_are_independent() {
        let original = Position::starting_position();
        let mut copy = original;
        copy.board_mut().clear(Square::E1);
        copy.set_side_to_move(Color::Black);
        assert_eq!(original.piece_at(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(original.side_to_move(), Color::White);
        assert_ne!(original, copy);
    }
}
