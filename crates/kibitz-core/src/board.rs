//! Piece placement on the 8x8 grid.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Fixed 8x8 grid of optional pieces, indexed `[rank][file]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    pub const EMPTY: Board = Board {
        squares: [[None; 8]; 8],
    };

    /// The standard starting arrangement.
    pub fn starting_position() -> Board {
        let mut board = Board::EMPTY;
        for color in Color::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                board.set(Square::at(file, color.back_rank()), Piece::new(kind, color));
                board.set(
                    Square::at(file, color.pawn_rank()),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Return `true` if no piece stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.rank() as usize][sq.file() as usize] = Some(piece);
    }

    /// Remove whatever stands on `sq`, returning it.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize].take()
    }

    /// Iterate over occupied squares with their pieces, a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Return the square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece.is(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }

    /// Validate the structural invariants play relies on.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces()
                .filter(|&(_, piece)| piece.is(PieceKind::King, color))
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawn_on_back_rank = self.pieces().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self.pretty())?;
        write!(f, "}}")
    }
}

/// Wrapper for printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..Square::SIZE).rev() {
            write!(f, "{}  ", Square::rank_char(rank))?;
            for file in 0..Square::SIZE {
                let c = self
                    .0
                    .piece_at(Square::at(file, rank))
                    .map_or('.', Piece::fen_char);
                if file < Square::SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
