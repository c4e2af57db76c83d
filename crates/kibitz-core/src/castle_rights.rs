//! Castling sides, their board geometry, and per-color castling rights.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// File index the king starts on.
const KING_HOME_FILE: u8 = 4;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File step from the king toward this side's rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Home square of the king for `color`.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        Square::at(KING_HOME_FILE, color.back_rank())
    }

    /// Home square of this side's rook for `color`.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        let file = match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        };
        Square::at(file, color.back_rank())
    }

    /// Square the king lands on: two files toward the rook.
    #[inline]
    pub const fn king_destination(self, color: Color) -> Square {
        Square::at(
            (KING_HOME_FILE as i8 + 2 * self.direction()) as u8,
            color.back_rank(),
        )
    }

    /// Square the rook lands on: the square the king crosses.
    #[inline]
    pub const fn rook_destination(self, color: Color) -> Square {
        Square::at(
            (KING_HOME_FILE as i8 + self.direction()) as u8,
            color.back_rank(),
        )
    }

    /// Squares strictly between the king and the rook, which must be empty.
    pub fn between(self, color: Color) -> impl Iterator<Item = Square> {
        let rank = color.back_rank();
        let files = match self {
            CastleSide::KingSide => 5..7,
            CastleSide::QueenSide => 1..4,
        };
        files.map(move |file| Square::at(file, rank))
    }

    /// Squares the king stands on, crosses or lands on, which must be safe.
    pub fn king_path(self, color: Color) -> impl Iterator<Item = Square> {
        let rank = color.back_rank();
        let step = self.direction();
        (0..=2).map(move |n| Square::at((KING_HOME_FILE as i8 + n * step) as u8, rank))
    }

    /// Castling notation: `0-0` for king side, `0-0-0` for queen side.
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "0-0",
            CastleSide::QueenSide => "0-0-0",
        }
    }
}

/// Castling rights as four independent bits: WK, WQ, BK, BQ.
///
/// Rights are only ever removed during play; nothing in move application
/// restores a bit once it is cleared.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Single bit for a color and side.
    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        let offset = match side {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        };
        1 << (color.index() * 2 + offset)
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// Return these rights plus `color`/`side`. Only used when loading a position.
    #[inline]
    pub(crate) const fn with(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::bit(color, side))
    }

    /// Return these rights without `color`/`side`.
    #[inline]
    pub const fn revoke(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::bit(color, side))
    }

    /// Return these rights without either right of `color`.
    #[inline]
    pub const fn revoke_color(self, color: Color) -> CastleRights {
        self.revoke(color, CastleSide::KingSide)
            .revoke(color, CastleSide::QueenSide)
    }

    /// Revoke whatever right depends on a piece standing on `sq`.
    ///
    /// A king home square drops both rights of that color, a rook home square
    /// drops the matching side. Any other square leaves the rights unchanged.
    pub fn revoke_square(self, sq: Square) -> CastleRights {
        let mut rights = self;
        for color in Color::ALL {
            if sq == CastleSide::king_home(color) {
                rights = rights.revoke_color(color);
            }
            for side in CastleSide::ALL {
                if sq == side.rook_home(color) {
                    rights = rights.revoke(color, side);
                }
            }
        }
        rights
    }

    /// Parse the FEN castling field (e.g. `KQkq`, `Kq`, `-`).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }

        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.with(color, side))
        })
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ]
        .into_iter()
        .filter(|&(color, side, _)| self.has(color, side))
        .map(|(_, _, c)| c)
        .collect()
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
