//! Board squares addressed by file and rank.

use std::fmt;

/// A square on the 8x8 board.
///
/// Both coordinates are zero-based: file 0 is the a-file, rank 0 is White's
/// back rank. Every constructor checks bounds, so a `Square` is always on the
/// board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Number of files (and ranks) on the board.
    pub const SIZE: u8 = 8;

    pub const A1: Square = Square::at(0, 0);
    pub const C1: Square = Square::at(2, 0);
    pub const D1: Square = Square::at(3, 0);
    pub const E1: Square = Square::at(4, 0);
    pub const F1: Square = Square::at(5, 0);
    pub const G1: Square = Square::at(6, 0);
    pub const H1: Square = Square::at(7, 0);
    pub const A8: Square = Square::at(0, 7);
    pub const C8: Square = Square::at(2, 7);
    pub const D8: Square = Square::at(3, 7);
    pub const E8: Square = Square::at(4, 7);
    pub const F8: Square = Square::at(5, 7);
    pub const G8: Square = Square::at(6, 7);
    pub const H8: Square = Square::at(7, 7);

    /// Create a square from zero-based file and rank, or `None` if off the board.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Square> {
        if file < Self::SIZE && rank < Self::SIZE {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be in range.
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Square {
        debug_assert!(file < Self::SIZE && rank < Self::SIZE);
        Square { file, rank }
    }

    /// Parse a file letter (`a`-`h`, case-insensitive) into a file index.
    pub fn file_from_char(c: char) -> Option<u8> {
        let c = c.to_ascii_lowercase();
        ('a'..='h').contains(&c).then(|| c as u8 - b'a')
    }

    /// Parse a rank digit (`1`-`8`) into a rank index.
    pub fn rank_from_char(c: char) -> Option<u8> {
        ('1'..='8').contains(&c).then(|| c as u8 - b'1')
    }

    /// Letter of a file index (0 -> `a`).
    #[inline]
    pub const fn file_char(file: u8) -> char {
        (b'a' + file) as char
    }

    /// Digit of a rank index (0 -> `1`).
    #[inline]
    pub const fn rank_char(rank: u8) -> char {
        (b'1' + rank) as char
    }

    /// Parse algebraic notation such as `e4`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = Self::file_from_char(chars.next()?)?;
        let rank = Self::rank_from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::at(file, rank))
    }

    /// Zero-based file index.
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Step by a file/rank delta, returning `None` when leaving the board.
    #[inline]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file as i8 + file_delta;
        let rank = self.rank as i8 + rank_delta;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    /// Iterate over all 64 squares, rank by rank from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::SIZE).flat_map(|rank| (0..Self::SIZE).map(move |file| Square::at(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::file_char(self.file), Self::rank_char(self.rank))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
