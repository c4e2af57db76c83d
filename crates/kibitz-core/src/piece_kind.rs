//! Piece kinds and their notation letters.

use std::fmt;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, in the order promotions are generated.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Uppercase notation letter (`P`, `N`, `B`, `R`, `Q`, `K`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a notation letter (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Return `true` if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn letter_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_letter(kind.letter()), Some(kind));
            assert_eq!(
                PieceKind::from_letter(kind.letter().to_ascii_lowercase()),
                Some(kind)
            );
        }
    }

    #[test]
    fn from_letter_invalid() {
        assert_eq!(PieceKind::from_letter('x'), None);
        assert_eq!(PieceKind::from_letter('='), None);
        assert_eq!(PieceKind::from_letter('1'), None);
    }

    #[test]
    fn promotable_kinds() {
        assert_eq!(PieceKind::PROMOTIONS.len(), 4);
        assert!(PieceKind::PROMOTIONS.iter().all(|k| k.is_promotable()));
        assert!(!PieceKind::Pawn.is_promotable());
        assert!(!PieceKind::King.is_promotable());
    }
}
