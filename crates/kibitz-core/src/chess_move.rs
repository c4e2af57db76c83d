//! Chess move representation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What a move does, with only the fields relevant to that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A non-capturing move.
    Regular { from: Square, to: Square },
    /// A capture; `en_passant` marks a pawn taking the pawn beside it.
    Capture {
        from: Square,
        to: Square,
        en_passant: bool,
    },
    /// Castling toward one side; the squares follow from the mover's color.
    Castle(CastleSide),
    /// A non-capturing pawn move onto the last rank.
    Promotion {
        from: Square,
        to: Square,
        promote_to: PieceKind,
    },
    /// A capturing pawn move onto the last rank.
    CapturePromotion {
        from: Square,
        to: Square,
        promote_to: PieceKind,
    },
}

/// The opponent's situation after a move: in check and/or out of legal moves.
///
/// Both flags together mean checkmate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Outlook {
    pub check: bool,
    pub stalemate: bool,
}

impl Outlook {
    /// Return `true` when the opponent is checkmated.
    #[inline]
    pub fn is_checkmate(self) -> bool {
        self.check && self.stalemate
    }
}

/// A move plus the annotations the pipeline attaches to it.
///
/// `legal` starts out `false` and is only set by the legality filter;
/// the applier refuses any move without it. `notation` and `outlook` are
/// display data filled in for the side to move's legal list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    kind: MoveKind,
    legal: bool,
    notation: String,
    outlook: Outlook,
}

impl Move {
    /// Create an unvalidated move of the given kind.
    pub fn new(kind: MoveKind) -> Move {
        Move {
            kind,
            legal: false,
            notation: String::new(),
            outlook: Outlook::default(),
        }
    }

    /// Create an unvalidated regular move. Generators start from this.
    pub fn regular(from: Square, to: Square) -> Move {
        Move::new(MoveKind::Regular { from, to })
    }

    /// Create an unvalidated castling move.
    pub fn castle(side: CastleSide) -> Move {
        Move::new(MoveKind::Castle(side))
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Source square, or `None` for castling.
    pub fn from(&self) -> Option<Square> {
        match self.kind {
            MoveKind::Regular { from, .. }
            | MoveKind::Capture { from, .. }
            | MoveKind::Promotion { from, .. }
            | MoveKind::CapturePromotion { from, .. } => Some(from),
            MoveKind::Castle(_) => None,
        }
    }

    /// Destination square, or `None` for castling.
    pub fn to(&self) -> Option<Square> {
        match self.kind {
            MoveKind::Regular { to, .. }
            | MoveKind::Capture { to, .. }
            | MoveKind::Promotion { to, .. }
            | MoveKind::CapturePromotion { to, .. } => Some(to),
            MoveKind::Castle(_) => None,
        }
    }

    /// Promotion kind, if this is a promotion.
    pub fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promote_to, .. }
            | MoveKind::CapturePromotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }

    /// Castling side, if this is castling.
    pub fn castle_side(&self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::Capture { .. } | MoveKind::CapturePromotion { .. }
        )
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::Capture {
                en_passant: true,
                ..
            }
        )
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion().is_some()
    }

    #[inline]
    pub fn is_legal(&self) -> bool {
        self.legal
    }

    #[inline]
    pub(crate) fn set_legal(&mut self, legal: bool) {
        self.legal = legal;
    }

    /// Return the same move with its kind replaced, keeping the flags.
    pub(crate) fn with_kind(&self, kind: MoveKind) -> Move {
        Move {
            kind,
            ..self.clone()
        }
    }

    /// Rendered short notation; empty until the encoder has run.
    #[inline]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    #[inline]
    pub(crate) fn set_notation(&mut self, notation: String) {
        self.notation = notation;
    }

    #[inline]
    pub fn outlook(&self) -> Outlook {
        self.outlook
    }

    #[inline]
    pub(crate) fn set_outlook(&mut self, outlook: Outlook) {
        self.outlook = outlook;
    }

    /// Coordinate form such as `e2e4`, `e7e8q` or `0-0`, independent of annotation.
    pub fn coordinates(&self) -> String {
        match self.kind {
            MoveKind::Castle(side) => side.notation().to_string(),
            _ => {
                let mut text = String::with_capacity(5);
                if let (Some(from), Some(to)) = (self.from(), self.to()) {
                    text.push_str(&from.to_string());
                    text.push_str(&to.to_string());
                }
                if let Some(kind) = self.promotion() {
                    text.push(kind.letter().to_ascii_lowercase());
                }
                text
            }
        }
    }
}

/// Shows the notation when annotated, the coordinates otherwise.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notation.is_empty() {
            write!(f, "{}", self.coordinates())
        } else {
            write!(f, "{}", self.notation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind, Outlook};
    use crate::castle_rights::CastleSide;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_moves_are_not_legal() {
        let mv = Move::regular(sq("e2"), sq("e4"));
        assert!(!mv.is_legal());
        assert!(mv.notation().is_empty());
        assert_eq!(mv.outlook(), Outlook::default());
    }

    #[test]
    fn accessors_by_kind() {
        let promo = Move::new(MoveKind::CapturePromotion {
            from: sq("b7"),
            to: sq("a8"),
            promote_to: PieceKind::Knight,
        });
        assert_eq!(promo.from(), Some(sq("b7")));
        assert_eq!(promo.to(), Some(sq("a8")));
        assert_eq!(promo.promotion(), Some(PieceKind::Knight));
        assert!(promo.is_capture());
        assert!(!promo.is_en_passant());

        let castle = Move::castle(CastleSide::QueenSide);
        assert_eq!(castle.from(), None);
        assert_eq!(castle.castle_side(), Some(CastleSide::QueenSide));
        assert!(!castle.is_capture());
    }

    #[test]
    fn en_passant_is_a_capture() {
        let ep = Move::new(MoveKind::Capture {
            from: sq("e5"),
            to: sq("d6"),
            en_passant: true,
        });
        assert!(ep.is_capture());
        assert!(ep.is_en_passant());
    }

    #[test]
    fn coordinates_and_display() {
        let promo = Move::new(MoveKind::Promotion {
            from: sq("e7"),
            to: sq("e8"),
            promote_to: PieceKind::Queen,
        });
        assert_eq!(promo.coordinates(), "e7e8q");
        assert_eq!(Move::castle(CastleSide::KingSide).to_string(), "0-0");

        let mut annotated = Move::regular(sq("g1"), sq("f3"));
        annotated.set_notation("Nf3".to_string());
        assert_eq!(annotated.to_string(), "Nf3");
    }

    #[test]
    fn checkmate_needs_both_flags() {
        assert!(Outlook { check: true, stalemate: true }.is_checkmate());
        assert!(!Outlook { check: true, stalemate: false }.is_checkmate());
        assert!(!Outlook { check: false, stalemate: true }.is_checkmate());
    }
}
