//! Short algebraic notation for legal moves.

use crate::chess_move::{Move, MoveKind};
use crate::evaluate;
use crate::movegen::MoveList;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Fill in the outlook and notation of every move in `moves`.
///
/// `moves` must be the complete legal list of `position`: disambiguation is
/// computed against the other entries.
pub(crate) fn annotate(position: &Position, moves: &mut MoveList) {
    let opponent = position.side_to_move().flip();
    for mv in moves.as_mut_slice() {
        let mut after = *position;
        if after.apply(mv).is_ok() {
            mv.set_outlook(evaluate::outlook(&after, opponent));
        }
    }

    let rendered: Vec<String> = moves
        .iter()
        .map(|mv| encode(position, mv, moves.as_slice()))
        .collect();
    for (mv, text) in moves.as_mut_slice().iter_mut().zip(rendered) {
        mv.set_notation(text);
    }
}

/// Render `mv` as played from `position`, with `siblings` the full legal list.
///
/// Castling renders as `0-0` / `0-0-0`. Other moves are the piece letter
/// (none for pawns), the minimal disambiguator, `x` on captures, the
/// destination, `=Q` style promotion, then `+` or `#` from the move's outlook.
pub(crate) fn encode(position: &Position, mv: &Move, siblings: &[Move]) -> String {
    let mut text = String::with_capacity(8);

    match mv.kind() {
        MoveKind::Castle(side) => text.push_str(side.notation()),
        _ => {
            let (Some(from), Some(to)) = (mv.from(), mv.to()) else {
                return mv.coordinates();
            };
            let Some(piece) = position.piece_at(from) else {
                return mv.coordinates();
            };

            if piece.kind() == PieceKind::Pawn {
                if mv.is_capture() {
                    text.push(Square::file_char(from.file()));
                }
            } else {
                text.push(piece.kind().letter());
                text.push_str(&disambiguator(position, piece.kind(), from, to, siblings));
            }
            if mv.is_capture() {
                text.push('x');
            }
            text.push_str(&to.to_string());
            if let Some(kind) = mv.promotion() {
                text.push('=');
                text.push(kind.letter());
            }
        }
    }

    let outlook = mv.outlook();
    if outlook.is_checkmate() {
        text.push('#');
    } else if outlook.check {
        text.push('+');
    }
    text
}

/// Source file and/or rank needed to tell this move apart from other pieces
/// of the same kind landing on the same square.
fn disambiguator(
    position: &Position,
    kind: PieceKind,
    from: Square,
    to: Square,
    siblings: &[Move],
) -> String {
    let rivals: Vec<Square> = siblings
        .iter()
        .filter(|other| other.to() == Some(to))
        .filter_map(Move::from)
        .filter(|&source| source != from)
        .filter(|&source| position.piece_at(source).is_some_and(|p| p.kind() == kind))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    let file = Square::file_char(from.file());
    let rank = Square::rank_char(from.rank());
    if rivals.iter().all(|r| r.file() != from.file()) {
        file.to_string()
    } else if rivals.iter().all(|r| r.rank() != from.rank()) {
        rank.to_string()
    } else {
        format!("{file}{rank}")
    }
}
