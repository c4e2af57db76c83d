//! Reading typed move text back into a legal move.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::error::FindMoveError;
use crate::game::Game;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Accepted token length after trimming, in bytes.
const TOKEN_LEN: std::ops::RangeInclusive<usize> = 2..=16;

/// Which way to read a token whose first letter may be a piece or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    /// The leading letter names the moving piece.
    Piece,
    /// No piece letter; the move is a pawn move.
    Pawn,
}

/// Fields recovered from a non-castling token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MoveText {
    piece: PieceKind,
    from_file: Option<u8>,
    from_rank: Option<u8>,
    to: Square,
    promotion: Option<PieceKind>,
}

impl MoveText {
    /// Parse a lowercase token under one reading, or `None` if it does not fit.
    ///
    /// Fields are taken right to left: `=X` promotion, destination, `x`,
    /// source rank, source file. Anything left over is an error.
    fn read(token: &[char], reading: Reading) -> Option<MoveText> {
        let (piece, mut rest) = match reading {
            Reading::Pawn => (PieceKind::Pawn, token),
            Reading::Piece => {
                let [letter, tail @ ..] = token else {
                    return None;
                };
                (PieceKind::from_letter(*letter)?, tail)
            }
        };

        let mut promotion = None;
        if let [head @ .., '=', letter] = rest {
            let kind = PieceKind::from_letter(*letter).filter(|kind| kind.is_promotable())?;
            promotion = Some(kind);
            rest = head;
        }

        let [head @ .., file, rank] = rest else {
            return None;
        };
        let to = Square::new(Square::file_from_char(*file)?, Square::rank_from_char(*rank)?)?;
        rest = head;

        if let [head @ .., 'x'] = rest {
            rest = head;
        }

        let mut from_rank = None;
        if let [head @ .., c] = rest
            && let Some(rank) = Square::rank_from_char(*c)
        {
            from_rank = Some(rank);
            rest = head;
        }

        let mut from_file = None;
        if let [head @ .., c] = rest
            && let Some(file) = Square::file_from_char(*c)
        {
            from_file = Some(file);
            rest = head;
        }

        rest.is_empty().then_some(MoveText {
            piece,
            from_file,
            from_rank,
            to,
            promotion,
        })
    }

    /// Return `true` if `mv` fits every field given in the text.
    fn matches(&self, position: &Position, mv: &Move) -> bool {
        let (Some(from), Some(to)) = (mv.from(), mv.to()) else {
            return false;
        };
        to == self.to
            && position
                .piece_at(from)
                .is_some_and(|piece| piece.kind() == self.piece)
            && self.from_file.is_none_or(|file| file == from.file())
            && self.from_rank.is_none_or(|rank| rank == from.rank())
            && mv.promotion() == self.promotion
    }
}

/// Castling side named by a lowercase token, if it is a castling literal.
fn castle_literal(token: &str) -> Option<CastleSide> {
    match token {
        "0-0" | "00" | "o-o" | "oo" => Some(CastleSide::KingSide),
        "0-0-0" | "000" | "o-o-o" | "ooo" => Some(CastleSide::QueenSide),
        _ => None,
    }
}

impl Game {
    /// Find the legal move described by `text`.
    ///
    /// Text is matched case-insensitively, with surrounding whitespace and one
    /// trailing `+` or `#` ignored. A capital first letter is read as a piece
    /// before trying it as a pawn file, a small one the other way round, so
    /// both `bxc3` and `Bxc3` resolve as expected.
    ///
    /// # Errors
    ///
    /// See [`FindMoveError`]; the game is never modified.
    pub fn find_move(&self, text: &str) -> Result<Move, FindMoveError> {
        if self.is_over() {
            return Err(FindMoveError::GameOver {
                result: self.result(),
            });
        }

        let token = text.trim();
        let syntax = || FindMoveError::Syntax {
            text: token.to_string(),
        };
        if !TOKEN_LEN.contains(&token.len()) || !token.is_ascii() {
            return Err(syntax());
        }

        let piece_first = token.starts_with(|c: char| c.is_ascii_uppercase());
        let lowered = token.to_ascii_lowercase();
        let body = lowered.strip_suffix(['+', '#']).unwrap_or(&lowered);

        let moves = self.legal_moves();
        // Canonical notation, as printed by the move list, needs no reading.
        if let Some(mv) = moves.find_notation(token) {
            return Ok(mv.clone());
        }

        let matched: Vec<&Move> = if let Some(side) = castle_literal(body) {
            moves
                .iter()
                .filter(|mv| mv.castle_side() == Some(side))
                .collect()
        } else {
            let chars: Vec<char> = body.chars().collect();
            let order = if piece_first {
                [Reading::Piece, Reading::Pawn]
            } else {
                [Reading::Pawn, Reading::Piece]
            };
            let readings: Vec<MoveText> = order
                .into_iter()
                .filter_map(|reading| MoveText::read(&chars, reading))
                .collect();
            if readings.is_empty() {
                return Err(syntax());
            }

            let position = self.position();
            readings
                .iter()
                .map(|parsed| {
                    moves
                        .iter()
                        .filter(|mv| parsed.matches(position, mv))
                        .collect::<Vec<_>>()
                })
                .find(|found| !found.is_empty())
                .unwrap_or_default()
        };

        match matched.as_slice() {
            [] => Err(FindMoveError::NoneFound {
                text: token.to_string(),
            }),
            [mv] if mv.is_legal() => Ok((*mv).clone()),
            [_] => Err(FindMoveError::Illegal {
                text: token.to_string(),
            }),
            many => Err(FindMoveError::Ambiguous {
                text: token.to_string(),
                count: many.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameResult;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn reads_full_token() {
        let parsed = MoveText::read(&chars("ng1xf3"), Reading::Piece).unwrap();
        assert_eq!(parsed.piece, PieceKind::Knight);
        assert_eq!(parsed.from_file, Some(6));
        assert_eq!(parsed.from_rank, Some(0));
        assert_eq!(parsed.to, sq("f3"));
        assert_eq!(parsed.promotion, None);
    }

    #[test]
    fn reads_pawn_promotion() {
        let parsed = MoveText::read(&chars("dxe8=q"), Reading::Pawn).unwrap();
        assert_eq!(parsed.piece, PieceKind::Pawn);
        assert_eq!(parsed.from_file, Some(3));
        assert_eq!(parsed.to, sq("e8"));
        assert_eq!(parsed.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn rejects_leftovers_and_bad_promotions() {
        assert!(MoveText::read(&chars("zz9"), Reading::Pawn).is_none());
        assert!(MoveText::read(&chars("zz9"), Reading::Piece).is_none());
        assert!(MoveText::read(&chars("e8=k"), Reading::Pawn).is_none());
        assert!(MoveText::read(&chars("qqe4"), Reading::Piece).is_none());
        assert!(MoveText::read(&chars("e4"), Reading::Piece).is_none());
    }

    #[test]
    fn b_reads_both_ways() {
        let pawn = MoveText::read(&chars("bxc3"), Reading::Pawn).unwrap();
        assert_eq!(pawn.piece, PieceKind::Pawn);
        assert_eq!(pawn.from_file, Some(1));
        let bishop = MoveText::read(&chars("bxc3"), Reading::Piece).unwrap();
        assert_eq!(bishop.piece, PieceKind::Bishop);
        assert_eq!(bishop.from_file, None);
    }

    #[test]
    fn castle_literals() {
        for text in ["0-0", "00", "o-o", "oo"] {
            assert_eq!(castle_literal(text), Some(CastleSide::KingSide));
        }
        for text in ["0-0-0", "000", "o-o-o", "ooo"] {
            assert_eq!(castle_literal(text), Some(CastleSide::QueenSide));
        }
        assert_eq!(castle_literal("0-0-0-0"), None);
    }

    #[test]
    fn finds_simple_moves() {
        let game = Game::new();
        let mv = game.find_move("e4").unwrap();
        assert_eq!(mv.from(), Some(sq("e2")));
        assert_eq!(mv.to(), Some(sq("e4")));
        assert!(mv.is_legal());
        assert_eq!(mv.notation(), "e4");
        assert_eq!(game.find_move("  NF3+ ").unwrap().notation(), "Nf3");
    }

    #[test]
    fn outcome_kinds() {
        let game = Game::from_fen("4k3/8/8/8/8/8/3N4/4K1N1 w - - 0 1").unwrap();
        assert_eq!(
            game.find_move("Nf3"),
            Err(FindMoveError::Ambiguous {
                text: "Nf3".to_string(),
                count: 2
            })
        );
        assert_eq!(game.find_move("Ngf3").unwrap().from(), Some(Square::G1));
        assert_eq!(game.find_move("N2f3").unwrap().from(), Some(sq("d2")));
        assert!(matches!(game.find_move("Nf5"), Err(FindMoveError::NoneFound { .. })));
        assert!(matches!(game.find_move("zz9"), Err(FindMoveError::Syntax { .. })));
        assert!(matches!(game.find_move("e"), Err(FindMoveError::Syntax { .. })));
        assert!(matches!(
            game.find_move("Nf3Nf3Nf3Nf3Nf3Nf3"),
            Err(FindMoveError::Syntax { .. })
        ));
        assert!(matches!(game.find_move("0-0"), Err(FindMoveError::NoneFound { .. })));
    }

    #[test]
    fn pawn_and_bishop_on_b_file() {
        let game = Game::from_fen("4k3/8/8/8/8/2p5/1P6/2B1K3 w - - 0 1").unwrap();
        let pawn = game.find_move("bxc3").unwrap();
        assert_eq!(pawn.from(), Some(sq("b2")));
        let bishop = Game::from_fen("4k3/8/8/8/8/8/1B6/4K3 w - - 0 1").unwrap();
        let mv = bishop.find_move("bc3").unwrap();
        assert_eq!(mv.from(), Some(sq("b2")));
        assert_eq!(mv.notation(), "Bc3");
    }

    #[test]
    fn promotion_must_be_named() {
        let game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(matches!(game.find_move("a8"), Err(FindMoveError::NoneFound { .. })));
        let mv = game.find_move("a8=N").unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Knight));
        assert!(matches!(game.find_move("a8=K"), Err(FindMoveError::Syntax { .. })));
    }

    #[test]
    fn castling_variants() {
        let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        for text in ["0-0", "O-O", "oo", "00"] {
            assert_eq!(game.find_move(text).unwrap().castle_side(), Some(CastleSide::KingSide));
        }
        assert_eq!(
            game.find_move("O-O-O").unwrap().castle_side(),
            Some(CastleSide::QueenSide)
        );
    }

    #[test]
    fn exact_notation_found_directly() {
        let game = Game::from_fen("3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = game.find_move("exd8=Q+").unwrap();
        assert_eq!(mv.notation(), "exd8=Q+");
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
    }

    #[test]
    fn game_over_short_circuits() {
        let mut game = Game::new();
        game.declare_result(GameResult::AgreedDraw);
        assert_eq!(
            game.find_move("zz9"),
            Err(FindMoveError::GameOver {
                result: GameResult::AgreedDraw
            })
        );
    }

    #[test]
    fn every_notation_round_trips() {
        let fens = [
            crate::fen::STARTING_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            "4k3/8/8/8/8/Q7/8/Q1Q4K w - - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
        ];
        for fen in fens {
            let game = Game::from_fen(fen).unwrap();
            for mv in &game.legal_moves() {
                assert_eq!(&game.find_move(mv.notation()).unwrap(), mv, "{fen}: {mv}");
                // Without the check suffix the text no longer matches exactly
                // and goes through the readings.
                let bare = mv.notation().trim_end_matches(['+', '#']);
                assert_eq!(&game.find_move(bare).unwrap(), mv, "{fen}: {bare}");
            }
        }
    }
}
