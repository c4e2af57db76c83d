//! FEN string parsing and serialization for [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, color, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let board = parse_placement(placement)?;

        let side_to_move = match color {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(castling)?;

        let en_passant = match en_passant {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: text.to_string(),
                }
            })?),
        };

        let halfmove_clock = parse_counter(halfmove, "halfmove clock")?;
        let fullmove_number = parse_counter(fullmove, "fullmove number")?;

        board.validate()?;
        if let Some(target) = en_passant
            && !en_passant_consistent(&board, side_to_move, target)
        {
            return Err(FenError::InvalidEnPassant {
                found: target.to_string(),
            });
        }
        Ok(Position::from_raw(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

/// Parse the piece placement field, rank 8 first.
fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::EMPTY;
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file = file.saturating_add(digit as u8);
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::new(file, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file as usize + 1,
            })?;
            board.set(sq, piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file as usize,
            });
        }
    }
    Ok(board)
}

/// An en-passant target must be the empty square an opponent pawn just
/// skipped: the pawn stands in front of it and its start square is empty.
fn en_passant_consistent(board: &Board, side_to_move: Color, target: Square) -> bool {
    let them = side_to_move.flip();
    let forward = side_to_move.forward();
    let (Some(pushed), Some(origin)) = (target.offset(0, -forward), target.offset(0, forward)) else {
        return false;
    };
    origin.rank() == them.pawn_rank()
        && board.is_empty(origin)
        && board.is_empty(target)
        && board.piece_at(pushed) == Some(Piece::new(PieceKind::Pawn, them))
}

fn parse_counter(text: &str, field: &'static str) -> Result<u16, FenError> {
    text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..Square::SIZE).rev() {
            let mut empty_count = 0u8;
            for file in 0..Square::SIZE {
                match self.piece_at(Square::at(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
