//! Error types for FEN parsing, board validation, move application and
//! move-text lookup.

use crate::game::GameResult;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Reasons a move is refused by the applier. The game is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move was not produced by the legality filter.
    #[error("move {notation:?} is not flagged legal")]
    NotLegal {
        /// Whatever notation the move carried.
        notation: String,
    },
    /// No piece of the side to move stands on the source square.
    #[error("no piece of the side to move on {square}")]
    EmptySource {
        /// The source square.
        square: Square,
    },
    /// The game already has a result.
    #[error("game is over: {result}")]
    GameOver {
        /// The recorded result.
        result: GameResult,
    },
}

/// Outcomes of looking a move up from typed text, other than success.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FindMoveError {
    /// The text is not a well-formed move token.
    #[error("cannot read {text:?} as a move")]
    Syntax {
        /// The submitted text.
        text: String,
    },
    /// The text matches more than one legal move.
    #[error("{text:?} matches {count} legal moves")]
    Ambiguous {
        /// The submitted text.
        text: String,
        /// Number of matching moves.
        count: usize,
    },
    /// The text matches no legal move.
    #[error("no legal move matches {text:?}")]
    NoneFound {
        /// The submitted text.
        text: String,
    },
    /// The single match is not flagged legal.
    #[error("{text:?} is not a legal move")]
    Illegal {
        /// The submitted text.
        text: String,
    },
    /// The game already has a result.
    #[error("game is over: {result}")]
    GameOver {
        /// The recorded result.
        result: GameResult,
    },
}
