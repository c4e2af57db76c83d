//! Core chess rules: board state, legal move generation, move application,
//! and reading and writing move notation.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
pub mod evaluate;
mod fen;
mod game;
mod make_move;
pub mod movegen;
mod notation;
mod parse;
pub mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, Outlook};
pub use color::Color;
pub use error::{BoardError, FenError, FindMoveError, MoveError};
pub use fen::STARTING_FEN;
pub use game::{Game, GameResult};
pub use movegen::MoveList;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::Square;
