//! The authoritative game: position, result and move history.

use std::fmt;

use tracing::{debug, warn};

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{FenError, MoveError};
use crate::evaluate;
use crate::movegen::MoveList;
use crate::notation;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// How a game stands.
///
/// Only [`Checkmate`](GameResult::Checkmate) and
/// [`Stalemate`](GameResult::Stalemate) are ever derived from play; the other
/// terminal states are recorded through [`Game::declare_result`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameResult {
    #[default]
    InProgress,
    Checkmate {
        winner: Color,
    },
    Stalemate,
    Timeout {
        winner: Color,
    },
    Resignation {
        winner: Color,
    },
    InsufficientMaterial,
    /// A flag fell but the other side could not have mated.
    TimeoutInsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
    AgreedDraw,
}

impl GameResult {
    /// Return `true` once the game has any result.
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }

    /// The winning side, or `None` for draws and unfinished games.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner }
            | GameResult::Timeout { winner }
            | GameResult::Resignation { winner } => Some(winner),
            _ => None,
        }
    }

    /// Score as written after the move list: `1-0`, `0-1` or `1/2-1/2`.
    pub fn score_tag(self) -> Option<&'static str> {
        if !self.is_over() {
            return None;
        }
        Some(match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        })
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::Checkmate { winner } => write!(f, "{} wins by checkmate", winner.name()),
            GameResult::Stalemate => write!(f, "draw by stalemate"),
            GameResult::Timeout { winner } => write!(f, "{} wins on time", winner.name()),
            GameResult::Resignation { winner } => {
                write!(f, "{} wins by resignation", winner.name())
            }
            GameResult::InsufficientMaterial => write!(f, "draw by insufficient material"),
            GameResult::TimeoutInsufficientMaterial => {
                write!(f, "draw on time with insufficient material")
            }
            GameResult::FiftyMoveRule => write!(f, "draw by the fifty-move rule"),
            GameResult::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
            GameResult::AgreedDraw => write!(f, "draw by agreement"),
        }
    }
}

/// A game in progress: the current position, its result and every move
/// performed so far.
///
/// Invalid input never changes a `Game`; every mutating method either
/// succeeds completely or returns an error and leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    result: GameResult,
    history: Vec<Move>,
    /// Full-move number and side of the first recorded move, for rendering
    /// games set up mid-way.
    first_move_number: u16,
    first_mover: Color,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Game {
        Game::from_position(Position::starting_position())
    }

    /// A game continuing from `position`.
    ///
    /// A position where the side to move has no legal move starts out
    /// finished.
    pub fn from_position(position: Position) -> Game {
        let to_move = position.side_to_move();
        let outlook = evaluate::outlook(&position, to_move);
        let result = match (outlook.stalemate, outlook.check) {
            (true, true) => GameResult::Checkmate {
                winner: to_move.flip(),
            },
            (true, false) => GameResult::Stalemate,
            (false, _) => GameResult::InProgress,
        };
        Game {
            position,
            result,
            history: Vec::new(),
            first_move_number: position.fullmove_number(),
            first_mover: to_move,
        }
    }

    /// A game continuing from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        Ok(Game::from_position(fen.parse()?))
    }

    /// Start over from the standard position, dropping history and result.
    pub fn reset(&mut self) {
        *self = Game::new();
        debug!("game reset");
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// The winning side once the game is decided.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.result.winner()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Moves performed so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Every legal move for the side to move, with notation and outlook.
    ///
    /// Regenerated on each call. Empty once the game has a result.
    pub fn legal_moves(&self) -> MoveList {
        if self.is_over() {
            return MoveList::new();
        }
        let mut moves = self.position.legal_moves();
        notation::annotate(&self.position, &mut moves);
        moves
    }

    /// Play `mv`, record it and update the result.
    ///
    /// The move must carry the legal flag and be one of the current legal
    /// moves; the recorded copy is the annotated one from the current list,
    /// so its notation and outlook always describe this position.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once a result is set, [`MoveError::NotLegal`]
    /// for unflagged or foreign moves, [`MoveError::EmptySource`] from the
    /// position itself. The game is unchanged on error.
    pub fn perform_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if self.is_over() {
            warn!(mv = %mv, result = %self.result, "refusing move after game end");
            return Err(MoveError::GameOver {
                result: self.result,
            });
        }
        if !mv.is_legal() {
            warn!(mv = %mv, "refusing move not flagged legal");
            return Err(MoveError::NotLegal {
                notation: mv.to_string(),
            });
        }

        let Some(recorded) = self
            .legal_moves()
            .into_iter()
            .find(|candidate| candidate.kind() == mv.kind())
        else {
            warn!(mv = %mv, fen = %self.position, "refusing move not legal here");
            return Err(MoveError::NotLegal {
                notation: mv.to_string(),
            });
        };

        let mover = self.side_to_move();
        self.position.apply(&recorded)?;

        let outlook = recorded.outlook();
        if outlook.stalemate {
            self.result = if outlook.check {
                GameResult::Checkmate { winner: mover }
            } else {
                GameResult::Stalemate
            };
        }

        debug!(mv = %recorded, side = mover.name(), "performed move");
        if self.is_over() {
            debug!(result = %self.result, "game over");
        }
        self.history.push(recorded);
        Ok(())
    }

    /// Record a result the rules engine does not derive itself, such as a
    /// resignation or an agreed draw.
    pub fn declare_result(&mut self, result: GameResult) {
        debug!(%result, "result declared");
        self.result = result;
    }

    /// Render the history as numbered move text, e.g. `1. e4 e5 2. Nf3`,
    /// followed by the score once the game is over.
    pub fn move_history_string(&self) -> String {
        let mut text = String::new();
        let mut number = self.first_move_number;
        let mut side = self.first_mover;

        for (ply, mv) in self.history.iter().enumerate() {
            if ply > 0 {
                text.push(' ');
            }
            match side {
                Color::White => text.push_str(&format!("{number}. ")),
                Color::Black if ply == 0 => text.push_str(&format!("{number}... ")),
                Color::Black => {}
            }
            text.push_str(&mv.to_string());
            if side == Color::Black {
                number = number.saturating_add(1);
            }
            side = side.flip();
        }

        if let Some(tag) = self.result.score_tag() {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(tag);
        }
        text
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
