//! Console command parsing.

use kibitz_core::Position;

use crate::error::ConsoleError;

/// A runtime adjustment made with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set autoplay <plies>` -- cap on plies a single `auto` may play.
    AutoplayLimit(u32),
    /// `set board on|off` -- print the board after every move.
    ShowBoard(bool),
    /// `set perft <depth>` -- deepest `perft` the session will run.
    PerftLimit(usize),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A single word that is not a keyword: move text such as `Nf3` or `O-O`.
    Move(String),
    /// `moves` -- list the legal moves.
    Moves,
    /// `history` -- print the numbered move list.
    History,
    /// `board` -- print the board.
    Board,
    /// `fen` -- print the position as FEN.
    Fen,
    /// `load <fen>` -- start a new game from a position.
    Load(Position),
    /// `auto [plies]` -- let the first legal move be played repeatedly.
    Auto(Option<u32>),
    /// `perft <depth>` -- count move paths from the current position.
    Perft(usize),
    /// `new` -- start over from the standard position.
    New,
    /// `resign` -- the side to move gives up.
    Resign,
    /// `draw` -- both sides agree to a draw.
    Draw,
    /// `set <name> <value>` -- adjust a session setting.
    Set(SessionOption),
    /// `quit` -- leave the session.
    Quit,
    /// A blank line.
    Empty,
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match (first, args) {
        ("moves", []) => Ok(Command::Moves),
        ("history", []) => Ok(Command::History),
        ("board", []) => Ok(Command::Board),
        ("fen", []) => Ok(Command::Fen),
        ("new", []) => Ok(Command::New),
        ("resign", []) => Ok(Command::Resign),
        ("draw", []) => Ok(Command::Draw),
        ("quit", []) => Ok(Command::Quit),
        ("auto", []) => Ok(Command::Auto(None)),
        ("auto", [plies]) => Ok(Command::Auto(Some(parse_value("auto", plies)?))),
        ("perft", [depth]) => Ok(Command::Perft(parse_value("perft", depth)?)),
        ("perft", []) => Err(ConsoleError::MissingValue {
            name: "perft".to_string(),
        }),
        ("load", []) => Err(ConsoleError::MissingValue {
            name: "load".to_string(),
        }),
        ("load", fields) => parse_load(fields),
        ("set", args) => parse_set(args),
        (text, []) => Ok(Command::Move(text.to_string())),
        _ => Err(ConsoleError::UnknownCommand {
            line: line.trim().to_string(),
        }),
    }
}

/// Parse the `load` arguments: the six FEN fields.
fn parse_load(fields: &[&str]) -> Result<Command, ConsoleError> {
    let fen = fields.join(" ");
    let position = fen
        .parse()
        .map_err(|source| ConsoleError::InvalidFen { fen, source })?;
    Ok(Command::Load(position))
}

/// Parse the `set` arguments.
///
/// Supports `set autoplay <plies>`, `set board on|off` and `set perft <depth>`.
fn parse_set(args: &[&str]) -> Result<Command, ConsoleError> {
    let Some((&name, rest)) = args.split_first() else {
        return Err(ConsoleError::MissingValue {
            name: "set".to_string(),
        });
    };
    let Some(&value) = rest.first() else {
        return Err(ConsoleError::MissingValue {
            name: name.to_string(),
        });
    };

    let option = match name {
        "autoplay" => SessionOption::AutoplayLimit(parse_value(name, value)?),
        "board" => SessionOption::ShowBoard(parse_switch(name, value)?),
        "perft" => SessionOption::PerftLimit(parse_value(name, value)?),
        _ => {
            return Err(ConsoleError::UnknownSetting {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

/// Parse a numeric value for `name`.
fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConsoleError> {
    value.parse().map_err(|_| ConsoleError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Parse an on/off value for `name`.
fn parse_switch(name: &str, value: &str) -> Result<bool, ConsoleError> {
    match value {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ConsoleError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
