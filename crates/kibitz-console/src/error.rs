//! Console errors.

use kibitz_core::FenError;

/// Errors that can occur while reading or running console commands.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A line with several words that starts with no known command.
    #[error("unknown command: {line}")]
    UnknownCommand {
        /// The line as typed.
        line: String,
    },

    /// `set` named a setting that does not exist.
    #[error("unknown setting: {name}")]
    UnknownSetting {
        /// The setting name.
        name: String,
    },

    /// A command or setting needs a value that was not given.
    #[error("missing value for {name}")]
    MissingValue {
        /// The command or setting name.
        name: String,
    },

    /// A value could not be parsed for the command or setting it was given to.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// The command or setting name.
        name: String,
        /// The value that failed to parse.
        value: String,
    },

    /// `load` was given a FEN string that does not describe a valid position.
    #[error("invalid FEN {fen:?}: {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why it failed.
        source: FenError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
