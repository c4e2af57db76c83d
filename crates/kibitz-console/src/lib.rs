//! Line-oriented console front end for kibitz.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption};
pub use error::ConsoleError;
pub use session::{Session, SessionConfig};
