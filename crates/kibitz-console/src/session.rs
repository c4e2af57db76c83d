//! Line-oriented play session over a [`Game`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use kibitz_core::perft::{divide, perft};
use kibitz_core::{Game, GameResult, Position};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::ConsoleError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Most plies a single `auto` command may play.
    pub autoplay_limit: u32,
    /// Print the board after each move.
    pub show_board: bool,
    /// Deepest `perft` accepted.
    pub perft_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autoplay_limit: 500,
            show_board: true,
            perft_limit: 5,
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// An interactive session: one game plus the session settings.
///
/// Reads one command per line and writes plain-text replies. Errors in a
/// command are reported to the user and never end the session; only I/O
/// failures do.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a new game from the standard position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session continuing from `position`.
    pub fn from_position(position: Position) -> Self {
        Self {
            game: Game::from_position(position),
            config: SessionConfig::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the session on stdin and stdout until `quit` or end of input.
    pub fn run(self) -> Result<(), ConsoleError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run the session on arbitrary input and output.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, out: &mut W) -> Result<(), ConsoleError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(cmd) => {
                    if self.execute(cmd, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }

        info!(history = %self.game.move_history_string(), "session closing");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, ConsoleError> {
        match cmd {
            Command::Move(text) => self.handle_move(&text, out)?,
            Command::Moves => self.handle_moves(out)?,
            Command::History => writeln!(out, "{}", self.game.move_history_string())?,
            Command::Board => self.print_board(out)?,
            Command::Fen => writeln!(out, "{}", self.game.position())?,
            Command::Load(position) => {
                self.game = Game::from_position(position);
                self.report_position(out)?;
            }
            Command::Auto(plies) => self.handle_auto(plies, out)?,
            Command::Perft(depth) => self.handle_perft(depth, out)?,
            Command::New => {
                self.game.reset();
                self.report_position(out)?;
            }
            Command::Resign => {
                let winner = self.game.side_to_move().flip();
                self.declare(GameResult::Resignation { winner }, out)?;
            }
            Command::Draw => self.declare(GameResult::AgreedDraw, out)?,
            Command::Set(option) => self.handle_set(option, out)?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_move<W: Write>(&mut self, text: &str, out: &mut W) -> Result<(), ConsoleError> {
        let played = self
            .game
            .find_move(text)
            .map_err(|e| e.to_string())
            .and_then(|mv| self.game.perform_move(&mv).map(|()| mv).map_err(|e| e.to_string()));

        match played {
            Ok(mv) => {
                writeln!(out, "played {mv}")?;
                self.report_position(out)?;
            }
            Err(message) => {
                warn!(text, error = %message, "move rejected");
                writeln!(out, "error: {message}")?;
            }
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        let mut notations: Vec<String> = self
            .game
            .legal_moves()
            .iter()
            .map(|mv| mv.notation().to_string())
            .collect();
        notations.sort();
        writeln!(out, "{}", notations.join(" "))?;
        Ok(())
    }

    /// Play the first legal move repeatedly, at most `plies` times and never
    /// more than the configured limit.
    fn handle_auto<W: Write>(&mut self, plies: Option<u32>, out: &mut W) -> Result<(), ConsoleError> {
        let limit = plies
            .unwrap_or(self.config.autoplay_limit)
            .min(self.config.autoplay_limit);

        let mut played = 0;
        while played < limit && !self.game.is_over() {
            let moves = self.game.legal_moves();
            let Some(mv) = moves.iter().next() else {
                break;
            };
            if let Err(e) = self.game.perform_move(mv) {
                warn!(error = %e, "autoplay stopped");
                writeln!(out, "error: {e}")?;
                break;
            }
            played += 1;
        }

        debug!(played, "autoplay finished");
        writeln!(out, "{}", self.game.move_history_string())?;
        self.report_position(out)
    }

    fn handle_perft<W: Write>(&self, depth: usize, out: &mut W) -> Result<(), ConsoleError> {
        if depth > self.config.perft_limit {
            warn!(depth, limit = self.config.perft_limit, "perft depth refused");
            writeln!(out, "error: perft depth {depth} exceeds limit {}", self.config.perft_limit)?;
            return Ok(());
        }
        let position = self.game.position();
        let results = divide(position, depth);
        // Depth 0 and positions without moves have no breakdown.
        let total: u64 = if results.is_empty() {
            perft(position, depth)
        } else {
            results.iter().map(|(_, count)| count).sum()
        };
        for (mv, count) in &results {
            writeln!(out, "{mv}: {count}")?;
        }
        writeln!(out, "total: {total}")?;
        Ok(())
    }

    fn handle_set<W: Write>(&mut self, option: SessionOption, out: &mut W) -> Result<(), ConsoleError> {
        match option {
            SessionOption::AutoplayLimit(plies) => {
                self.config.autoplay_limit = plies;
                writeln!(out, "autoplay = {plies}")?;
            }
            SessionOption::ShowBoard(show) => {
                self.config.show_board = show;
                writeln!(out, "board = {}", if show { "on" } else { "off" })?;
            }
            SessionOption::PerftLimit(depth) => {
                self.config.perft_limit = depth;
                writeln!(out, "perft = {depth}")?;
            }
        }
        Ok(())
    }

    fn declare<W: Write>(&mut self, result: GameResult, out: &mut W) -> Result<(), ConsoleError> {
        if self.game.is_over() {
            writeln!(out, "error: game is over: {}", self.game.result())?;
            return Ok(());
        }
        self.game.declare_result(result);
        writeln!(out, "{result}")?;
        Ok(())
    }

    /// Print the board if enabled, then either the side to move or the result.
    fn report_position<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        if self.config.show_board {
            self.print_board(out)?;
        }
        if self.game.is_over() {
            writeln!(out, "{}", self.game.result())?;
        } else {
            writeln!(out, "{} to move", self.game.side_to_move().name())?;
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        writeln!(out, "{}", self.game.position().board().pretty())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run_with(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn quiet(script: &str) -> String {
        run(Session::new(), &format!("set board off\n{script}"))
    }

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.autoplay_limit, 500);
        assert!(config.show_board);
        assert_eq!(config.perft_limit, 5);
    }

    #[test]
    fn plays_moves_and_reports_history() {
        let output = quiet("e4\ne5\nNf3\nhistory\n");
        assert!(output.contains("played e4\nblack to move\n"));
        assert!(output.contains("played Nf3\n"));
        assert!(output.contains("1. e4 e5 2. Nf3\n"));
    }

    #[test]
    fn bad_input_keeps_session_alive() {
        let output = quiet("zz9\nNf5\nset colour red\ne4\n");
        assert!(output.contains("error: cannot read \"zz9\" as a move"));
        assert!(output.contains("error: no legal move matches \"Nf5\""));
        assert!(output.contains("error: unknown setting: colour"));
        assert!(output.contains("played e4"));
    }

    #[test]
    fn quit_stops_reading() {
        let output = quiet("quit\ne4\n");
        assert!(!output.contains("played"));
    }

    #[test]
    fn resign_and_draw() {
        let output = quiet("e4\nresign\ndraw\ne5\nhistory\n");
        assert!(output.contains("white wins by resignation\n"));
        assert!(output.contains("error: game is over: white wins by resignation"));
        assert!(output.contains("1. e4 1-0\n"));
    }

    #[test]
    fn autoplay_respects_limit() {
        let output = quiet("set autoplay 6\nauto 10\n");
        assert!(output.contains("autoplay = 6\n"));
        let history = output
            .lines()
            .find(|line| line.starts_with("1. "))
            .unwrap();
        assert_eq!(history.split_whitespace().filter(|t| !t.ends_with('.')).count(), 6);
    }

    #[test]
    fn load_fen_and_perft() {
        let output = quiet("load 4k3/8/8/8/8/8/8/4K2R w K - 0 1\nfen\nperft 1\n");
        assert!(output.contains("4k3/8/8/8/8/8/8/4K2R w K - 0 1\n"));
        assert!(output.contains("0-0: 1\n"));
        assert!(output.contains("total: 15\n"));
    }

    #[test]
    fn perft_depth_zero_and_limit() {
        let output = quiet("perft 0\nperft 6\nset perft 1\nperft 2\n");
        assert!(output.contains("total: 1\n"));
        assert!(!output.contains("total: 20\n"));
        assert!(output.contains("error: perft depth 6 exceeds limit 5\n"));
        assert!(output.contains("perft = 1\n"));
        assert!(output.contains("error: perft depth 2 exceeds limit 1\n"));
    }

    #[test]
    fn load_rejects_stray_en_passant_target() {
        let output = quiet("load 4k3/8/8/8/8/8/3PK3/8 w - e3 0 1\nfen\n");
        assert!(output.contains("invalid en passant square"));
        assert!(output.contains(&format!("{}\n", kibitz_core::STARTING_FEN)));
    }

    #[test]
    fn board_printed_when_enabled() {
        let output = run(Session::new(), "e4\n");
        assert!(output.contains("a b c d e f g h"));
    }

    #[test]
    fn new_resets_game() {
        let mut session = Session::new();
        let mut out = Vec::new();
        session.execute(Command::Move("e4".to_string()), &mut out).unwrap();
        assert_eq!(session.game().history().len(), 1);
        session.execute(Command::New, &mut out).unwrap();
        assert!(session.game().history().is_empty());
        assert_eq!(session.execute(Command::Quit, &mut out).unwrap(), Flow::Quit);
    }
}
