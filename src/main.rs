use anyhow::{Context, Result};
use tracing::info;

use kibitz_console::Session;
use kibitz_core::Position;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("kibitz starting");

    // An optional FEN on the command line sets up the first game.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let session = if args.is_empty() {
        Session::new()
    } else {
        let fen = args.join(" ");
        let position: Position = fen
            .parse()
            .with_context(|| format!("invalid starting FEN: {fen}"))?;
        Session::from_position(position)
    };

    session.run()?;
    info!("kibitz shutting down");
    Ok(())
}
