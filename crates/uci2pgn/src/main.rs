//! uci2pgn
//!
//! Usage: uci2pgn [OPTIONS] [FILE]...
//!
//!   echo "e2e4 e7e5 g1f3" | uci2pgn

use std::io;

use tracing_subscriber::EnvFilter;

use uci2pgn::config::Config;
use uci2pgn::input::open_inputs;

fn main() -> anyhow::Result<()> {
    let config = Config::load();

    // Logs go to stderr; stdout carries progress lines and the PGN
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let record = uci2pgn::run(&config, open_inputs(&config.files), &mut out)?;
    tracing::debug!(moves = record.len(), "Done");

    Ok(())
}
