//! Command-line and environment configuration

use std::num::NonZeroUsize;
use std::path::PathBuf;

use chess_core::game_record::{GameHeaders, DEFAULT_DATE, DEFAULT_TAG_VALUE, UNKNOWN_RESULT};
use chess_core::PgnWriter;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use shakmaty::Outcome;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "uci2pgn",
    version,
    about = "Replay UCI moves from stdin or files and print the game as PGN."
)]
pub struct Config {
    /// Input files, read in order. `-` reads standard input.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Event tag
    #[arg(long, env = "UCI2PGN_EVENT", default_value = DEFAULT_TAG_VALUE)]
    pub event: String,

    /// Site tag
    #[arg(long, env = "UCI2PGN_SITE", default_value = DEFAULT_TAG_VALUE)]
    pub site: String,

    /// Date tag, "YYYY.MM.DD"
    #[arg(long, env = "UCI2PGN_DATE", default_value = DEFAULT_DATE)]
    pub date: String,

    /// Round tag
    #[arg(long, env = "UCI2PGN_ROUND", default_value = DEFAULT_TAG_VALUE)]
    pub round: String,

    /// White player tag
    #[arg(long, env = "UCI2PGN_WHITE", default_value = DEFAULT_TAG_VALUE)]
    pub white: String,

    /// Black player tag
    #[arg(long, env = "UCI2PGN_BLACK", default_value = DEFAULT_TAG_VALUE)]
    pub black: String,

    /// Result tag and movetext terminator
    #[arg(long, env = "UCI2PGN_RESULT", default_value = UNKNOWN_RESULT, value_parser = parse_result)]
    pub result: String,

    /// Set the result from the final position when the game is over
    #[arg(
        long,
        env = "UCI2PGN_INFER_RESULT",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub infer_result: bool,

    /// Wrap movetext lines at this width
    #[arg(long, env = "UCI2PGN_COLUMNS")]
    pub columns: Option<NonZeroUsize>,

    /// Do not print progress lines
    #[arg(
        short,
        long,
        env = "UCI2PGN_QUIET",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub quiet: bool,
}

impl Config {
    /// Load `.env` if present, then parse the process arguments.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn headers(&self) -> GameHeaders {
        GameHeaders {
            event: self.event.clone(),
            site: self.site.clone(),
            date: self.date.clone(),
            round: self.round.clone(),
            white: self.white.clone(),
            black: self.black.clone(),
            result: self.result.clone(),
        }
    }

    pub fn pgn_writer(&self) -> PgnWriter {
        PgnWriter::with_columns(self.columns.map(NonZeroUsize::get))
    }
}

/// Accepts the PGN result tokens `1-0`, `0-1`, `1/2-1/2` and `*`.
fn parse_result(value: &str) -> Result<String, String> {
    value
        .parse::<Outcome>()
        .map(|_| value.to_string())
        .map_err(|_| "expected one of 1-0, 0-1, 1/2-1/2, *".to_string())
}
