//! Replays UCI move tokens onto a single game line.

use std::io::Write;

use tracing::debug;

use crate::error::ReplayError;
use crate::game_record::{GameHeaders, GameRecord};
use crate::pgn::PgnWriter;
use crate::uci;

pub const READING_BANNER: &str = "reading UCI moves from stdin...";
pub const READING_DONE_BANNER: &str = "reading UCI moves from stdin...done";

/// Owns the game record and writes progress lines to `progress`.
///
/// Moves are applied strictly in the order they are handed in. The first
/// malformed or illegal token stops the replay; progress lines already
/// written stay written.
pub struct MoveReplayer<W> {
    record: GameRecord,
    progress: W,
    /// Opening banner written.
    started: bool,
}

impl<W: Write> MoveReplayer<W> {
    /// Fresh record at the starting position with default headers.
    pub fn initialize(progress: W) -> Self {
        Self::with_headers(GameHeaders::default(), progress)
    }

    pub fn with_headers(headers: GameHeaders, progress: W) -> Self {
        Self {
            record: GameRecord::new(headers),
            progress,
            started: false,
        }
    }

    /// Write the opening banner. Called before any input is read; later
    /// calls are no-ops.
    pub fn begin(&mut self) -> Result<(), ReplayError> {
        if !self.started {
            writeln!(self.progress, "{READING_BANNER}")?;
            self.started = true;
        }
        Ok(())
    }

    /// Apply every whitespace-separated token of `raw_line`, left to right.
    /// Returns the number of moves applied.
    pub fn consume_line(&mut self, raw_line: &str) -> Result<usize, ReplayError> {
        self.begin()?;
        debug!(line = raw_line.trim_end(), "Reading line");

        let mut applied = 0;
        for token in raw_line.split_whitespace() {
            self.apply_move(token)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Decode `token` against the current position and append it.
    pub fn apply_move(&mut self, token: &str) -> Result<(), ReplayError> {
        self.begin()?;
        let token = uci::strip_token(token);
        writeln!(self.progress, "adding {token}")?;

        let uci = uci::parse_token(token)?;
        self.record.push(uci)?;
        Ok(())
    }

    /// Write the closing progress line and hand back the finished record.
    pub fn finish(mut self) -> Result<GameRecord, ReplayError> {
        self.begin()?;
        writeln!(self.progress, "{READING_DONE_BANNER}")?;
        self.progress.flush()?;
        Ok(self.record)
    }

    /// Finish intake and render the record as PGN.
    pub fn finalize(self, writer: &PgnWriter) -> Result<String, ReplayError> {
        let record = self.finish()?;
        Ok(writer.render(&record))
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }
}
