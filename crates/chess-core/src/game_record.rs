use shakmaty::{
    fen::Fen, san::SanPlus, uci::UciMove, Chess, EnPassantMode, KnownOutcome, Position,
};
use tracing::debug;

use crate::error::ReplayError;

pub const DEFAULT_TAG_VALUE: &str = "?";
pub const DEFAULT_DATE: &str = "????.??.??";
pub const UNKNOWN_RESULT: &str = "*";

/// Seven Tag Roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHeaders {
    pub event: String,
    pub site: String,
    pub date: String, // "YYYY.MM.DD", "?" for unknown parts
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2", "*"
}

impl Default for GameHeaders {
    fn default() -> Self {
        Self {
            event: DEFAULT_TAG_VALUE.to_string(),
            site: DEFAULT_TAG_VALUE.to_string(),
            date: DEFAULT_DATE.to_string(),
            round: DEFAULT_TAG_VALUE.to_string(),
            white: DEFAULT_TAG_VALUE.to_string(),
            black: DEFAULT_TAG_VALUE.to_string(),
            result: UNKNOWN_RESULT.to_string(),
        }
    }
}

impl GameHeaders {
    /// Tags in roster order.
    pub fn tags(&self) -> [(&'static str, &str); 7] {
        [
            ("Event", &self.event),
            ("Site", &self.site),
            ("Date", &self.date),
            ("Round", &self.round),
            ("White", &self.white),
            ("Black", &self.black),
            ("Result", &self.result),
        ]
    }
}

/// One ply of the game line.
#[derive(Debug, Clone)]
pub struct RecordedMove {
    pub uci: UciMove,
    pub san: SanPlus,
}

/// A single linear game line from the standard starting position.
#[derive(Debug, Clone, Default)]
pub struct GameRecord {
    headers: GameHeaders,
    moves: Vec<RecordedMove>,
    position: Chess,
}

impl GameRecord {
    pub fn new(headers: GameHeaders) -> Self {
        Self {
            headers,
            moves: Vec::new(),
            position: Chess::default(),
        }
    }

    /// Append `uci` after the current last move and advance the position.
    ///
    /// shakmaty decides legality; the record is left untouched on error.
    pub fn push(&mut self, uci: UciMove) -> Result<&RecordedMove, ReplayError> {
        let ply = self.moves.len() + 1;
        let mv = uci.to_move(&self.position).map_err(|_| ReplayError::IllegalMove {
            token: uci.to_string(),
            ply,
            fen: self.fen(),
        })?;

        let san = SanPlus::from_move_and_play_unchecked(&mut self.position, mv);
        debug!(ply, uci = %uci, san = %san, "Move appended");

        self.moves.push(RecordedMove { uci, san });
        Ok(&self.moves[ply - 1])
    }

    pub fn headers(&self) -> &GameHeaders {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut GameHeaders {
        &mut self.headers
    }

    pub fn moves(&self) -> &[RecordedMove] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Position after the last appended move.
    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Checkmate, stalemate or insufficient material in the current position.
    pub fn outcome(&self) -> Option<KnownOutcome> {
        self.position.outcome().known()
    }

    /// Set the Result tag from the outcome of a finished game.
    /// Returns whether the tag changed.
    pub fn infer_result(&mut self) -> bool {
        let Some(outcome) = self.outcome() else {
            return false;
        };
        let result = outcome.to_string();
        if self.headers.result == result {
            return false;
        }
        self.headers.result = result;
        true
    }
}
