//! Chess plumbing for replaying UCI move lists into PGN.

pub mod error;
pub mod game_record;
pub mod pgn;
pub mod replayer;
pub mod uci;

pub use error::ReplayError;
pub use game_record::{GameHeaders, GameRecord, RecordedMove};
pub use pgn::{render_pgn, PgnWriter};
pub use replayer::MoveReplayer;
