//! Replay error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Malformed UCI move token: {token:?}")]
    MalformedMoveToken { token: String },

    /// `ply` is the 1-based half-move the token was meant to become.
    #[error("Illegal move {token} at ply {ply} in position {fen}")]
    IllegalMove { token: String, ply: usize, fen: String },

    #[error("Progress output error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReplayError {
    /// The offending token, if the error was caused by one.
    pub fn token(&self) -> Option<&str> {
        match self {
            ReplayError::MalformedMoveToken { token } | ReplayError::IllegalMove { token, .. } => {
                Some(token)
            }
            ReplayError::Io(_) => None,
        }
    }
}
