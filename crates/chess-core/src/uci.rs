//! UCI coordinate move tokens (`e2e4`, `e7e8q`).

use std::sync::LazyLock;

use regex::Regex;
use shakmaty::uci::UciMove;

use crate::error::ReplayError;

/// Source square, destination square, optional lowercase promotion piece.
static UCI_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-h][1-8][a-h][1-8][qrbn]?$").unwrap());

/// Strip the whitespace characters a token may carry from line splitting.
pub fn strip_token(raw: &str) -> &str {
    raw.trim_matches(|c| matches!(c, ' ' | '\r' | '\n' | '\t'))
}

/// Check a stripped token against the coordinate grammar.
pub fn is_uci_token(token: &str) -> bool {
    UCI_TOKEN_RE.is_match(token)
}

/// Decode a raw token into a structured move.
///
/// Only the plain coordinate grammar is accepted: null moves (`0000`), drops
/// (`Q@e4`) and upper-case promotion letters are malformed here even though
/// shakmaty itself would parse them.
pub fn parse_token(raw: &str) -> Result<UciMove, ReplayError> {
    let token = strip_token(raw);
    if !is_uci_token(token) {
        return Err(ReplayError::MalformedMoveToken {
            token: token.to_string(),
        });
    }

    token
        .parse::<UciMove>()
        .map_err(|_| ReplayError::MalformedMoveToken {
            token: token.to_string(),
        })
}
