//! PGN rendering of a linear game record.

use crate::game_record::GameRecord;

/// Renders a [`GameRecord`] as PGN text: tag pairs, a blank line, then the
/// movetext terminated by the Result tag value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgnWriter {
    /// Maximum movetext line width; `None` keeps the movetext on one line.
    columns: Option<usize>,
}

impl PgnWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: Option<usize>) -> Self {
        Self { columns }
    }

    pub fn render(&self, record: &GameRecord) -> String {
        let mut out = String::new();

        for (name, value) in record.headers().tags() {
            out.push_str(&format!("[{} \"{}\"]\n", name, escape_tag_value(value)));
        }
        out.push('\n');

        let mut line = String::new();
        for token in movetext_tokens(record) {
            if let Some(columns) = self.columns {
                if !line.is_empty() && line.len() + 1 + token.len() > columns {
                    out.push_str(&line);
                    out.push('\n');
                    line.clear();
                }
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&token);
        }
        out.push_str(&line);
        out.push('\n');

        out
    }
}

/// Render with the default writer (no movetext wrapping).
pub fn render_pgn(record: &GameRecord) -> String {
    PgnWriter::new().render(record)
}

/// Move numbers, SAN moves and the trailing result token, in output order.
fn movetext_tokens(record: &GameRecord) -> Vec<String> {
    let mut tokens = Vec::with_capacity(record.len() * 3 / 2 + 1);
    for (i, mv) in record.moves().iter().enumerate() {
        if i % 2 == 0 {
            tokens.push(format!("{}.", i / 2 + 1));
        }
        tokens.push(mv.san.to_string());
    }
    tokens.push(record.headers().result.clone());
    tokens
}

fn escape_tag_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == '"' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
