//! uci2pgn
//!
//! Reads whitespace-separated UCI moves, replays them from the starting
//! position and prints the game as PGN.

pub mod config;
pub mod input;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chess_core::{GameRecord, MoveReplayer};
use tracing::info;

use crate::config::Config;
use crate::input::Input;

/// Replay every input, then write the PGN to `out`.
///
/// Progress lines go to `out` as well unless `config.quiet` is set. Nothing
/// of the PGN is written when any input fails.
pub fn run<I, W>(config: &Config, inputs: I, out: &mut W) -> anyhow::Result<GameRecord>
where
    I: IntoIterator<Item = anyhow::Result<Input>>,
    W: Write,
{
    let mut record = if config.quiet {
        replay(config, inputs, io::sink())?
    } else {
        replay(config, inputs, &mut *out)?
    };

    if config.infer_result && record.infer_result() {
        info!(result = %record.headers().result, "Result inferred from final position");
    }

    let pgn = config.pgn_writer().render(&record);
    out.write_all(pgn.as_bytes())?;
    out.flush()?;

    info!(moves = record.len(), "Game written");
    Ok(record)
}

fn replay<I, P>(config: &Config, inputs: I, progress: P) -> anyhow::Result<GameRecord>
where
    I: IntoIterator<Item = anyhow::Result<Input>>,
    P: Write,
{
    let mut replayer = MoveReplayer::with_headers(config.headers(), progress);
    replayer.begin()?;

    for input in inputs {
        let Input { label, reader } = input?;
        replay_reader(&mut replayer, &label, reader)?;
    }

    Ok(replayer.finish()?)
}

fn replay_reader<P: Write>(
    replayer: &mut MoveReplayer<P>,
    label: &str,
    reader: impl BufRead,
) -> anyhow::Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read {label} line {line_no}"))?;
        replayer
            .consume_line(&line)
            .with_context(|| format!("{label} line {line_no}"))?;
    }
    Ok(())
}
