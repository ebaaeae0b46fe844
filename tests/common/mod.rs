#![allow(dead_code)]

use std::io::Cursor;
use std::ops::ControlFlow;

use chess_core::GameRecord;
use clap::Parser;
use pgn_reader::{RawTag, Reader, SanPlus, Visitor};
use shakmaty::{CastlingMode, Chess, Position};
use uci2pgn::config::Config;
use uci2pgn::input::Input;

/// Opera Game, Morphy vs. Duke Karl / Count Isouard, Paris 1858.
pub const OPERA_GAME: &str = "e2e4 e7e5 g1f3 d7d6 d2d4 c8g4 d4e5 g4f3 d1f3 d6e5
f1c4 g8f6 f3b3 d8e7 b1c3 c7c6 c1g5 b7b5 c3b5 c6b5
c4b5 b8d7 e1c1 a8d8 d1d7 d8d7 h1d1 e7e6 b5d7 f6d7
b3b8 d7b8 d1d8
";

pub fn config(args: &[&str]) -> Config {
    Config::try_parse_from(std::iter::once("uci2pgn").chain(args.iter().copied())).unwrap()
}

/// Run the whole pipeline over `text`, returning everything written to stdout.
pub fn run_text(args: &[&str], text: &str) -> (anyhow::Result<GameRecord>, String) {
    let mut out = Vec::new();
    let inputs = vec![Ok(Input::from_reader(
        "stdin",
        Cursor::new(text.to_string()),
    ))];
    let result = uci2pgn::run(&config(args), inputs, &mut out);
    (result, String::from_utf8(out).unwrap())
}

/// Game as seen by an independent PGN reader.
#[derive(Debug, Default)]
pub struct ParsedGame {
    pub tags: Vec<(String, String)>,
    pub sans: Vec<String>,
}

impl ParsedGame {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replay the SAN moves and convert them back to UCI.
    pub fn uci_moves(&self) -> Vec<String> {
        let mut pos = Chess::default();
        let mut ucis = Vec::new();
        for san in &self.sans {
            let san: shakmaty::san::San = san.parse().unwrap();
            let mv = san.to_move(&pos).unwrap();
            ucis.push(mv.to_uci(CastlingMode::Standard).to_string());
            pos.play_unchecked(mv);
        }
        ucis
    }
}

struct GameCollector;

impl Visitor for GameCollector {
    type Tags = Vec<(String, String)>;
    type Movetext = ParsedGame;
    type Output = ParsedGame;

    fn begin_tags(&mut self) -> ControlFlow<ParsedGame, Self::Tags> {
        ControlFlow::Continue(Vec::new())
    }

    fn tag(
        &mut self,
        tags: &mut Self::Tags,
        name: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<ParsedGame> {
        tags.push((
            String::from_utf8_lossy(name).into_owned(),
            value.decode_utf8_lossy().into_owned(),
        ));
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, tags: Self::Tags) -> ControlFlow<ParsedGame, ParsedGame> {
        ControlFlow::Continue(ParsedGame {
            tags,
            sans: Vec::new(),
        })
    }

    fn san(&mut self, game: &mut ParsedGame, san_plus: SanPlus) -> ControlFlow<ParsedGame> {
        game.sans.push(san_plus.san.to_string());
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, game: ParsedGame) -> ParsedGame {
        game
    }
}

/// Parse the PGN part of the program output (everything from the first tag).
pub fn parse_pgn(output: &str) -> ParsedGame {
    let start = output.find("[Event").expect("output has no PGN");
    let mut reader = Reader::new(output[start..].as_bytes());
    reader
        .read_game(&mut GameCollector)
        .unwrap()
        .expect("no game in PGN")
}
