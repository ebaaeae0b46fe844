//! Line-oriented input: named files in order, `-` or nothing for stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;

const STDIN_PATH: &str = "-";

/// One opened input stream plus the label used in error messages.
pub struct Input {
    pub label: String,
    pub reader: Box<dyn BufRead>,
}

impl Input {
    pub fn stdin() -> Self {
        Self::from_reader("<stdin>", io::stdin().lock())
    }

    pub fn from_reader(label: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Self {
            label: label.into(),
            reader: Box::new(reader),
        }
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            return Ok(Self::stdin());
        }
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        Ok(Self::from_reader(path.display().to_string(), BufReader::new(file)))
    }
}

/// Inputs named on the command line, opened lazily so a missing file only
/// fails once the files before it have been replayed.
pub fn open_inputs(files: &[PathBuf]) -> Box<dyn Iterator<Item = anyhow::Result<Input>> + '_> {
    if files.is_empty() {
        Box::new(std::iter::once(Ok(Input::stdin())))
    } else {
        Box::new(files.iter().map(|path| Input::open(path)))
    }
}
