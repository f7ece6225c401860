use std::fs;
use std::path::{Path, PathBuf};

use crate::{pos, Error, PosSet};

/// A reusable arrangement of live cells in its own coordinate frame,
/// ready to be translated onto a grid. Immutable once built; the bounding
/// box is implicit in the largest coordinates present.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: String,
    cells: PosSet,
}

impl Pattern {
    /// Reads the plain text form: one row per line, `x` marks a live
    /// cell, every other character is dead. A pattern without a single
    /// live cell is useless for seeding and gets rejected.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, Error> {
        let name = name.into();
        let mut cells = PosSet::default();
        for (row, line) in text.lines().enumerate() {
            for (col, char) in line.chars().enumerate() {
                if char == 'x' {
                    cells.insert(pos!(row as i32, col as i32));
                }
            }
        }
        if cells.is_empty() {
            return Err(Error::BlankPattern(name));
        }
        Ok(Self { name, cells })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &PosSet {
        &self.cells
    }

    /// Bounding box as (rows, cols).
    pub fn extent(&self) -> (i32, i32) {
        let rows = self.cells.iter().map(|pos| pos.x).max().unwrap_or(-1) + 1;
        let cols = self.cells.iter().map(|pos| pos.y).max().unwrap_or(-1) + 1;
        (rows, cols)
    }
}

const BLOCK: &str = "xx\nxx";
const BLINKER: &str = "xxx";
const GLIDER: &str = ".x.\n..x\nxxx";
const TOAD: &str = ".xxx\nxxx.";
const BEACON: &str = "xx..\nxx..\n..xx\n..xx";
const R_PENTOMINO: &str = ".xx\nxx.\n.x.";
const LWSS: &str = "x..x.\n....x\nx...x\n.xxxx";
const PULSAR: &str = "..xxx...xxx..\n\
                     .............\n\
                     x....x.x....x\n\
                     x....x.x....x\n\
                     x....x.x....x\n\
                     ..xxx...xxx..\n\
                     .............\n\
                     ..xxx...xxx..\n\
                     x....x.x....x\n\
                     x....x.x....x\n\
                     x....x.x....x\n\
                     .............\n\
                     ..xxx...xxx..";

/// The embedded catalog of classic patterns, used whenever no pattern
/// directory is supplied.
pub fn builtin() -> Vec<Pattern> {
    [
        ("block", BLOCK),
        ("blinker", BLINKER),
        ("glider", GLIDER),
        ("toad", TOAD),
        ("beacon", BEACON),
        ("r-pentomino", R_PENTOMINO),
        ("lwss", LWSS),
        ("pulsar", PULSAR),
    ]
    .into_iter()
    .map(|(name, text)| Pattern::parse(name, text).unwrap())
    .collect()
}

/// Loads every `*.txt` file of `dir` as one pattern named after the file
/// stem, in path order so a directory always yields the same list. All
/// pattern file I/O lives here; the simulation core never touches the
/// filesystem.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Pattern>, Error> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<_, _>>()?;
    paths.retain(|path| path.extension().is_some_and(|ext| ext == "txt"));
    paths.sort();

    paths
        .iter()
        .map(|path| {
            let name = path.file_stem().unwrap_or_default().to_string_lossy();
            let text = fs::read_to_string(path)?;
            Pattern::parse(name, &text)
        })
        .collect()
}
