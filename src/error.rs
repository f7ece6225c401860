use std::io;

use thiserror::Error;

use crate::{Bounds, Pos};

/// Everything the library rejects at a call boundary.
///
/// The simulation itself cannot fail once a [`crate::World`] exists; these
/// are the precondition violations callers must not let through, plus the
/// pattern loader's I/O failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("grid bounds must be at least 1x1, got {rows}x{cols}")]
    DegenerateBounds { rows: i32, cols: i32 },

    #[error("cell {pos} lies outside the {bounds} grid")]
    OutOfBounds { pos: Pos, bounds: Bounds },

    #[error("no patterns available to seed from")]
    NoPatterns,

    #[error("pattern {0:?} has no live cells")]
    BlankPattern(String),

    #[error("failed to read pattern file: {0}")]
    Io(#[from] io::Error),
}
