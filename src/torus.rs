use std::fmt;

use itertools::Itertools;

use crate::{pos, Error, Pos, PosSet};

/// Fixed extents of the toroidal grid. Set once, never resized; a reset
/// restarts the simulation rather than changing the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    rows: i32,
    cols: i32,
}

impl Bounds {
    /// Rejects degenerate extents; anything at least 1x1 is a valid torus.
    pub fn new(rows: i32, cols: i32) -> Result<Self, Error> {
        if rows < 1 || cols < 1 {
            return Err(Error::DegenerateBounds { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.rows).contains(&pos.x) && (0..self.cols).contains(&pos.y)
    }

    /// Maps any coordinate onto the torus. The only place wrap-around
    /// lives; both the survive/die count and the birth count go through
    /// here.
    pub fn wrap(&self, pos: Pos) -> Pos {
        pos!(pos.x.rem_euclid(self.rows), pos.y.rem_euclid(self.cols))
    }

    /// The 8 Moore neighbors of `pos`, wrapped. Returned as a set so that
    /// offsets colliding on a degenerate grid (side of 1 or 2) collapse to
    /// distinct cells; above that every call yields exactly 8 members.
    pub fn neighbors(&self, pos: Pos) -> PosSet {
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&offset| offset != (0, 0))
            .map(|(dx, dy)| self.wrap(pos + pos!(dx, dy)))
            .collect()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
