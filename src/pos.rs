use std::collections::HashSet;
use std::fmt;
use std::ops::Add;

use metrohash::MetroBuildHasher;

/// A grid coordinate; `x` indexes rows, `y` columns.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

/// The one set type used for live cells, delta sets, pattern cells and
/// neighbor results. Membership *is* the alive test, so there is no
/// separate index to keep in sync.
pub type PosSet = HashSet<Pos, MetroBuildHasher>;

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
