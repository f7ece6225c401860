use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{pos, Bounds, Error, Pattern, Pos, PosSet};

/// Number of patterns placed on a fresh grid.
pub const PLACEMENTS: usize = 6;

/// A seeding policy: turn a pattern collection and grid bounds into an
/// initial live set. The transition algorithm never sees this trait, so
/// policies can be swapped freely.
pub trait Seeder {
    fn seed(&mut self, patterns: &[Pattern], bounds: Bounds) -> Result<PosSet, Error>;
}

/// The default policy: [`PLACEMENTS`] placements at fixed quadrant-aligned
/// anchors, each independently picking one pattern uniformly at random
/// from the whole collection. Anchors keep the seeds spread apart; where
/// placements still overlap, the cells collapse in the set.
#[derive(Debug)]
pub struct QuadrantSeeder {
    rng: SmallRng,
}

impl QuadrantSeeder {
    pub fn new() -> Self {
        Self { rng: SmallRng::from_entropy() }
    }

    /// A fixed rng seed gives a reproducible initial grid.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Default for QuadrantSeeder {
    fn default() -> Self {
        Self::new()
    }
}

impl Seeder for QuadrantSeeder {
    fn seed(&mut self, patterns: &[Pattern], bounds: Bounds) -> Result<PosSet, Error> {
        if patterns.is_empty() {
            return Err(Error::NoPatterns);
        }
        let mut cells = PosSet::default();
        for index in 0..PLACEMENTS {
            let pattern = &patterns[self.rng.gen_range(0..patterns.len())];
            let origin = anchor(index, bounds);
            cells.extend(pattern.cells().iter().map(|&cell| cell + origin));
        }
        Ok(cells)
    }
}

/// Deterministic origin for each placement: quarter/half row crossed with
/// quarter/half/three-quarter column. Callers pick grids large enough for
/// their patterns; the seeder itself does not bounds-check.
fn anchor(index: usize, bounds: Bounds) -> Pos {
    let (rows, cols) = (bounds.rows(), bounds.cols());
    match index {
        0 => pos!(rows / 4, cols / 4),
        1 => pos!(rows / 2, cols / 2),
        2 => pos!(rows / 4, cols / 2),
        3 => pos!(rows / 2, cols / 4),
        4 => pos!(rows / 4, 3 * cols / 4),
        _ => pos!(rows / 2, 3 * cols / 4),
    }
}
