use crate::{Bounds, Error, Pos, PosSet};

/// Cells that changed state in one generation. Anything in neither set
/// kept its previous state. Computed fresh by every [`World::step`] and
/// meant to be consumed immediately (spawn `born`, despawn `died`) or
/// dropped when running headless.
#[derive(Debug)]
pub struct StepDelta {
    pub born: PosSet,
    pub died: PosSet,
}

/// The canonical automaton state: a fixed torus and the set of currently
/// live cells. Dead cells are simply absent, so memory tracks the
/// population rather than the grid area.
#[derive(Debug)]
pub struct World {
    bounds: Bounds,
    alive: PosSet,
}

impl World {
    /// Builds a world from an initial live set, rejecting any coordinate
    /// outside the bounds. Steps only ever produce wrapped coordinates, so
    /// validity checked here holds for every later generation.
    pub fn new(bounds: Bounds, seed: PosSet) -> Result<Self, Error> {
        if let Some(&pos) = seed.iter().find(|pos| !bounds.contains(**pos)) {
            return Err(Error::OutOfBounds { pos, bounds });
        }
        Ok(Self { bounds, alive: seed })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn alive(&self) -> &PosSet {
        &self.alive
    }

    pub fn is_alive(&self, pos: Pos) -> bool {
        self.alive.contains(&pos)
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Advances exactly one generation and reports what changed.
    ///
    /// Scans every live cell once: 2 or 3 live Moore neighbors and it
    /// survives, anything else and it dies. Dead neighbors seen during
    /// the scan become birth candidates, deduplicated across the live
    /// cells that share them; each candidate then recounts its own
    /// neighbors independently and is born on exactly 3. All counts read
    /// the current generation only, never the set under construction, and
    /// the new set replaces the old one wholesale at the end.
    pub fn step(&mut self) -> StepDelta {
        let mut next = PosSet::default();
        let mut born = PosSet::default();
        let mut died = PosSet::default();
        let mut candidates = PosSet::default();

        for &cell in &self.alive {
            let mut living = 0;
            for neighbor in self.bounds.neighbors(cell) {
                if self.alive.contains(&neighbor) {
                    living += 1;
                } else {
                    candidates.insert(neighbor);
                }
            }
            if living == 2 || living == 3 {
                next.insert(cell);
            } else {
                died.insert(cell);
            }
        }

        for &cell in &candidates {
            let living = self
                .bounds
                .neighbors(cell)
                .into_iter()
                .filter(|neighbor| self.alive.contains(neighbor))
                .count();
            if living == 3 {
                born.insert(cell);
                next.insert(cell);
            }
        }

        self.alive = next;
        StepDelta { born, died }
    }
}
