//! Conway's Game of Life on a toroidal grid: a sparse live-cell world,
//! quadrant-anchored pattern seeding and a termion front-end.

pub use error::Error;
mod error;

pub use pos::{Pos, PosSet};
mod pos;

pub use torus::Bounds;
mod torus;

pub use world::{StepDelta, World};
mod world;

pub use pattern::Pattern;
pub mod pattern;

pub use seed::{QuadrantSeeder, Seeder, PLACEMENTS};
mod seed;

pub use driver::{CellRenderer, DriverCmd, NullRenderer, TickDriver};
mod driver;

pub use view::TermView;
pub mod view;
