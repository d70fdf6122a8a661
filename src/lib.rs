pub mod cell;
pub mod grid;
pub mod regions;
pub mod solver;
pub mod trace;
pub mod undo;

pub use cell::{Cell, Digit};
pub use grid::Grid;
pub use regions::{Pos, RegionIndex};
pub use solver::{Outcome, SearchEngine};
pub use trace::Trace;
