mod algorithm;
mod cell;
mod error;
mod grid;

pub use algorithm::Algorithm;
pub use cell::CellState;
pub use error::GridError;
pub use grid::Grid;
pub(crate) use grid::{validate_dimensions, validate_probability};

/// Default grid height in cells
pub const DEFAULT_ROWS: usize = 60;
/// Default grid width in cells
pub const DEFAULT_COLS: usize = 80;
/// Default density of a randomly seeded grid
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.15;
