use thiserror::Error;

/// Errors raised by the grid engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("position ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },
    #[error("live probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    #[error("cell state {0} is outside 0..=12")]
    InvalidCellState(u8),
}
