use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::domain::{
    DEFAULT_COLS, DEFAULT_LIVE_PROBABILITY, DEFAULT_ROWS, GridError, validate_dimensions,
    validate_probability,
};
use crate::rendering::Palette;

/// Command-line configuration for the simulation window
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "aging_life", version, about = "Conway's Game of Life with aging cells")]
pub struct Config {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 100)]
    pub interval_ms: u64,

    /// Chance of a cell being alive when the grid is randomized
    #[arg(long, default_value_t = DEFAULT_LIVE_PROBABILITY)]
    pub live_probability: f64,

    /// Seed for reproducible random grids
    #[arg(long)]
    pub seed: Option<u64>,

    /// Compute generations on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Age colour table
    #[arg(long, value_enum, default_value_t = Palette::Full)]
    pub palette: Palette,

    /// Cell size in pixels
    #[arg(long, default_value_t = 12.0)]
    pub cell_size: f32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("step interval must be at least 1ms")]
    ZeroInterval,
    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(f32),
}

impl Config {
    /// Reject values the window or the grid engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.rows, self.cols)?;
        validate_probability(self.live_probability)?;
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["aging_life"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let config = Config::default();
        assert_eq!((config.rows, config.cols), (60, 80));
        assert_eq!(config.step_interval(), Duration::from_millis(100));
        assert_eq!(config.live_probability, 0.15);
        assert_eq!(config.palette, Palette::Full);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parses_flags() {
        let config = Config::parse_from([
            "aging_life",
            "--rows",
            "10",
            "--cols",
            "20",
            "--seed",
            "99",
            "--parallel",
            "--palette",
            "reference",
        ]);
        assert_eq!((config.rows, config.cols), (10, 20));
        assert_eq!(config.seed, Some(99));
        assert!(config.parallel);
        assert_eq!(config.palette, Palette::Reference);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            rows: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Grid(GridError::InvalidDimension { .. }))
        ));

        let config = Config {
            rows: usize::MAX,
            cols: 2,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Grid(GridError::InvalidDimension { .. }))
        ));

        let config = Config {
            live_probability: 2.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Grid(GridError::InvalidProbability(2.0)))
        );

        let config = Config {
            interval_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));

        let config = Config {
            cell_size: 0.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCellSize(_))));
    }
}
