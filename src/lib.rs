// Domain layer - the pure grid engine
pub mod domain;

// Application layer - simulation driver
pub mod application;
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, CellState, Grid, GridError};
pub use application::{GameState, Viewport};
pub use config::{Config, ConfigError};
pub use rendering::Palette;
