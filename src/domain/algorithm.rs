//! Algorithm enum for selecting how a generation is computed.
//!
//! Both strategies produce identical grids; they only differ in how the
//! per-cell work is scheduled.

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell over the whole grid on the calling thread
    #[default]
    Serial,
    /// Rows computed concurrently on the rayon pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for the control panel
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description shown under the step timing
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "One cell at a time, single thread",
            Algorithm::Parallel => "One rayon task per row",
        }
    }
}
