use std::time::Instant;

use log::{debug, error, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use crate::config::Config;
use crate::domain::{Algorithm, Grid, GridError, validate_probability};

/// GameState drives the simulation around the pure grid engine.
/// It owns everything the engine does not: the run flag, the step cadence,
/// the generation counter and the random source.
pub struct GameState {
    pub grid: Grid,
    pub algorithm: Algorithm,
    pub is_running: bool,
    /// Generation shown to the user; starts at 1
    pub generation: u64,
    pub update_timer: f32,
    /// Seconds between generations while running
    pub step_interval: f32,
    pub live_probability: f64,
    pub last_evolution_time_ms: f32,
    rng: StdRng,
}

impl GameState {
    /// Create a stopped game state with an empty grid
    pub fn new(config: &Config) -> Result<Self, GridError> {
        validate_probability(config.live_probability)?;
        let grid = Grid::empty(config.rows, config.cols)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Ok(Self {
            grid,
            algorithm: if config.parallel {
                Algorithm::Parallel
            } else {
                Algorithm::Serial
            },
            is_running: false,
            generation: 1,
            update_timer: 0.0,
            step_interval: config.step_interval().as_secs_f32(),
            live_probability: config.live_probability,
            last_evolution_time_ms: 0.0,
            rng,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.update_timer = 0.0;
        if self.is_running {
            info!("started at generation {}", self.generation);
        } else {
            info!("stopped at generation {}", self.generation);
        }
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.cleared();
        self.generation = 1;
        self.is_running = false;
        info!("grid cleared");
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        let (rows, cols) = self.grid.dimensions();
        match Grid::random_with_rng(rows, cols, self.live_probability, &mut self.rng) {
            Ok(grid) => {
                self.grid = grid;
                self.generation = 1;
                self.is_running = false;
                info!("grid randomized, {} live cells", self.grid.population());
            }
            Err(e) => error!("cannot randomize grid: {e}"),
        }
        self
    }

    /// Flip one cell. Clicks are ignored while the simulation runs.
    pub fn toggle_cell(mut self, row: isize, col: isize) -> Self {
        if self.is_running {
            debug!("ignoring toggle at ({row}, {col}) while running");
            return self;
        }
        match self.grid.toggle(row, col) {
            Ok(grid) => self.grid = grid,
            Err(e) => warn!("rejected toggle: {e}"),
        }
        self
    }

    /// Set the evolution algorithm
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Switch to the next evolution algorithm
    pub fn cycle_algorithm(mut self) -> Self {
        let all = Algorithm::all();
        let next = all
            .iter()
            .position(|&a| a == self.algorithm)
            .map_or(0, |idx| (idx + 1) % all.len());
        self.set_algorithm(all[next]);
        info!("switched to {} algorithm", self.algorithm.name());
        self
    }

    /// Advance exactly one generation, running or not
    pub fn step_once(mut self) -> Self {
        let start = Instant::now();
        self.grid = self.grid.evolve(self.algorithm);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        debug!(
            "generation {}: {} live cells in {:.2}ms",
            self.generation,
            self.grid.population(),
            self.last_evolution_time_ms
        );
        self
    }

    /// Update simulation by one frame.
    /// Steps at most once per call, after a full interval has elapsed.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.step_interval {
            self = self.step_once();
            self.update_timer = 0.0;
        }

        self
    }
}
