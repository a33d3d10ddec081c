use super::{Algorithm, CellState, GridError};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Grid holds one generation of the aging cellular automaton.
/// Every operation returns a new grid; a grid is never mutated once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

/// Reject grids with no rows or no columns, or too many cells to index
pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
        return Err(GridError::InvalidDimension { rows, cols });
    }
    Ok(())
}

/// Reject probabilities outside `[0, 1]`, NaN included
pub(crate) fn validate_probability(live_probability: f64) -> Result<(), GridError> {
    if !(0.0..=1.0).contains(&live_probability) {
        return Err(GridError::InvalidProbability(live_probability));
    }
    Ok(())
}

/// Offsets of the 8 Moore neighbors as (row, col)
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Grid {
    /// Create a new grid with all cells dead
    pub fn empty(rows: usize, cols: usize) -> Result<Self, GridError> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::DEAD; rows * cols],
        })
    }

    /// Randomly seeded grid using the thread-local RNG
    pub fn random(rows: usize, cols: usize, live_probability: f64) -> Result<Self, GridError> {
        Self::random_with_rng(rows, cols, live_probability, &mut rand::rng())
    }

    /// Reproducible randomly seeded grid
    pub fn random_seeded(
        rows: usize,
        cols: usize,
        live_probability: f64,
        seed: u64,
    ) -> Result<Self, GridError> {
        Self::random_with_rng(rows, cols, live_probability, &mut StdRng::seed_from_u64(seed))
    }

    /// Randomly seeded grid: each cell is independently `BORN` with
    /// probability `live_probability`, otherwise dead.
    pub fn random_with_rng<R: Rng>(
        rows: usize,
        cols: usize,
        live_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        validate_dimensions(rows, cols)?;
        validate_probability(live_probability)?;

        let cells = (0..rows * cols)
            .map(|_| {
                if rng.random_bool(live_probability) {
                    CellState::BORN
                } else {
                    CellState::DEAD
                }
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from explicit rows of raw states
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        validate_dimensions(row_count, cols)?;

        let mut cells = Vec::with_capacity(row_count * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::InvalidDimension {
                    rows: row_count,
                    cols: row.len(),
                });
            }
            for &value in row {
                cells.push(CellState::new(value)?);
            }
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// All-dead grid with the same dimensions
    pub fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![CellState::DEAD; self.cells.len()],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Resolve a signed position to an in-bounds (row, col)
    fn locate(&self, row: isize, col: isize) -> Result<(usize, usize), GridError> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < self.rows && c < self.cols => Ok((r, c)),
            _ => Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.get_index(row, col)])
    }

    /// Copy of this grid with the cell at (row, col) flipped
    pub fn toggle(&self, row: isize, col: isize) -> Result<Self, GridError> {
        let (r, c) = self.locate(row, col)?;
        let mut next = self.clone();
        let idx = self.get_index(r, c);
        next.cells[idx] = self.cells[idx].toggle();
        Ok(next)
    }

    /// Number of live Moore neighbors of an in-bounds position
    pub fn count_live_neighbors(&self, row: isize, col: isize) -> Result<u8, GridError> {
        let (r, c) = self.locate(row, col)?;
        Ok(self.live_neighbors(r, c))
    }

    /// Count live neighbors; off-grid positions count as dead (no wrapping)
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_state(&self, row: usize, col: usize) -> CellState {
        let current = self.cells[self.get_index(row, col)];
        current.evolve(self.live_neighbors(row, col))
    }

    /// Pure functional evolution - returns the next generation (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_state(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Produces exactly the same grid as `step`.
    pub fn step_parallel(&self) -> Self {
        let mut cells = vec![CellState::DEAD; self.cells.len()];
        cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    *cell = self.next_state(row, col);
                }
            });

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Advance one generation with the selected algorithm
    pub fn evolve(&self, algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Serial => self.step(),
            Algorithm::Parallel => self.step_parallel(),
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Positions of all live cells in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        Grid::from_rows(&[
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_rejects_zero_dimensions() {
        assert_eq!(
            Grid::empty(0, 5),
            Err(GridError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert!(matches!(Grid::empty(5, 0), Err(GridError::InvalidDimension { .. })));
    }

    #[test]
    fn test_rejects_cell_count_overflow() {
        let rows = 1usize << 63;
        assert_eq!(
            Grid::empty(rows, 2),
            Err(GridError::InvalidDimension { rows, cols: 2 })
        );
        assert!(matches!(
            Grid::random_seeded(2, usize::MAX, 0.5, 1),
            Err(GridError::InvalidDimension { .. })
        ));
        assert!(validate_dimensions(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_empty_is_all_dead() {
        let grid = Grid::empty(60, 80).unwrap();
        assert_eq!(grid.dimensions(), (60, 80));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_cleared_keeps_dimensions() {
        let grid = Grid::random_seeded(7, 9, 0.5, 3).unwrap().cleared();
        assert_eq!(grid, Grid::empty(7, 9).unwrap());
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_bad_states() {
        let ragged: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
        assert!(matches!(Grid::from_rows(&ragged), Err(GridError::InvalidDimension { .. })));
        assert_eq!(Grid::from_rows(&[[0, 13]]), Err(GridError::InvalidCellState(13)));
        let none: [[u8; 0]; 0] = [];
        assert!(Grid::from_rows(&none).is_err());
    }

    #[test]
    fn test_random_probability_bounds() {
        let dead = Grid::random_seeded(10, 10, 0.0, 7).unwrap();
        assert_eq!(dead.population(), 0);

        let alive = Grid::random_seeded(10, 10, 1.0, 7).unwrap();
        assert!(alive.iter_cells().all(|(_, _, cell)| cell == CellState::BORN));
    }

    #[test]
    fn test_random_rejects_invalid_probability() {
        assert_eq!(
            Grid::random(10, 10, 1.5),
            Err(GridError::InvalidProbability(1.5))
        );
        assert!(matches!(
            Grid::random(10, 10, -0.1),
            Err(GridError::InvalidProbability(_))
        ));
        assert!(Grid::random(10, 10, f64::NAN).is_err());
    }

    #[test]
    fn test_random_seeded_is_reproducible() {
        let a = Grid::random_seeded(20, 30, 0.15, 42).unwrap();
        let b = Grid::random_seeded(20, 30, 0.15, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_toggle_flips_and_leaves_input() {
        let grid = Grid::empty(3, 3).unwrap();
        let toggled = grid.toggle(1, 2).unwrap();
        assert_eq!(toggled.get(1, 2), Some(CellState::BORN));
        assert_eq!(grid.get(1, 2), Some(CellState::DEAD));
        assert_eq!(toggled.toggle(1, 2).unwrap(), grid);
    }

    #[test]
    fn test_toggle_kills_any_age() {
        let grid = Grid::from_rows(&[[9]]).unwrap();
        assert_eq!(grid.toggle(0, 0).unwrap().get(0, 0), Some(CellState::DEAD));
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let grid = Grid::empty(4, 6).unwrap();
        assert!(matches!(grid.toggle(-1, 0), Err(GridError::OutOfBounds { row: -1, .. })));
        assert!(matches!(grid.toggle(4, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.toggle(0, 6), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        let grid = Grid::from_rows(&[
            [1, 0, 0, 1],
            [0, 0, 0, 0],
            [1, 0, 0, 1],
        ])
        .unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), Ok(0));
        assert_eq!(grid.count_live_neighbors(2, 3), Ok(0));
    }

    #[test]
    fn test_neighbors_count_all_eight() {
        let grid = Grid::from_rows(&[
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ])
        .unwrap();
        assert_eq!(grid.count_live_neighbors(1, 1), Ok(8));
        assert_eq!(grid.count_live_neighbors(0, 0), Ok(3));
        assert!(grid.count_live_neighbors(3, 0).is_err());
    }

    #[test]
    fn test_blinker_oscillates_with_ages() {
        let next = blinker().step();
        assert_eq!(next.live_cells(), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next.get(1, 2), Some(CellState::BORN));
        assert_eq!(next.get(2, 2).map(CellState::get), Some(2));
        assert_eq!(next.get(3, 2), Some(CellState::BORN));
    }

    #[test]
    fn test_step_is_pure() {
        let grid = blinker();
        let snapshot = grid.clone();
        let _ = grid.step();
        let _ = grid.step_parallel();
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_block_ages_in_place() {
        let grid = Grid::from_rows(&[
            [0, 0, 0, 0],
            [0, 12, 1, 0],
            [0, 1, 1, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        let next = grid.step();
        assert_eq!(next.get(1, 1).map(CellState::get), Some(1));
        assert_eq!(next.get(1, 2).map(CellState::get), Some(2));
        assert_eq!(next.population(), 4);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::random_seeded(37, 53, 0.3, 1234).unwrap();
        for _ in 0..20 {
            let serial = grid.step();
            assert_eq!(grid.step_parallel(), serial);
            grid = serial;
        }
    }

    #[test]
    fn test_evolve_dispatches() {
        let grid = blinker();
        assert_eq!(grid.evolve(Algorithm::Serial), grid.step());
        assert_eq!(grid.evolve(Algorithm::Parallel), grid.step());
    }
}
