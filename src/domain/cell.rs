use super::GridError;

/// CellState is the fundamental unit of the aging Game of Life.
/// `0` is dead, `1..=12` is alive and doubles as the cell's age bucket.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CellState(u8);

impl CellState {
    pub const DEAD: Self = Self(0);
    /// State of a freshly born (or freshly toggled) cell
    pub const BORN: Self = Self(1);
    /// Oldest age bucket before wrapping back to `BORN`
    pub const MAX_AGE: u8 = 12;

    /// Validate a raw state value
    pub const fn new(value: u8) -> Result<Self, GridError> {
        if value > Self::MAX_AGE {
            Err(GridError::InvalidCellState(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Raw state value in `0..=12`
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.0 > 0
    }

    /// Flip the cell: dead becomes `BORN`, any age becomes dead
    pub const fn toggle(self) -> Self {
        if self.is_alive() { Self::DEAD } else { Self::BORN }
    }

    /// Advance the age bucket by one, wrapping 12 back to 1.
    /// Dead cells stay dead.
    pub const fn aged(self) -> Self {
        if self.is_alive() {
            Self(self.0 % Self::MAX_AGE + 1)
        } else {
            Self::DEAD
        }
    }

    /// Pure function to compute the next state from the live neighbor count:
    /// 1. Fewer than 2 or more than 3 neighbors kills (or keeps dead)
    /// 2. A live cell with 2-3 neighbors survives and ages
    /// 3. A dead cell with exactly 3 neighbors is born
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self.is_alive(), neighbors) {
            (_, 0 | 1) => Self::DEAD,
            (_, n) if n > 3 => Self::DEAD,
            (true, _) => self.aged(),
            (false, 3) => Self::BORN,
            _ => Self::DEAD,
        }
    }
}
