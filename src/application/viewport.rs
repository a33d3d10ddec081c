/// Viewport maps between screen pixels and grid cells for a fixed cell size.
/// Columns run along x, rows along y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
}

impl Viewport {
    /// Margin between the window edge and the grid
    pub const MARGIN: f32 = 16.0;

    pub fn new(cell_size: f32) -> Self {
        Self {
            origin_x: Self::MARGIN,
            origin_y: Self::MARGIN,
            cell_size,
        }
    }

    /// Convert screen coordinates to a (row, col) position.
    /// The result may lie outside the grid; the grid decides.
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> (isize, isize) {
        let col = ((screen_x - self.origin_x) / self.cell_size).floor() as isize;
        let row = ((screen_y - self.origin_y) / self.cell_size).floor() as isize;
        (row, col)
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        let screen_x = col as f32 * self.cell_size + self.origin_x;
        let screen_y = row as f32 * self.cell_size + self.origin_y;
        (screen_x, screen_y)
    }

    /// Pixel size (width, height) of a grid of the given dimensions
    pub fn grid_extent(&self, rows: usize, cols: usize) -> (f32, f32) {
        (cols as f32 * self.cell_size, rows as f32 * self.cell_size)
    }

    /// Whether a screen point falls on the grid area
    pub fn contains(&self, rows: usize, cols: usize, screen_x: f32, screen_y: f32) -> bool {
        let (width, height) = self.grid_extent(rows, cols);
        screen_x >= self.origin_x
            && screen_x < self.origin_x + width
            && screen_y >= self.origin_y
            && screen_y < self.origin_y + height
    }
}
