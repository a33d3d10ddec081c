mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::screen_width;

use crate::application::Viewport;

pub const PANEL_WIDTH: f32 = 280.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
/// Minimum window height so the rules text fits beside small grids
pub const MIN_WINDOW_HEIGHT: f32 = 620.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Window size (width, height) that fits the grid plus the control panel
pub fn window_size(viewport: &Viewport, rows: usize, cols: usize) -> (f32, f32) {
    let (grid_width, grid_height) = viewport.grid_extent(rows, cols);
    let width = viewport.origin_x * 2.0 + grid_width + PANEL_WIDTH;
    let height = (viewport.origin_y * 2.0 + grid_height).max(MIN_WINDOW_HEIGHT);
    (width, height)
}

/// Create control buttons; the first one reflects the run state
pub fn create_buttons(is_running: bool) -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = (PANEL_WIDTH - 30.0) / 2.0;
    vec![
        Button::new(
            px,
            60.0,
            width,
            BUTTON_HEIGHT,
            if is_running { "Stop" } else { "Start" },
            ButtonAction::ToggleRunning,
        ),
        Button::new(px + width + 10.0, 60.0, width, BUTTON_HEIGHT, "Clear", ButtonAction::Clear),
        Button::new(px, 106.0, width, BUTTON_HEIGHT, "Random", ButtonAction::Randomize),
        Button::new(px + width + 10.0, 106.0, width, BUTTON_HEIGHT, "Step", ButtonAction::Step),
    ]
}
