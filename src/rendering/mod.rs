mod palette;

pub use palette::Palette;

use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::domain::Grid;
use crate::ui::{Button, PANEL_WIDTH, panel_x};

const INTRO: &str = "The Game of Life is a 'cellular automaton' invented by Cambridge \
mathematician John Conway in 1970. Cells live, die or multiply depending on the rules. \
Here every surviving cell also ages, cycling through twelve colours.";

const ALIVE_RULES: &str = "If a cell is alive: with 0-1 alive neighbors it dies of \
underpopulation, with 2-3 it lives on to the next generation and ages, with more than 3 \
it dies of overpopulation.";

const DEAD_RULES: &str = "If a cell is dead: with exactly 3 alive neighbors it becomes \
a live cell by reproduction. Otherwise it remains dead.";

/// Greedy word wrap to at most `max_chars` per line
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draw the grid as round cells on a dark board, with a glow around live cells
pub fn draw_grid(grid: &Grid, viewport: &Viewport, palette: Palette) {
    let (rows, cols) = grid.dimensions();
    let (width, height) = viewport.grid_extent(rows, cols);
    let size = viewport.cell_size;
    let radius = size * 0.4;
    let background = Palette::background();

    draw_rectangle(viewport.origin_x, viewport.origin_y, width, height, BLACK);
    draw_rectangle_lines(
        viewport.origin_x - 1.0,
        viewport.origin_y - 1.0,
        width + 2.0,
        height + 2.0,
        1.0,
        Color::from_rgba(45, 45, 45, 255),
    );

    // Glows first so neighboring cells are not covered by them
    for (row, col, cell) in grid.iter_cells() {
        if let Some(color) = palette.color(cell) {
            let (x, y) = viewport.cell_to_screen(row, col);
            let glow = Color { a: 0.25, ..color };
            draw_circle(x + size / 2.0, y + size / 2.0, radius * 1.8, glow);
        }
    }

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = viewport.cell_to_screen(row, col);
        let color = palette.color(cell).unwrap_or(background);
        draw_circle(x + size / 2.0, y + size / 2.0, radius, color);
    }
}

/// Helper to draw a wrapped paragraph, returns the y below it
fn draw_paragraph(text: &str, x: f32, y: f32, color: Color) -> f32 {
    let max_chars = ((PANEL_WIDTH - 20.0) / 7.0) as usize;
    let mut y = y;
    for line in wrap_text(text, max_chars) {
        draw_text(&line, x, y, 16.0, color);
        y += 16.0;
    }
    y + 10.0
}

/// Draw the control panel with buttons, counters and rules text
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x() + 10.0;
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(20, 20, 20, 255),
    );

    draw_text("The Game of Life", px, 40.0, 30.0, WHITE);
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (status, status_color) = if state.is_running {
        ("Running", Color::from_rgba(116, 238, 21, 255))
    } else {
        ("Stopped", Color::from_rgba(255, 165, 0, 255))
    };
    let labels = [
        (format!("Generations: {}", state.generation), 175.0, WHITE),
        (format!("Status: {status}"), 195.0, status_color),
        (format!("Live cells: {}", state.grid.population()), 215.0, GRAY),
        (
            format!(
                "{}: {:.2}ms",
                state.algorithm.name(),
                state.last_evolution_time_ms
            ),
            235.0,
            GRAY,
        ),
        (state.algorithm.description().to_owned(), 253.0, DARKGRAY),
        ("A: switch algorithm".to_owned(), 271.0, DARKGRAY),
    ];
    labels.iter().for_each(|(text, y, color)| {
        draw_text(text, px, *y, 18.0, *color);
    });

    let y = draw_paragraph(INTRO, px, 300.0, Color::from_rgba(116, 238, 21, 255));
    draw_text("The Rules", px, y + 6.0, 22.0, WHITE);
    let y = draw_paragraph(ALIVE_RULES, px, y + 30.0, Color::from_rgba(1, 255, 255, 255));
    draw_paragraph(DEAD_RULES, px, y, Color::from_rgba(240, 0, 255, 255));
}
