use aging_life::{Config, GameState, Viewport, input, rendering, ui};
use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    // Fall back to defaults here; main reports invalid arguments
    let config = Config::parse();
    let config = if config.validate().is_ok() { config } else { Config::default() };
    let viewport = Viewport::new(config.cell_size);
    let (width, height) = ui::window_size(&viewport, config.rows, config.cols);

    Conf {
        window_title: "The Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = Config::parse();
    if let Err(e) = config.validate() {
        error!("invalid configuration: {e}");
        std::process::exit(2);
    }
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("cannot create grid: {e}");
            std::process::exit(2);
        }
    };
    let viewport = Viewport::new(config.cell_size);
    info!(
        "{}x{} grid, {}ms per generation, {} algorithm, {:?} palette",
        config.rows,
        config.cols,
        config.interval_ms,
        state.algorithm.name(),
        config.palette
    );

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(state.is_running);

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::handle_cell_click(state, &viewport, mouse_pos);
        state = input::process_keyboard_input(state);
        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, &viewport, config.palette);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
