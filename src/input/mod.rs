use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::ui::{Button, ButtonAction};

/// Apply a control action to the state
pub fn apply_action(state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::ToggleRunning => state.toggle_running(),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Randomize => state.randomize(),
        ButtonAction::Step => state.step_once(),
        ButtonAction::CycleAlgorithm => state.cycle_algorithm(),
    }
}

/// Toggle the clicked cell on left click over the grid
pub fn handle_cell_click(state: GameState, viewport: &Viewport, mouse_pos: (f32, f32)) -> GameState {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return state;
    }
    let (rows, cols) = state.grid.dimensions();
    if !viewport.contains(rows, cols, mouse_pos.0, mouse_pos.1) {
        return state;
    }
    let (row, col) = viewport.screen_to_cell(mouse_pos.0, mouse_pos.1);
    state.toggle_cell(row, col)
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    let actions = [
        (KeyCode::Space, ButtonAction::ToggleRunning),
        (KeyCode::C, ButtonAction::Clear),
        (KeyCode::R, ButtonAction::Randomize),
        (KeyCode::N, ButtonAction::Step),
        (KeyCode::A, ButtonAction::CycleAlgorithm),
    ];

    actions.iter().fold(state, |s, &(key, action)| {
        if is_key_pressed(key) { apply_action(s, action) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons.iter().fold(state, |s, btn| {
        if btn.is_clicked(mouse_pos) {
            apply_action(s, btn.action())
        } else {
            s
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state() -> GameState {
        let config = Config {
            rows: 4,
            cols: 4,
            seed: Some(5),
            live_probability: 1.0,
            ..Config::default()
        };
        GameState::new(&config).unwrap()
    }

    #[test]
    fn test_actions_map_to_state_transitions() {
        let s = apply_action(state(), ButtonAction::Randomize);
        assert_eq!(s.grid.population(), 16);

        let s = apply_action(s, ButtonAction::Step);
        assert_eq!(s.generation, 2);

        let s = apply_action(s, ButtonAction::CycleAlgorithm);
        assert_eq!(s.algorithm, crate::domain::Algorithm::Parallel);

        let s = apply_action(s, ButtonAction::ToggleRunning);
        assert!(s.is_running);

        let s = apply_action(s, ButtonAction::Clear);
        assert!(!s.is_running);
        assert_eq!(s.grid.population(), 0);
        assert_eq!(s.generation, 1);
    }
}
