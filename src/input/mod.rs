use macroquad::prelude::*;

use crate::application::Simulation;
use crate::ui::{Button, CELL_SIZE, grid_area_size};

/// Handle a click/tap on the board: toggle the cell under the cursor.
/// Toggling is allowed whether the simulation is running or paused.
pub fn handle_cell_toggle(sim: &mut Simulation, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if mouse_pos.0 >= grid_area_size() || mouse_pos.1 >= grid_area_size() {
        return;
    }

    let x = (mouse_pos.0 / CELL_SIZE) as usize;
    let y = (mouse_pos.1 / CELL_SIZE) as usize;
    sim.toggle_cell(x, y);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 3] = [
        (KeyCode::Enter, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    sim: Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Simulation {
    buttons
        .iter()
        .enumerate()
        .fold(sim, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.toggle_running(),
                1 => s.clear(),
                2 => s.randomize(),
                _ => s,
            }
        })
}
