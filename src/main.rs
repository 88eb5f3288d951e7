use macroquad::prelude::*;

use life_board::{
    Simulation, presets,
    ui::{self, BAR_HEIGHT, GRID_SIZE, grid_area_size},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: grid_area_size() as i32,
        window_height: (grid_area_size() + BAR_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Board starts paused, seeded with the glider gun
    let mut sim = Simulation::seeded(GRID_SIZE, GRID_SIZE, &presets::glider_gun());

    loop {
        let mouse_pos = mouse_position();

        // Buttons are rebuilt each frame so the play button mirrors
        // the running flag no matter how it was toggled (click or
        // Enter key - no way for the two to drift apart).
        let buttons = ui::create_buttons(sim.is_running);

        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        input::handle_cell_toggle(&mut sim, mouse_pos);
        sim = input::process_keyboard_input(sim);

        // One generation per display frame while running
        sim = sim.tick();

        clear_background(BLACK);
        rendering::draw_grid(&sim.grid);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
