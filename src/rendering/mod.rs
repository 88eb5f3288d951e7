use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;
use crate::ui::{Button, BAR_HEIGHT, CELL_SIZE, bar_y, grid_area_size};

/// Paint the whole board. Every cell is filled with the color derived
/// from its alive flag, so the picture is a pure projection of the
/// logical grid.
pub fn draw_grid(grid: &Grid) {
    let dead_color = Color::from_rgba(2, 132, 168, 255); // Deep teal
    let alive_color = Color::from_rgba(169, 232, 220, 255); // Pale mint

    for (x, y, cell) in grid.iter_cells() {
        let color = if cell.is_alive() { alive_color } else { dead_color };
        draw_rectangle(
            x as f32 * CELL_SIZE,
            y as f32 * CELL_SIZE,
            CELL_SIZE,
            CELL_SIZE,
            color,
        );
    }
}

/// Draw the control bar: buttons plus a small status readout
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle(
        0.0,
        bar_y(),
        grid_area_size(),
        BAR_HEIGHT,
        Color::from_rgba(30, 30, 30, 255),
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let status_x = 500.0;
    let labels = [
        (
            format!("Gen: {}", sim.generation),
            status_x,
            bar_y() + 18.0,
            14.0,
            WHITE,
        ),
        (
            format!("Alive: {}", sim.grid.population()),
            status_x,
            bar_y() + 34.0,
            14.0,
            GRAY,
        ),
        (
            (if sim.is_running { "Running" } else { "Paused" }).to_string(),
            status_x,
            bar_y() + 50.0,
            14.0,
            if sim.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });
}
