mod button;

pub use button::Button;

use macroquad::prelude::Color;

/// Board dimension: the grid is always GRID_SIZE x GRID_SIZE
pub const GRID_SIZE: usize = 50;
pub const CELL_SIZE: f32 = 14.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_WIDTH: f32 = 150.0;
pub const BAR_HEIGHT: f32 = 60.0;

/// Width and height of the square grid area
pub fn grid_area_size() -> f32 {
    CELL_SIZE * GRID_SIZE as f32
}

/// Y position where the control bar starts (below the grid)
pub fn bar_y() -> f32 {
    grid_area_size()
}

/// Create the control bar buttons. Rebuilt every frame so the play
/// button always reflects the current running state.
pub fn create_buttons(running: bool) -> Vec<Button> {
    let y = bar_y() + (BAR_HEIGHT - BUTTON_HEIGHT) / 2.0;

    // The play button swaps fill and text colors when running,
    // like the original control did.
    let active = Color::from_rgba(2, 190, 196, 255);
    let idle = Color::from_rgba(2, 132, 168, 255);
    let (play_label, fill, text) = if running {
        ("Pause", idle, active)
    } else {
        ("Play", active, idle)
    };

    vec![
        Button::new(10.0, y, BUTTON_WIDTH, BUTTON_HEIGHT, play_label)
            .with_colors(fill, fill, text),
        Button::new(170.0, y, BUTTON_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(330.0, y, BUTTON_WIDTH, BUTTON_HEIGHT, "Random"),
    ]
}
