use super::{Cell, Grid};

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern on grid at specified position.
    /// Cells falling outside the grid are clipped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely (period 30).
    /// The startup seed: these coordinates match the board it was
    /// designed for, so it is placed at the origin.
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (5, 1), (5, 2),
                (6, 1), (6, 2),

                // Left circle
                (5, 11), (6, 11), (7, 11),
                (4, 12), (8, 12),
                (3, 13), (9, 13),
                (3, 14), (9, 14),
                (6, 15),
                (4, 16), (8, 16),
                (5, 17), (6, 17), (7, 17),
                (6, 18),

                // Middle pieces
                (3, 21), (4, 21), (5, 21),
                (3, 22), (4, 22), (5, 22),
                (2, 23), (6, 23),
                (1, 25), (2, 25), (6, 25), (7, 25),

                // Right square
                (3, 35), (4, 35),
                (3, 36), (4, 36),
            ]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_dimensions_from_cells() {
        let gun = presets::glider_gun();
        assert_eq!(gun.cells.len(), 36);
        assert_eq!(gun.width, 10);
        assert_eq!(gun.height, 37);
    }

    #[test]
    fn test_gun_fits_startup_board() {
        let mut grid = Grid::new(50, 50);
        presets::glider_gun().place_on(&mut grid, 0, 0);
        assert_eq!(grid.population(), 36);
    }

    #[test]
    fn test_place_on_clips_at_boundary() {
        let mut grid = Grid::new(5, 5);
        presets::block().place_on(&mut grid, 4, 4);
        // Only the (4,4) corner of the 2x2 block lands in bounds
        assert_eq!(grid.population(), 1);
        assert_eq!(grid.get(4, 4), Some(Cell::Alive));
    }

    #[test]
    fn test_place_on_at_offset() {
        let mut grid = Grid::new(10, 10);
        presets::blinker().place_on(&mut grid, 3, 3);
        assert_eq!(grid.get(3, 4), Some(Cell::Alive));
        assert_eq!(grid.get(4, 4), Some(Cell::Alive));
        assert_eq!(grid.get(5, 4), Some(Cell::Alive));
        assert_eq!(grid.population(), 3);
    }
}
