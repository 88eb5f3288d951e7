use super::Cell;

/// Grid manages the 2D cellular automaton board.
/// Uses functional, immutable updates for predictable state transitions.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position. Out-of-bounds positions return None,
    /// which the neighbor count treats as dead.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position (out-of-bounds writes are ignored)
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at position between alive and dead
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.get(x, y) {
            self.set(x, y, cell.toggle());
        }
    }

    /// Count live neighbors among the 8 surrounding positions.
    /// The board does not wrap: anything past an edge counts as dead,
    /// so corner cells see at most 3 live neighbors and edge cells 5.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i32, y as i32);

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| nx >= 0 && ny >= 0)
            .filter_map(|(nx, ny)| self.get(nx as usize, ny as usize))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation.
    /// Every next-state is derived from this frozen grid before any
    /// of them is applied (synchronous update semantics).
    pub fn evolve(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Randomize grid (30% chance of alive)
    pub fn randomize(mut self) -> Self {
        use rand::Rng;

        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self
    }

    /// Number of live cells on the board
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_out_of_bounds_get_is_none() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 5), None);
        assert_eq!(grid.get(0, 0), Some(Cell::Dead));
    }

    #[test]
    fn test_out_of_bounds_set_is_ignored() {
        let mut grid = Grid::new(5, 5);
        grid.set(7, 7, Cell::Alive);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_corner_counts_only_in_bounds_neighbors() {
        // Ring around the (0,0) corner: only 3 of the 8 candidate
        // positions exist, and all of them are alive.
        let grid = grid_with_alive(5, 5, &[(1, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);

        // Edge cell has at most 5 candidates
        let grid = grid_with_alive(5, 5, &[(1, 0), (3, 0), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(grid.count_live_neighbors(2, 0), 5);
    }

    #[test]
    fn test_no_wraparound() {
        // Alive cells on the right edge must not count as neighbors
        // of the left edge.
        let grid = grid_with_alive(5, 5, &[(4, 1), (4, 2), (4, 3)]);
        assert_eq!(grid.count_live_neighbors(0, 2), 0);
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = grid_with_alive(5, 5, &[(2, 2)]);
        let next = grid.evolve();
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        // Horizontal blinker flips to vertical, then back.
        let grid = grid_with_alive(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        let next = grid.evolve();
        assert_eq!(alive_cells(&next), vec![(2, 1), (2, 2), (2, 3)]);

        let back = next.evolve();
        assert_eq!(alive_cells(&back), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = grid_with_alive(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let next = grid.evolve();
        assert_eq!(alive_cells(&next), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_evolve_reads_frozen_snapshot() {
        // A glider advances correctly only if all next-states come
        // from the previous generation; in-place updates would corrupt
        // the shape within a single step.
        let grid = grid_with_alive(6, 6, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
        let next = grid.evolve();
        assert_eq!(alive_cells(&next), vec![(1, 2), (3, 2), (2, 3), (3, 3), (2, 4)]);
    }

    #[test]
    fn test_clear_kills_everything() {
        let grid = grid_with_alive(5, 5, &[(0, 0), (2, 2), (4, 4)]);
        assert_eq!(grid.clear().population(), 0);
    }
}
