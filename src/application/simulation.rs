use crate::domain::{Grid, Pattern};

/// Simulation orchestrates the board and the play/pause flag.
/// This is the application layer that coordinates domain logic;
/// rendering is a pure projection of this state.
pub struct Simulation {
    pub grid: Grid,
    pub is_running: bool,
    pub generation: u64,
}

impl Simulation {
    /// Create a new paused simulation with an empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            is_running: false,
            generation: 0,
        }
    }

    /// Create a simulation pre-seeded with a pattern at the origin
    pub fn seeded(width: usize, height: usize, pattern: &Pattern) -> Self {
        let mut sim = Self::new(width, height);
        pattern.place_on(&mut sim.grid, 0, 0);
        sim
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Flip one cell. Works whether the simulation is running or
    /// paused; the next repaint picks up the change.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        self.grid.toggle(x, y);
    }

    /// Clear the board, reset the generation counter and force pause
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize the board and force pause
    pub fn randomize(mut self) -> Self {
        self.grid = self.grid.randomize();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Advance exactly one generation, regardless of the running flag.
    /// Callable directly so tests never wait on frame timing.
    pub fn step(mut self) -> Self {
        self.grid = self.grid.evolve();
        self.generation += 1;
        self
    }

    /// Per-frame update: one step while running, a no-op while paused
    pub fn tick(self) -> Self {
        if self.is_running { self.step() } else { self }
    }
}
