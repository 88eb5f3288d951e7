// Domain layer - Core board logic, no graphics dependency
pub mod domain;

// Application layer - Simulation controller
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::Simulation;
pub use ui::Button;
