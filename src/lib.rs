//! Toroidal snake: a single-screen snake game on a wrap-around grid.
//!
//! The core (`grid`, `food`, `snake`, `round`) is pure game state with no
//! I/O. `config`, `input`, `term`, `render` and `game` drive it from a
//! terminal.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod render;
pub mod round;
pub mod snake;
pub mod term;

pub use config::GameConfig;
pub use grid::{Cell, Direction, Grid};
pub use round::{RoundController, RoundSnapshot, TickOutcome};
