use rand::Rng;

use crate::grid::{Cell, Grid};

/// The single food item on the playfield. Its placement ignores the snake: a
/// cell under the body is legal and simply gets eaten when the head arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Food { position: grid.random_cell(rng) }
    }

    pub fn at(position: Cell) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a fresh random cell, which may equal the old one.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
    }
}
