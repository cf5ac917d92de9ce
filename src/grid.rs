use rand::Rng;

use Direction::*;

/// A position on the playfield, in cell units: `(x, y)`.
pub type Cell = (u16, u16);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Right, Left, Up, Down];

    /// Unit step `(dx, dy)`; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// The toroidal coordinate space. Holds only its extent, never any game state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Both extents must be non-zero; `GameConfig::validate` guarantees it for
    /// grids built from configuration.
    pub fn new(width: u16, height: u16) -> Self {
        debug_assert!(width > 0 && height > 0, "empty grid {}x{}", width, height);
        Grid { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.width && cell.1 < self.height
    }

    /// The cell every round starts from.
    pub fn spawn_cell(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }

    /// One step from `cell` towards `direction`, re-entering at the opposite
    /// edge when it leaves the playfield.
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let x = (cell.0 as i32 + dx).rem_euclid(self.width as i32);
        let y = (cell.1 as i32 + dy).rem_euclid(self.height as i32);
        (x as u16, y as u16)
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        (rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }
}
