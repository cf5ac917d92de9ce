use log::{debug, info};
use rand::Rng;

use crate::food::Food;
use crate::grid::{Cell, Direction, Grid};
use crate::snake::{MoveResult, Snake};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    /// The snake ran into itself and the round started over. The respawned
    /// head may still have eaten.
    Reset,
}

/// What the renderer needs after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot<'a> {
    pub body: &'a [Cell],
    pub food: Cell,
    /// Tail cell given up this tick, to be erased.
    pub vacated: Option<Cell>,
    pub outcome: TickOutcome,
}

/// Owns the snake, the food and the random source, and steps them one tick at
/// a time.
pub struct RoundController<R: Rng> {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: R,
    rounds: u64,
}

impl<R: Rng> RoundController<R> {
    pub fn new(grid: Grid, mut rng: R) -> Self {
        let snake = Snake::new(&grid);
        let food = Food::new(&grid, &mut rng);
        RoundController { grid, snake, food, rng, rounds: 1 }
    }

    /// Starts from a prepared snake and food, keeping `rng` for later
    /// resets and relocations.
    pub fn with_state(grid: Grid, snake: Snake, food: Food, rng: R) -> Self {
        RoundController { grid, snake, food, rng, rounds: 1 }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Rounds started so far, the current one included.
    pub fn rounds_played(&self) -> u64 {
        self.rounds
    }

    pub fn snapshot(&self) -> RoundSnapshot<'_> {
        RoundSnapshot {
            body: self.snake.body(),
            food: self.food.position(),
            vacated: None,
            outcome: TickOutcome::Moved,
        }
    }

    /// Throws the current round away and starts a new one.
    pub fn restart(&mut self) {
        self.snake.reset(&mut self.rng);
        self.food.relocate(&self.grid, &mut self.rng);
        self.rounds += 1;
        info!("Round {} started on request", self.rounds);
    }

    pub fn tick(&mut self, input: Option<Direction>) -> RoundSnapshot<'_> {
        if let Some(dir) = input {
            self.snake.queue_direction(dir);
        }

        self.snake.commit_direction();

        let length_before = self.snake.length();
        let (mut outcome, vacated) = match self.snake.advance(&self.grid, &mut self.rng) {
            MoveResult::Crashed => {
                self.rounds += 1;
                info!("Snake crashed at length {}, starting round {}", length_before, self.rounds);
                (TickOutcome::Reset, None)
            },
            MoveResult::Moved { old_tail, .. } => (TickOutcome::Moved, old_tail),
        };

        // A respawned head eats too, when the food sits on the spawn cell
        let head = self.snake.head();
        if head == self.food.position() {
            self.snake.grow();
            self.food.relocate(&self.grid, &mut self.rng);
            debug!("Ate food at {:?}, length now {}, next food at {:?}",
                   head, self.snake.length(), self.food.position());
            if outcome == TickOutcome::Moved {
                outcome = TickOutcome::Ate;
            }
        }

        RoundSnapshot {
            body: self.snake.body(),
            food: self.food.position(),
            vacated,
            outcome,
        }
    }
}
