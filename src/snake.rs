use rand::Rng;

use crate::grid::{Cell, Direction::{self, *}, Grid};
use MoveResult::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The head stepped onto `new_head`; `old_tail` is the cell given up to
    /// keep the body at its target size, if any.
    Moved { new_head: Cell, old_tail: Option<Cell> },
    /// The head would have entered the body. The snake is back at its spawn
    /// cell as a single segment.
    Crashed
}

/// The snake. `body[0]` is the head.
///
/// `length` is the target size: the body keeps up to `length + 1` cells, so
/// a freshly spawned snake (one cell, `length == 1`) stretches to two cells
/// on its first step, and every `grow()` lets one extra cell stay on the next
/// step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    spawn: Cell,
}

impl Snake {
    pub fn new(grid: &Grid) -> Self {
        let spawn = grid.spawn_cell();
        Snake { body: vec![spawn], length: 1, direction: Right, next_direction: None, spawn }
    }

    /// A snake laid out on `body` (head first) with no growth pending. It still
    /// respawns at the grid's spawn cell when it crashes.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn with_body(grid: &Grid, body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");

        let length = if body.len() > 1 { body.len() - 1 } else { 1 };
        Snake { body, length, direction, next_direction: None, spawn: grid.spawn_cell() }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    pub fn spawn(&self) -> Cell {
        self.spawn
    }

    /// Queues a turn for the next tick. A request to reverse onto the
    /// committed direction is dropped.
    pub fn queue_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.next_direction = Some(direction);
        }
    }

    pub fn commit_direction(&mut self) {
        if let Some(dir) = self.next_direction.take() {
            self.direction = dir;
        }
    }

    pub fn advance<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> MoveResult {
        let new_head = grid.wrap(self.head(), self.direction);

        // Checked against the whole pre-move body, tail included
        if self.body.contains(&new_head) {
            self.reset(rng);
            return Crashed;
        }

        self.body.insert(0, new_head);

        let old_tail = if self.body.len() > self.length + 1 {
            self.body.pop()
        } else {
            None
        };

        Moved { new_head, old_tail }
    }

    /// Takes effect on the next `advance`, which keeps its tail.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Back to a single segment at the spawn cell, heading somewhere random.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.body.clear();
        self.body.push(self.spawn);
        self.length = 1;
        self.direction = Direction::random(rng);
        self.next_direction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid() -> Grid {
        Grid::new(32, 24)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn spawns_at_center_heading_right() {
        let snake = Snake::new(&grid());
        assert_eq!(snake.body(), &[(16, 12)]);
        assert_eq!(snake.head(), (16, 12));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.next_direction(), None);
    }

    #[test]
    fn reversal_is_ignored() {
        for d in Direction::ALL.iter().copied() {
            let mut snake = Snake::with_body(&grid(), vec![(5, 5), (4, 5)], d);
            snake.queue_direction(d.opposite());
            assert_eq!(snake.next_direction(), None);
        }
    }

    #[test]
    fn reversal_keeps_an_earlier_request() {
        let mut snake = Snake::new(&grid());
        snake.queue_direction(Up);
        snake.queue_direction(Left);
        assert_eq!(snake.next_direction(), Some(Up));
    }

    #[test]
    fn latest_valid_request_wins() {
        let mut snake = Snake::new(&grid());
        snake.queue_direction(Up);
        snake.queue_direction(Down);
        assert_eq!(snake.next_direction(), Some(Down));
    }

    #[test]
    fn commit_consumes_the_pending_direction() {
        let mut snake = Snake::new(&grid());
        snake.queue_direction(Down);
        snake.commit_direction();
        assert_eq!(snake.direction(), Down);
        assert_eq!(snake.next_direction(), None);

        // Nothing pending, nothing changes
        snake.commit_direction();
        assert_eq!(snake.direction(), Down);
    }

    #[test]
    fn first_move_stretches_to_two_cells() {
        let mut snake = Snake::new(&grid());
        let res = snake.advance(&grid(), &mut rng());
        assert_eq!(res, Moved { new_head: (17, 12), old_tail: None });
        assert_eq!(snake.body(), &[(17, 12), (16, 12)]);

        let res = snake.advance(&grid(), &mut rng());
        assert_eq!(res, Moved { new_head: (18, 12), old_tail: Some((16, 12)) });
        assert_eq!(snake.body(), &[(18, 12), (17, 12)]);
    }

    #[test]
    fn moving_translates_without_growth() {
        let mut snake = Snake::with_body(&grid(), vec![(5, 5), (4, 5), (3, 5)], Right);
        snake.advance(&grid(), &mut rng());
        assert_eq!(snake.body(), &[(6, 5), (5, 5), (4, 5)]);
    }

    #[test]
    fn growth_is_lazy() {
        let mut snake = Snake::with_body(&grid(), vec![(5, 5), (4, 5), (3, 5)], Right);
        snake.grow();
        assert_eq!(snake.body().len(), 3);

        let res = snake.advance(&grid(), &mut rng());
        assert_eq!(res, Moved { new_head: (6, 5), old_tail: None });
        assert_eq!(snake.body().len(), 4);

        snake.advance(&grid(), &mut rng());
        assert_eq!(snake.body().len(), 4);
        assert_eq!(snake.body(), &[(7, 5), (6, 5), (5, 5), (4, 5)]);
    }

    #[test]
    fn body_never_exceeds_length_plus_one() {
        let mut snake = Snake::new(&grid());
        let mut rng = rng();
        for i in 0..40 {
            if i % 5 == 0 {
                snake.grow();
            }
            snake.advance(&grid(), &mut rng);
            assert!(snake.body().len() <= snake.length() + 1);
        }
    }

    #[test]
    fn moves_across_the_edge() {
        let mut snake = Snake::with_body(&grid(), vec![(31, 3), (30, 3)], Right);
        snake.advance(&grid(), &mut rng());
        assert_eq!(snake.head(), (0, 3));
    }

    #[test]
    fn running_into_the_body_resets() {
        // Heading down from (5,5) into (5,6), the fourth cell of five
        let body = vec![(5, 5), (4, 5), (4, 6), (5, 6), (6, 6)];
        let mut snake = Snake::with_body(&grid(), body, Down);
        snake.grow();

        assert_eq!(snake.advance(&grid(), &mut rng()), Crashed);
        assert_eq!(snake.body(), &[grid().spawn_cell()]);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.next_direction(), None);
    }

    #[test]
    fn vacating_tail_cell_still_counts_as_body() {
        // Square loop: the next head would be the current tail
        let body = vec![(5, 5), (5, 6), (6, 6), (6, 5)];
        let mut snake = Snake::with_body(&grid(), body, Right);
        assert_eq!(snake.advance(&grid(), &mut rng()), Crashed);
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.head(), snake.spawn());
    }

    #[test]
    fn reset_picks_direction_from_rng() {
        let mut snake = Snake::with_body(&grid(), vec![(1, 1), (2, 1), (3, 1)], Left);
        snake.queue_direction(Up);
        snake.reset(&mut StdRng::seed_from_u64(8));

        let expected = Direction::random(&mut StdRng::seed_from_u64(8));
        assert_eq!(snake.direction(), expected);
        assert_eq!(snake.next_direction(), None);
        assert_eq!(snake.body(), &[(16, 12)]);
    }
}
