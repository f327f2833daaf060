use std::collections::{HashSet, VecDeque};

use super::types::{BOARD_SIZE, Cell, Direction, GameStatus, Point};
use crate::games::SessionRng;
use crate::log;

/// The whole simulation: direction, body, food, status and score.
///
/// The body is ordered tail-first: the front of the deque is the oldest
/// segment, the back is the head. `occupied` mirrors the body for O(1)
/// collision and cell-classification checks.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    direction: Direction,
    snake: VecDeque<Point>,
    occupied: HashSet<Point>,
    food: Point,
    status: GameStatus,
    score: u32,
}

impl Default for SnakeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGameState {
    pub fn new() -> Self {
        let start = Point::new(1, 1);
        Self {
            direction: Direction::Down,
            snake: VecDeque::from([start]),
            occupied: HashSet::from([start]),
            food: Point::new(0, 0),
            status: GameStatus::Idle,
            score: 0,
        }
    }

    /// Feeds a raw key identifier. A key naming one of the four directions
    /// replaces the pending direction; anything else is a no-op.
    ///
    /// Reversing straight into the second segment is deliberately accepted
    /// here; the collision check on the next tick judges it.
    pub fn handle_key(&mut self, key: &str) {
        if let Some(direction) = Direction::from_key(key) {
            self.direction = direction;
        }
    }

    /// Start, pause, resume, or restart. From GameOver the whole state is
    /// reset to its initial values before running again; from any other
    /// status this flips Running and Idle without touching the simulation.
    pub fn toggle_play_pause(&mut self) {
        match self.status {
            GameStatus::GameOver => {
                *self = Self::new();
                self.status = GameStatus::Running;
                log!("Game restarted");
            }
            GameStatus::Running => self.status = GameStatus::Idle,
            GameStatus::Idle => self.status = GameStatus::Running,
        }
    }

    /// Advances the simulation by one cell. Only legal while Running; any
    /// other status makes this a no-op.
    pub fn tick(&mut self, rng: &mut SessionRng) {
        if self.status != GameStatus::Running {
            return;
        }

        let next_head = self.next_head_position();

        // The pre-move body, head included, decides the collision. A
        // length-1 snake can therefore never collide with itself.
        if self.occupied.contains(&next_head) {
            self.status = GameStatus::GameOver;
            log!(
                "Game over: collided at ({}, {}). Final score: {}",
                next_head.row,
                next_head.col,
                self.score
            );
            return;
        }

        self.snake.push_back(next_head);
        self.occupied.insert(next_head);

        if next_head == self.food {
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.row,
                next_head.col,
                self.score
            );
            self.spawn_food(rng);
        } else {
            let tail = self
                .snake
                .pop_front()
                .expect("snake body is never empty");
            self.occupied.remove(&tail);
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn head(&self) -> Point {
        *self.snake.back().expect("snake body is never empty")
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// Render-snapshot classification of a single cell. The snake takes
    /// precedence over food, matching the membership-then-equality order
    /// the renderer relies on.
    pub fn cell(&self, point: Point) -> Cell {
        if self.occupied.contains(&point) {
            Cell::Snake
        } else if point == self.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }

    fn next_head_position(&self) -> Point {
        let (d_row, d_col) = self.direction.delta();
        let head = self.head();
        Point::new(
            wrap(head.row as i32 + d_row),
            wrap(head.col as i32 + d_col),
        )
    }

    /// Rejection sampling over the board until a cell free of the snake
    /// comes up. A snake covering the entire board is not a state the
    /// game supports, so the loop is unbounded.
    fn spawn_food(&mut self, rng: &mut SessionRng) {
        loop {
            let candidate = Point::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !self.occupied.contains(&candidate) {
                log!("Food spawned at ({}, {})", candidate.row, candidate.col);
                self.food = candidate;
                return;
            }
        }
    }

    #[cfg(test)]
    fn set_snake(&mut self, body: &[Point]) {
        self.snake = body.iter().copied().collect();
        self.occupied = body.iter().copied().collect();
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    #[cfg(test)]
    fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    fn body(&self) -> Vec<Point> {
        self.snake.iter().copied().collect()
    }
}

/// Toroidal wrap of a single coordinate: past the high edge lands on 0,
/// past the low edge lands on BOARD_SIZE - 1.
fn wrap(value: i32) -> usize {
    if value >= BOARD_SIZE as i32 {
        0
    } else if value < 0 {
        BOARD_SIZE - 1
    } else {
        value as usize
    }
}
