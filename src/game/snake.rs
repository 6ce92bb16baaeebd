use std::collections::{HashSet, VecDeque};

use super::direction::Direction;
use super::grid::{Cell, Grid};

/// The snake in the game
///
/// Steering is buffered: key presses land in `pending_direction` and are
/// consumed once, at the start of the next tick. The body grows toward
/// `target_len` one cell per tick rather than all at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, with head at the front
    pub body: VecDeque<Cell>,
    /// Direction applied this tick
    pub direction: Direction,
    /// Buffered input; last write before the next tick wins
    pub pending_direction: Option<Direction>,
    /// Length the body converges to
    pub target_len: usize,
}

impl Snake {
    /// Create a single-cell snake at `start`, moving right
    pub fn new(start: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);

        Self {
            body,
            direction: Direction::Right,
            pending_direction: None,
            target_len: 1,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    /// Buffer a steering input for the next tick
    ///
    /// No reversal check happens here; a later press overwrites an earlier
    /// one, and rejection is decided at tick time against the then-current
    /// direction.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Consume the buffered input, rejecting an exact 180-degree reversal
    ///
    /// Called once at the start of each tick, before movement. The check
    /// runs against the direction from the previous tick, which rules out
    /// an instantaneous reversal into the cell behind the head. The pending
    /// slot is cleared whether the input was applied or rejected.
    pub fn apply_pending_direction(&mut self) {
        if let Some(next) = self.pending_direction.take() {
            if !self.direction.is_opposite(next) {
                self.direction = next;
            }
        }
    }

    /// Advance one cell in the current direction, wrapping at the edges
    ///
    /// The tail is dropped only once the body exceeds `target_len`, so a
    /// grown target keeps the tail in place for one extra tick.
    pub fn step(&mut self, grid: &Grid) {
        let new_head = grid.wrap(self.head(), self.direction);
        self.body.push_front(new_head);

        if self.body.len() > self.target_len {
            self.body.pop_back();
        }
    }

    /// Check whether the head overlaps any other body cell
    ///
    /// Meaningful only on the post-move body, after `step`.
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Raise the target length by one; the body catches up over later ticks
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Reinitialize in place to a single-cell snake at `start`, moving right
    pub fn reset(&mut self, start: Cell) {
        self.body.clear();
        self.body.push_back(start);
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.target_len = 1;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The set of cells the body occupies
    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }
}
