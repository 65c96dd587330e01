use std::collections::VecDeque;

use crate::config::{GameConfig, GridGeometry};
use crate::input::Direction;

/// Pixel position of a cell's top-left corner.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the position one cell away in `direction`.
    #[must_use]
    pub fn shifted(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.offset(cell_size);
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Result of trying to move the snake one cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    Advanced,
    /// The next head would leave the grid or hit the body. Nothing moved.
    Blocked,
}

/// Values a snake returns to after a collision.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Spawn {
    position: Position,
    length: usize,
    direction: Direction,
    speed: u32,
}

/// Player-controlled snake: body cells, heading and length target.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    target_length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    spawn: Spawn,
}

impl Snake {
    /// Creates a one-cell snake at the grid centre.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let spawn = Spawn {
            position: config.geometry.center(),
            length: config.initial_length,
            direction: config.initial_direction,
            speed: config.initial_speed,
        };

        let mut body = VecDeque::new();
        body.push_front(spawn.position);

        Self {
            body,
            target_length: spawn.length,
            direction: spawn.direction,
            pending_direction: None,
            spawn,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// The length target is never below the configured initial length.
    #[must_use]
    pub fn from_segments(
        segments: Vec<Position>,
        direction: Direction,
        config: &GameConfig,
    ) -> Self {
        assert!(
            !segments.is_empty(),
            "snake needs at least one segment to have a head"
        );

        let mut snake = Self::new(config);
        snake.target_length = segments.len().max(config.initial_length);
        snake.body = VecDeque::from(segments);
        snake.direction = direction;
        snake
    }

    /// Stores a direction request for this frame, replacing any earlier one.
    pub fn request_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Applies the pending request unless it would reverse the snake.
    ///
    /// The pending slot is emptied whether or not the request was accepted.
    pub fn arbitrate_direction(&mut self) {
        if let Some(next) = self.pending_direction.take() {
            if next != self.direction.opposite() {
                self.direction = next;
            }
        }
    }

    /// Moves the head one cell in the current direction.
    ///
    /// The collision check runs against the body as it is before the move,
    /// so stepping onto the current tail cell is also blocked.
    pub fn step(&mut self, geometry: GridGeometry) -> StepOutcome {
        let next_head = self.head().shifted(self.direction, geometry.cell_size());

        if !geometry.contains(next_head) || self.occupies(next_head) {
            return StepOutcome::Blocked;
        }

        self.body.push_front(next_head);
        if self.body.len() > self.target_length {
            let _ = self.body.pop_back();
        }

        StepOutcome::Advanced
    }

    /// Raises the length target by one. The body catches up on later steps.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Puts the snake back at its spawn state and returns the starting speed.
    pub fn reset(&mut self) -> u32 {
        self.body.clear();
        self.body.push_front(self.spawn.position);
        self.target_length = self.spawn.length;
        self.direction = self.spawn.direction;
        self.pending_direction = None;
        self.spawn.speed
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
