use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::Apple;
use crate::config::GameConfig;
use crate::input::Direction;
use crate::snake::{Snake, StepOutcome};

/// What happened during one simulated frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FrameReport {
    pub step: StepOutcome,
    pub ate_apple: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    /// Target frames per second for the pacing clock.
    pub speed: u32,
    pub frame_count: u64,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a state whose apple placement is seeded from the OS.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(&config);
        let apple = Apple::spawn(&mut rng, config.geometry);

        Self {
            snake,
            apple,
            speed: config.initial_speed,
            frame_count: 0,
            config,
            rng,
        }
    }

    /// Runs the simulation half of one frame.
    ///
    /// A blocked step resets the snake and the speed. The apple check runs
    /// afterwards either way, so a fresh snake spawning onto the apple eats it.
    pub fn advance(&mut self, requested: Option<Direction>) -> FrameReport {
        self.frame_count += 1;

        if let Some(direction) = requested {
            self.snake.request_direction(direction);
        }
        self.snake.arbitrate_direction();

        let step = self.snake.step(self.config.geometry);
        if step == StepOutcome::Blocked {
            debug!(
                "snake blocked at {:?} with length {} and speed {}",
                self.snake.head(),
                self.snake.len(),
                self.speed
            );
            self.speed = self.snake.reset();
        }

        let ate_apple = self.snake.head() == self.apple.position();
        if ate_apple {
            self.snake.grow();
            let next = self.apple.relocate(&mut self.rng, self.config.geometry);
            self.speed += 1;
            debug!(
                "apple eaten, length target {}, speed {}, next apple at {next:?}",
                self.snake.target_length(),
                self.speed
            );
        }

        FrameReport { step, ate_apple }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
