use std::thread;
use std::time::{Duration, Instant};

/// Blocks the game loop so it runs at a target number of frames per second.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_tick: Instant,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Sleeps until one frame at `fps` has passed since the previous tick.
    ///
    /// Returns the time that actually elapsed between the two ticks. A frame
    /// that already overran its budget does not sleep.
    pub fn tick(&mut self, fps: u32) -> Duration {
        let budget = frame_duration(fps);
        let elapsed = self.last_tick.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }

        let now = Instant::now();
        let frame_time = now.duration_since(self.last_tick);
        self.last_tick = now;
        frame_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of one frame at `fps`; zero is treated as one frame per second.
#[must_use]
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}
