/*
 * Frame Clock Module
 *
 * Fixed timestep for the simulation. The host calls `update` once per
 * display refresh with the time since the previous call; the clock turns
 * that into a whole number of simulation frames at the configured rate and
 * carries the remainder to the next call.
 *
 * Catch-up is capped so a long stall (window drag, debugger) does not make
 * the game fast-forward; the excess time is dropped.
 */

use std::time::Duration;

use tracing::warn;

pub struct FrameClock {
    step: Duration,
    accumulator: Duration,
    max_steps: u32,
}

impl FrameClock {
    pub fn new(fps: u32, max_steps: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / fps.max(1),
            accumulator: Duration::ZERO,
            max_steps: max_steps.max(1),
        }
    }

    pub fn step_size(&self) -> Duration {
        self.step
    }

    // Time banked towards the next step
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    // Add elapsed time and return how many simulation frames are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            warn!(
                dropped_ms = self.accumulator.as_secs_f64() * 1000.0,
                "simulation fell behind, dropping time"
            );
            self.accumulator = Duration::ZERO;
        }

        steps
    }
}
