//! Fixed-timestep frame clock
//!
//! Frames arrive at whatever rate the host manages; ticks come out at a
//! steady `SIM_DT`. Leftover time carries into the next frame.

use std::time::Duration;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta the clock will accept (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Accumulates frame time and hands out whole ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            dt,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Fixed tick length in seconds
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed one frame's delta; returns how many ticks to run now
    ///
    /// Long stalls are clamped so a resume never triggers a burst of
    /// catch-up ticks, and excess backlog past the substep cap is dropped.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < self.max_substeps {
            self.accumulator -= self.dt;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.dt {
            log::debug!("Frame clock dropping {:.3}s of backlog", self.accumulator);
            self.accumulator %= self.dt;
        }
        ticks
    }

    /// Time left before the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        Duration::from_secs_f32((self.dt - self.accumulator).max(0.0))
    }

    /// Forget accumulated time (e.g. after a restart)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
