//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! settings file only needs to name the values it wants to change.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and obstacle parameters used by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Velocity added every active tick
    pub gravity: f32,
    /// Velocity a flap sets (negative is up)
    pub jump_velocity: f32,
    /// Horizontal distance obstacles travel per tick
    pub pipe_speed: f32,
    /// Vertical opening between top and bottom barrier
    pub pipe_gap: f32,
    /// Barrier width
    pub pipe_width: f32,
    /// Ticks between spawns
    pub spawn_interval_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
        }
    }
}

impl Tuning {
    /// Clamp values that would stall or break the simulation
    pub fn sanitized(mut self) -> Self {
        if self.spawn_interval_ticks == 0 {
            log::warn!("spawn_interval_ticks must be positive, using default");
            self.spawn_interval_ticks = SPAWN_INTERVAL_TICKS;
        }
        if !(self.pipe_speed > 0.0) {
            log::warn!("pipe_speed must be positive, using default");
            self.pipe_speed = PIPE_SPEED;
        }
        if !(self.pipe_width > 0.0) {
            self.pipe_width = PIPE_WIDTH;
        }
        if !(self.pipe_gap > 0.0) {
            self.pipe_gap = PIPE_GAP;
        }
        self
    }
}
