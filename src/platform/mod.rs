//! Platform abstraction layer
//!
//! Handles the host-facing edges of the game loop:
//! - Time/ticks (fixed-timestep frame clock)
//! - Input events (terminal keys and resizes to abstract game input)

pub mod input;
pub mod time;

pub use input::{InputOptions, translate};
pub use time::FrameClock;
