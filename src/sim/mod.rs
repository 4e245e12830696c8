//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Fixed per-tick increments only
//! - Seeded RNG only
//! - Side effects are reported as events, never performed
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use obstacles::{ObstacleField, ObstaclePair};
pub use rect::Rect;
pub use score::ScoreTracker;
pub use state::{Actor, GameEvent, GameMode, GameState, Snapshot};
pub use tick::{InputEvent, apply_input, tick};
