//! Flappy - a side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (physics, obstacles, collisions, scoring, modes)
//! - `game`: Session context wiring the simulation to its collaborators
//! - `renderer`: Terminal presentation of a read-only snapshot
//! - `platform`: Frame clock and input event mapping
//! - `persistence`: Best score storage
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per frame at target rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default world dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Smallest world the obstacle band still fits in
    pub const MIN_WORLD_WIDTH: f32 = 200.0;
    pub const MIN_WORLD_HEIGHT: f32 = 300.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 100.0;
    pub const ACTOR_WIDTH: f32 = 40.0;
    pub const ACTOR_HEIGHT: f32 = 30.0;

    /// Per-tick velocity increase (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (pixels/tick, negative is up)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;
    pub const PIPE_SPEED: f32 = 3.0;
    /// Ticks between obstacle spawns
    pub const SPAWN_INTERVAL_TICKS: u32 = 90;
    /// Minimum height of the top barrier
    pub const GAP_TOP_MARGIN: f32 = 100.0;
    /// The gap's top edge stays at least this far above the world bottom
    pub const GAP_BOTTOM_MARGIN: f32 = 200.0;
}
