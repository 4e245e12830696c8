//! Game state and core simulation types
//!
//! One owned session context. Nothing in the simulation reaches for globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacles::{ObstacleField, ObstaclePair};
use super::rect::Rect;
use super::score::ScoreTracker;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for start input
    #[default]
    Idle,
    /// Simulation running
    Active,
    /// Simulation frozen mid-session
    Paused,
    /// Session ended by a collision
    Over,
}

impl GameMode {
    /// Whether the simulation advances in this mode
    pub fn is_simulating(&self) -> bool {
        matches!(self, GameMode::Active)
    }
}

/// Things that happened during input handling or a tick
///
/// Collaborators (audio, persistence, presentation) react to these; the
/// simulation never calls them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Idle -> Active
    Started,
    /// Flap impulse applied
    Jumped,
    /// A pair was passed, carries the new session score
    Scored { score: u64 },
    /// Active -> Paused
    Paused,
    /// Paused -> Active
    Resumed,
    /// Active -> Over, score committed
    Crashed { score: u64, best: u64, new_best: bool },
    /// Over -> Idle, fresh session
    Reset,
}

/// The player-controlled falling entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Fixed horizontal position (left edge)
    pub x: f32,
    /// Vertical position (top edge)
    pub y: f32,
    /// Vertical velocity (pixels/tick, positive is down)
    pub vel: f32,
    /// Bounding box extent
    pub size: Vec2,
}

impl Actor {
    /// Actor at rest, vertically centered in the world
    pub fn new(world_height: f32) -> Self {
        Self {
            x: ACTOR_X,
            y: (world_height / 2.0).floor(),
            vel: 0.0,
            size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
        }
    }

    /// One tick of gravity: velocity first, then position
    #[inline]
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.y += self.vel;
    }

    /// Flap: overrides the current velocity
    #[inline]
    pub fn impulse(&mut self, jump_velocity: f32) {
        self.vel = jump_velocity;
    }

    /// Bounding box at the current position
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size.x, self.size.y)
    }
}

/// Read-only view handed to the presentation layer each frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub actor: Rect,
    pub obstacles: &'a [ObstaclePair],
    pub mode: GameMode,
    pub score: u64,
    pub best: u64,
    pub world: Vec2,
}

impl Snapshot<'_> {
    /// Every barrier rectangle, two per pair
    pub fn barriers(&self) -> impl Iterator<Item = Rect> + '_ {
        self.obstacles.iter().flat_map(|p| p.barriers())
    }
}

/// Complete session context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Current mode
    pub mode: GameMode,
    /// Player entity
    pub actor: Actor,
    /// Live obstacle pairs and spawn countdown
    pub obstacles: ObstacleField,
    /// Session and best score
    pub score: ScoreTracker,
    /// World width and height
    pub world: Vec2,
    /// Physics and obstacle parameters
    pub tuning: Tuning,
    /// Active ticks in the current session
    pub time_ticks: u64,
    /// Gap placement RNG
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh Idle state with the default world size
    pub fn new(seed: u64, tuning: Tuning, best: u64) -> Self {
        let world = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);
        Self {
            seed,
            mode: GameMode::Idle,
            actor: Actor::new(world.y),
            obstacles: ObstacleField::new(),
            score: ScoreTracker::new(best),
            world,
            tuning: tuning.sanitized(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Back to Idle with a fresh actor, no obstacles and a zero session score
    ///
    /// The best score and RNG stream carry over.
    pub fn reset_session(&mut self) {
        self.mode = GameMode::Idle;
        self.actor = Actor::new(self.world.y);
        self.obstacles.clear();
        self.score.reset_session();
        self.time_ticks = 0;
    }

    /// Update world dimensions, clamped to the smallest playable size
    pub fn resize(&mut self, width: f32, height: f32) {
        let world = Vec2::new(width.max(MIN_WORLD_WIDTH), height.max(MIN_WORLD_HEIGHT));
        if world != self.world {
            log::info!("World resized to {}x{}", world.x, world.y);
            self.world = world;
            // Keep the waiting actor centered while on the title screen
            if self.mode == GameMode::Idle {
                self.actor = Actor::new(world.y);
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            actor: self.actor.bounds(),
            obstacles: self.obstacles.pairs(),
            mode: self.mode,
            score: self.score.session(),
            best: self.score.best(),
            world: self.world,
        }
    }
}
