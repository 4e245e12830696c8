//! Obstacle pairs and the manager that spawns, moves and prunes them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{GAP_BOTTOM_MARGIN, GAP_TOP_MARGIN};
use crate::tuning::Tuning;

/// A top and bottom barrier sharing one x and one gap window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Leading (left) edge of both barriers
    pub x: f32,
    /// Barrier width
    pub width: f32,
    /// y of the gap's top edge (= height of the top barrier)
    pub gap_top: f32,
    /// Height of the opening
    pub gap_height: f32,
    /// Height of the bottom barrier (world height at spawn)
    pub floor: f32,
    /// Set once the pair has been counted toward the session score
    #[serde(default)]
    pub scored: bool,
}

impl ObstaclePair {
    pub fn new(x: f32, width: f32, gap_top: f32, gap_height: f32, floor: f32) -> Self {
        Self {
            x,
            width,
            gap_top,
            gap_height,
            floor,
            scored: false,
        }
    }

    /// Upper barrier, from the world top down to the gap
    pub fn top(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top)
    }

    /// Lower barrier, from the gap bottom downward
    pub fn bottom(&self) -> Rect {
        Rect::new(self.x, self.gap_top + self.gap_height, self.width, self.floor)
    }

    /// Both barriers, top first
    pub fn barriers(&self) -> [Rect; 2] {
        [self.top(), self.bottom()]
    }

    /// Trailing edge
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Fully past the left world boundary
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() <= 0.0
    }
}

/// Range of valid gap positions for a world height, inclusive
///
/// Collapses to the lower bound when the world is too short for the band.
pub fn gap_band(world_height: f32) -> (i32, i32) {
    let lo = GAP_TOP_MARGIN as i32;
    let hi = ((world_height - GAP_BOTTOM_MARGIN) as i32).max(lo);
    (lo, hi)
}

/// Owns all live obstacle pairs in spawn order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    pairs: Vec<ObstaclePair>,
    /// Active ticks since the last spawn
    countdown: u32,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live pairs, oldest (leftmost) first
    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut [ObstaclePair] {
        &mut self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Ticks counted toward the next spawn
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Count one active tick; spawn a pair at the right edge when the interval elapses
    ///
    /// Returns true if a pair was appended this tick.
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, world: Vec2, tuning: &Tuning) -> bool {
        self.countdown += 1;
        if self.countdown < tuning.spawn_interval_ticks {
            return false;
        }
        self.countdown = 0;

        let (lo, hi) = gap_band(world.y);
        let gap_top = rng.random_range(lo..=hi) as f32;
        self.pairs.push(ObstaclePair::new(
            world.x,
            tuning.pipe_width,
            gap_top,
            tuning.pipe_gap,
            world.y,
        ));
        log::debug!("Spawned obstacle at x={} gap_top={}", world.x, gap_top);
        true
    }

    /// Move every pair left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for pair in &mut self.pairs {
            pair.x -= speed;
        }
    }

    /// Drop pairs whose trailing edge has reached the left boundary
    ///
    /// Returns the number of pairs removed.
    pub fn prune(&mut self) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|p| !p.is_offscreen());
        let removed = before - self.pairs.len();
        if removed > 0 {
            log::debug!("Pruned {} obstacle(s), {} live", removed, self.pairs.len());
        }
        removed
    }

    /// Remove every pair and restart the spawn countdown
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.countdown = 0;
    }

    /// All barrier rectangles (two per pair)
    pub fn barriers(&self) -> impl Iterator<Item = Rect> + '_ {
        self.pairs.iter().flat_map(|p| p.barriers())
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, pair: ObstaclePair) {
        self.pairs.push(pair);
    }
}
