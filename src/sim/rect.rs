//! Axis-aligned rectangle geometry for the actor and barriers
//!
//! Screen convention: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box defined by its top-left corner and extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Inclusive overlap test: boxes that share an edge intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Whether a point lies inside (half-open on the right/bottom edges)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}
