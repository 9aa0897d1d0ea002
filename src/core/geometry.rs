//! Screen-space geometry: points, rectangles and the overlap tests used by
//! hit testing and drop resolution.
//!
//! Coordinates are pixels with the origin at the top-left corner and `y`
//! growing downwards, matching what the rendering collaborator draws.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point or offset in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.origin.x < other.origin.x + other.size.x
            && self.origin.x + self.size.x > other.origin.x
            && self.origin.y < other.origin.y + other.size.y
            && self.origin.y + self.size.y > other.origin.y
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.x
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.y
    }
}
