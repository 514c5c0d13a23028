//! Axis-aligned bounding boxes
//!
//! Sprites are centered on their position, so a sprite's box spans
//! `position ± displayed_size / 2`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in scene space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of the given size centered on `center`
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether the box has positive area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Rectangle-to-rectangle overlap test.
    ///
    /// Edges are inclusive: boxes that merely touch overlap. Empty boxes
    /// never overlap anything.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        !(self.max.x < other.min.x
            || self.max.y < other.min.y
            || self.min.x > other.max.x
            || self.min.y > other.max.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let b = Aabb::from_center(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(b.min, Vec2::new(8.0, 17.0));
        assert_eq!(b.max, Vec2::new(12.0, 23.0));
        assert_eq!(b.width(), 4.0);
        assert_eq!(b.height(), 6.0);
    }

    #[test]
    fn test_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_separated() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let right = Aabb::new(Vec2::new(10.5, 0.0), Vec2::new(20.0, 10.0));
        let below = Aabb::new(Vec2::new(0.0, 11.0), Vec2::new(10.0, 20.0));
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_empty_box_never_overlaps() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let flat = Aabb::new(Vec2::new(2.0, 2.0), Vec2::new(8.0, 2.0));
        assert!(flat.is_empty());
        assert!(!a.intersects(&flat));
        assert!(!flat.intersects(&a));
    }
}
