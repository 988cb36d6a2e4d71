//! Axis-aligned bounding boxes for player/obstacle overlap tests

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        let half = half.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Overlap test; touching faces count as intersecting
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_corners() {
        let aabb = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 5.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, 3.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 5.0));
    }

    #[test]
    fn test_center_and_size() {
        let aabb = Aabb::from_center_size(Vec3::new(0.0, -5.1, 0.0), Vec3::new(22.0, 10.0, 32.0));
        assert!(aabb.center().abs_diff_eq(Vec3::new(0.0, -5.1, 0.0), 1e-5));
        assert!(aabb.size().abs_diff_eq(Vec3::new(22.0, 10.0, 32.0), 1e-5));
        assert!(aabb.half_extents().abs_diff_eq(Vec3::new(11.0, 5.0, 16.0), 1e-5));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let overlapping = Aabb::from_center_half_extents(Vec3::new(1.5, 0.0, 0.0), Vec3::ONE);
        let touching = Aabb::from_center_half_extents(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE);
        let apart = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 2.5), Vec3::ONE);

        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_thin_wall_still_intersects() {
        let wall = Aabb::from_center_size(Vec3::new(0.0, 15.0, -50.0), Vec3::new(100.0, 50.0, 0.001));
        let player = Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, -49.5), Vec3::new(1.0, 10.0, 1.0));
        assert!(player.intersects(&wall));
    }

    #[test]
    fn test_contains_point() {
        let a = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        assert!(a.contains_point(Vec3::new(0.5, -0.5, 1.0)));
        assert!(!a.contains_point(Vec3::new(0.5, -1.5, 0.0)));
    }
}
