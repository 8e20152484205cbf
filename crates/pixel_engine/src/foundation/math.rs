//! Math utilities and types
//!
//! Provides the fundamental math types for 2D game development.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned bounding box in world space
///
/// Uses screen coordinates: +x is right, +y is down, so `min` is the
/// top-left corner and `max` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,

    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    /// Create a box from explicit corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a box from a top-left position and a size
    pub fn from_position_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Center point of the box
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Width of the box
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the box
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Test overlap with another box (shared edges count as overlap)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Test whether `other` lies entirely inside this box
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
    }

    /// Test whether a point lies inside this box
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_position_size() {
        let aabb = Aabb::from_position_size(10.0, 20.0, 30.0, 40.0);
        assert_eq!(aabb.min, Vec2::new(10.0, 20.0));
        assert_eq!(aabb.max, Vec2::new(40.0, 60.0));
        assert_eq!(aabb.width(), 30.0);
        assert_eq!(aabb.height(), 40.0);
        assert_eq!(aabb.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::from_position_size(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_position_size(5.0, 5.0, 10.0, 10.0);
        let c = Aabb::from_position_size(20.0, 20.0, 5.0, 5.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));

        // Shared edge counts as overlap
        let d = Aabb::from_position_size(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&d));
    }

    #[test]
    fn test_contains() {
        let outer = Aabb::from_position_size(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::from_position_size(25.0, 25.0, 50.0, 50.0);
        let straddling = Aabb::from_position_size(90.0, 90.0, 20.0, 20.0);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&straddling));
        assert!(outer.intersects(&straddling));
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb::from_position_size(0.0, 0.0, 10.0, 10.0);
        assert!(aabb.contains_point(Vec2::new(5.0, 5.0)));
        assert!(aabb.contains_point(Vec2::new(0.0, 10.0)));
        assert!(!aabb.contains_point(Vec2::new(11.0, 5.0)));
    }
}
