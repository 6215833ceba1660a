//! Axis-aligned scene bounds.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned extent of the loaded scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneBounds {
    /// Minimum corner of the bounds.
    pub min: Vec3,
    /// Maximum corner of the bounds.
    pub max: Vec3,
}

impl SceneBounds {
    /// Creates bounds from min and max corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates empty (inverted) bounds.
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Creates bounds that contain all given points.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut bounds = Self::empty();
        for point in points {
            bounds = bounds.expand_to_include(point);
        }
        bounds
    }

    /// Returns new bounds expanded to include the given point.
    pub fn expand_to_include(&self, point: Vec3) -> SceneBounds {
        SceneBounds {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns the center of the bounds.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the size (full extents) of the bounds.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the half-extents of the bounds.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Returns the length of the largest axis.
    pub fn max_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Returns true if the bounds contain the given point.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Returns true if the bounds are valid (min <= max component-wise).
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_center() {
        let bounds = SceneBounds::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.center(), Vec3::ZERO);
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = SceneBounds::from_points([
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(-2.0, 3.0, 0.5),
            Vec3::new(0.0, -1.0, 2.0),
        ]);
        assert_eq!(bounds.min, Vec3::new(-2.0, -1.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_bounds_contains_point() {
        let bounds = SceneBounds::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(bounds.contains_point(Vec3::ZERO));
        assert!(bounds.contains_point(Vec3::new(0.5, 0.5, 0.5)));
        assert!(!bounds.contains_point(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_bounds_max_dimension() {
        let bounds = SceneBounds::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 5.0, 1.0));
        assert_eq!(bounds.max_dimension(), 5.0);
    }

    #[test]
    fn test_empty_bounds_invalid() {
        assert!(!SceneBounds::empty().is_valid());
    }
}
