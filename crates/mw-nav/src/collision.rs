//! Admissibility tests for proposed camera displacements.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use mw_core::{SceneBounds, TriangleMesh};

/// Which admissibility test gates first-person movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// Ray-parity inside/outside test against the loaded mesh
    /// (reference behavior).
    #[default]
    MeshParity,
    /// Padded axis-aligned bounds check only.
    Bounds,
}

/// Classifies a point as inside the mesh using the ray-parity test.
///
/// Casts a single ray in +X and counts surface intersections; an odd
/// count means inside. Only meaningful for closed, manifold,
/// non-self-intersecting meshes; behavior on open or self-intersecting
/// geometry is undefined and must be treated as a precondition on the
/// loaded data.
pub fn point_inside_mesh(point: Vec3, mesh: &TriangleMesh) -> bool {
    mesh.ray_intersection_count(point, Vec3::X) % 2 == 1
}

/// Decides whether a displacement from `current` to `candidate` is
/// admissible.
///
/// The move is accepted only if both endpoints classify to the same
/// side of the surface: the camera may roam freely while staying on the
/// side it started on, but can never pop through solid geometry. Two
/// O(triangle count) queries per call.
pub fn displacement_admissible(current: Vec3, candidate: Vec3, mesh: &TriangleMesh) -> bool {
    point_inside_mesh(current, mesh) == point_inside_mesh(candidate, mesh)
}

/// Padded axis-aligned boundary test in the ground plane.
///
/// Simpler alternative to the ray-parity gate: the candidate's x/z must
/// fall within the scene bounds inflated by a fixed padding margin. A
/// rejected candidate discards the whole displacement for that tick.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryClamp {
    bounds: Option<SceneBounds>,
    padding: f32,
}

impl BoundaryClamp {
    /// Creates a clamp with the given padding margin, in world units.
    pub fn new(padding: f32) -> Self {
        Self {
            bounds: None,
            padding,
        }
    }

    /// Sets the scene bounds once the loader has delivered them.
    pub fn set_bounds(&mut self, bounds: SceneBounds) {
        self.bounds = Some(bounds);
    }

    /// Returns true if (x, z) lies within the padded rectangle.
    ///
    /// Trivially true while no scene has been loaded.
    pub fn is_within_bounds(&self, x: f32, z: f32) -> bool {
        let Some(bounds) = &self.bounds else {
            return true;
        };
        x >= bounds.min.x - self.padding
            && x <= bounds.max.x + self.padding
            && z >= bounds.min.z - self.padding
            && z <= bounds.max.z + self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mw_core::generate_room_mesh;

    #[test]
    fn test_parity_inside_and_outside_room() {
        let mesh = generate_room_mesh(Vec3::new(4.0, 4.0, 4.0));
        assert!(point_inside_mesh(Vec3::new(0.1, 0.2, 0.3), &mesh));
        assert!(!point_inside_mesh(Vec3::new(5.0, 0.2, 0.3), &mesh));
    }

    #[test]
    fn test_displacement_same_side_admitted() {
        let mesh = generate_room_mesh(Vec3::new(4.0, 4.0, 4.0));
        // Inside to inside.
        assert!(displacement_admissible(
            Vec3::new(0.1, 0.2, 0.3),
            Vec3::new(0.4, 0.2, 0.3),
            &mesh
        ));
        // Outside to outside.
        assert!(displacement_admissible(
            Vec3::new(5.0, 0.2, 0.3),
            Vec3::new(6.0, 0.2, 0.3),
            &mesh
        ));
    }

    #[test]
    fn test_displacement_crossing_surface_rejected() {
        let mesh = generate_room_mesh(Vec3::new(4.0, 4.0, 4.0));
        assert!(!displacement_admissible(
            Vec3::new(1.9, 0.2, 0.3),
            Vec3::new(2.1, 0.2, 0.3),
            &mesh
        ));
    }

    #[test]
    fn test_boundary_clamp_padded_rectangle() {
        let mut clamp = BoundaryClamp::new(0.5);
        clamp.set_bounds(SceneBounds::new(
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 3.0, 5.0),
        ));

        assert!(clamp.is_within_bounds(5.4, 0.0));
        assert!(!clamp.is_within_bounds(5.6, 0.0));
        assert!(clamp.is_within_bounds(0.0, -5.4));
        assert!(!clamp.is_within_bounds(0.0, -5.6));
    }

    #[test]
    fn test_boundary_clamp_trivially_passes_without_scene() {
        let clamp = BoundaryClamp::new(0.5);
        assert!(clamp.is_within_bounds(1000.0, -1000.0));
    }
}
