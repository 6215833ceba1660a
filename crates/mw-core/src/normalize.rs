//! Scene normalization after load.
//!
//! The loaded model is scaled to a known size, centered horizontally at
//! the origin, and rested on the ground plane, so navigation constants
//! (move speed, eye height, boundary padding) behave the same for every
//! model.

use glam::Vec3;

use crate::{SceneBounds, TriangleMesh};

/// Scene-level errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    #[error("Degenerate bounds: largest dimension is {0}, cannot normalize")]
    DegenerateBounds(f32),
}

/// Normalizes a mesh in place and returns its new bounds.
///
/// Uniformly scales the mesh so its largest dimension equals
/// `target_size`, centers it at the origin in x/z, and shifts it so it
/// rests on the ground plane (`min.y == 0`).
///
/// A mesh whose largest dimension is zero or non-finite is rejected
/// instead of producing an undefined scale factor.
pub fn normalize_scene(mesh: &mut TriangleMesh, target_size: f32) -> Result<SceneBounds, SceneError> {
    let bounds = mesh.bounding_box();
    let max_dim = bounds.max_dimension();
    if !max_dim.is_finite() || max_dim <= 0.0 {
        return Err(SceneError::DegenerateBounds(max_dim));
    }

    let scale = target_size / max_dim;
    let scaled_center = bounds.center() * scale;
    let scaled_min_y = bounds.min.y * scale;
    let offset = Vec3::new(-scaled_center.x, -scaled_min_y, -scaled_center.z);

    mesh.transform_vertices(scale, offset);
    Ok(mesh.bounding_box())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_room_mesh;

    #[test]
    fn test_normalize_scales_centers_and_grounds() {
        let mut mesh = generate_room_mesh(Vec3::new(10.0, 4.0, 2.0));
        // Push the mesh away from the origin first.
        mesh.transform_vertices(1.0, Vec3::new(7.0, 3.0, -2.0));

        let bounds = normalize_scene(&mut mesh, 5.0).expect("normalize");

        assert!((bounds.max_dimension() - 5.0).abs() < 1e-5);
        assert!(bounds.center().x.abs() < 1e-5);
        assert!(bounds.center().z.abs() < 1e-5);
        assert!(bounds.min.y.abs() < 1e-5);
    }

    #[test]
    fn test_normalize_rejects_degenerate_mesh() {
        // All vertices coincide: zero-size bounding box.
        let positions = vec![Vec3::ONE, Vec3::ONE, Vec3::ONE];
        let mut mesh = TriangleMesh::new(positions, vec![0, 1, 2]).expect("mesh");

        let result = normalize_scene(&mut mesh, 5.0);
        assert!(matches!(result, Err(SceneError::DegenerateBounds(_))));
    }
}
