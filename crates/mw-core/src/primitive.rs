//! Procedural room mesh generation.

use glam::Vec3;

use crate::TriangleMesh;

/// Generates a closed rectangular room centered at the origin.
///
/// # Arguments
/// * `size` - full extents [width (x), height (y), depth (z)]
///
/// The box is closed and manifold, so the ray-parity inside/outside test
/// is well defined on it. Vertices are shared between faces; the mesh is
/// meant for collision queries and tests, not shading.
pub fn generate_room_mesh(size: Vec3) -> TriangleMesh {
    let h = size * 0.5;

    let positions = vec![
        Vec3::new(-h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
    ];

    // Two triangles per face, outward winding.
    let indices = vec![
        0, 2, 1, 0, 3, 2, // -Z
        4, 5, 6, 4, 6, 7, // +Z
        0, 4, 7, 0, 7, 3, // -X
        1, 2, 6, 1, 6, 5, // +X
        3, 7, 6, 3, 6, 2, // +Y
        0, 1, 5, 0, 5, 4, // -Y
    ];

    TriangleMesh { positions, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_mesh_is_closed_box() {
        let mesh = generate_room_mesh(Vec3::new(4.0, 2.0, 6.0));
        assert_eq!(mesh.triangle_count(), 12);

        let bounds = mesh.bounding_box();
        assert_eq!(bounds.min, Vec3::new(-2.0, -1.0, -3.0));
        assert_eq!(bounds.max, Vec3::new(2.0, 1.0, 3.0));
    }
}
