//! Triangle mesh data and ray queries for collision tests.

use glam::Vec3;

/// Hits closer than this along the ray are ignored, so a point lying
/// exactly on a face does not count its own surface.
const RAY_EPSILON: f32 = 1e-6;

/// Mesh-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum MeshError {
    #[error("Empty mesh: no geometry found")]
    EmptyMesh,
    #[error("Invalid indices: {0}")]
    InvalidIndices(String),
}

/// A static, world-space triangle mesh used for collision queries.
///
/// Navigation code never mutates the mesh; it is supplied once by the
/// loader and queried read-only. The inside/outside parity test is only
/// meaningful for closed, manifold, non-self-intersecting geometry;
/// that is a precondition on the loaded data, not something checked here.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) indices: Vec<u32>,
}

impl TriangleMesh {
    /// Creates a mesh from vertex positions and triangle indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if positions.is_empty() || indices.is_empty() {
            return Err(MeshError::EmptyMesh);
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::InvalidIndices(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(MeshError::InvalidIndices(format!(
                "index {} out of range for {} vertices",
                bad,
                positions.len()
            )));
        }
        Ok(Self { positions, indices })
    }

    /// Returns the vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.positions[tri[0] as usize],
                self.positions[tri[1] as usize],
                self.positions[tri[2] as usize],
            ]
        })
    }

    /// Returns the axis-aligned bounds of all vertices.
    pub fn bounding_box(&self) -> crate::SceneBounds {
        crate::SceneBounds::from_points(self.positions.iter().copied())
    }

    /// Counts intersections of a ray with the mesh surface.
    ///
    /// Brute-force Möller–Trumbore over every triangle, O(triangle count)
    /// per call. Both triangle windings are counted since the parity test
    /// does not care about facing.
    pub fn ray_intersection_count(&self, origin: Vec3, dir: Vec3) -> usize {
        self.triangles()
            .filter(|tri| ray_triangle_intersection(origin, dir, tri).is_some())
            .count()
    }

    /// Applies `point -> point * scale + offset` to every vertex.
    pub(crate) fn transform_vertices(&mut self, scale: f32, offset: Vec3) {
        for p in &mut self.positions {
            *p = *p * scale + offset;
        }
    }
}

/// Ray-triangle intersection test (Möller–Trumbore).
///
/// Returns the ray parameter `t` at the hit point, or `None` if the ray
/// misses the triangle or hits it behind the origin.
pub fn ray_triangle_intersection(origin: Vec3, dir: Vec3, triangle: &[Vec3; 3]) -> Option<f32> {
    let edge1 = triangle[1] - triangle[0];
    let edge2 = triangle[2] - triangle[0];

    let pvec = dir.cross(edge2);
    let det = edge1.dot(pvec);

    // Ray parallel to the triangle plane (either winding).
    if det.abs() < RAY_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = origin - triangle[0];
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    if t > RAY_EPSILON { Some(t) } else { None }
}
