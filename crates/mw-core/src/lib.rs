//! Scene geometry for the modelwalk viewer
//!
//! Pure data and math shared by navigation and the frontend: triangle
//! meshes, axis-aligned bounds, scene normalization, and procedural test
//! geometry. Nothing in this crate touches the GPU or the windowing layer.

pub mod bounds;
pub mod mesh;
pub mod normalize;
pub mod primitive;

pub use bounds::SceneBounds;
pub use mesh::{MeshError, TriangleMesh};
pub use normalize::{SceneError, normalize_scene};
pub use primitive::generate_room_mesh;
