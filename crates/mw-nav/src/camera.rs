//! Camera pose for the walkthrough viewer.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use mw_core::SceneBounds;

/// Camera uniform buffer data, handed to the render collaborator.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
    /// Camera position in world space (w = 1).
    pub eye: [f32; 4],
}

/// Snapshot of the camera taken before entering a navigation mode,
/// restored exactly on exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavedView {
    /// Camera position at capture time.
    pub position: Vec3,
    /// Look target at capture time.
    pub target: Vec3,
    /// Vertical field of view in degrees at capture time.
    pub fov_y_deg: f32,
}

/// The camera's observable state.
///
/// Position and look target fully determine the view transform; every
/// navigation mode commits its result here once per tick and the
/// renderer reads it back as matrices or a [`CameraUniform`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector (world vertical).
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Camera {
    /// Creates a camera with the viewer's default parameters.
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y_deg: 50.0,
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Update aspect ratio
    pub fn update_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Returns the normalized look direction.
    pub fn look_direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Captures the current pose for later restoration.
    pub fn save_view(&self) -> SavedView {
        SavedView {
            position: self.position,
            target: self.target,
            fov_y_deg: self.fov_y_deg,
        }
    }

    /// Restores a previously captured pose exactly.
    pub fn restore_view(&mut self, view: &SavedView) {
        self.position = view.position;
        self.target = view.target;
        self.fov_y_deg = view.fov_y_deg;
    }

    /// Positions the camera so the given bounds fill the view.
    ///
    /// Places the eye above and behind the scene center, at a distance
    /// derived from the field of view, and aims at the center.
    pub fn fit_to_bounds(&mut self, bounds: &SceneBounds) {
        let center = bounds.center();
        let max_dim = bounds.max_dimension();
        let half_fov = self.fov_y_deg.to_radians() * 0.5;
        let distance = (max_dim / (2.0 * half_fov.tan())).abs() * 2.0;

        self.position = center + Vec3::new(0.0, max_dim * 0.5, distance);
        self.target = center;
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get camera uniform data
    pub fn uniform(&self) -> CameraUniform {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        let view_proj = proj * view;

        CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            eye: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}
