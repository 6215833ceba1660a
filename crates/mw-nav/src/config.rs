//! Navigation configuration structures
//!
//! This module provides configurable settings for camera navigation that
//! can be serialized and loaded from configuration files.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collision::CollisionPolicy;

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the configuration file.
    #[error("IO error: {0}")]
    Io(String),
    /// Could not parse the configuration file.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Camera navigation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavConfig {
    /// Pointer sensitivity: radians per capture unit of pointer motion.
    pub mouse_sensitivity: f32,
    /// Orientation smoothing factor per tick, in (0, 1].
    pub smoothing: f32,
    /// Maximum downward pitch in degrees.
    pub pitch_clamp_deg: f32,
    /// First-person move speed in world units per second.
    pub move_speed: f32,
    /// Camera height above the ground plane while walking.
    pub eye_height: f32,
    /// Ground plane height of the normalized scene.
    pub ground_level: f32,
    /// Wider field of view used while walking, in degrees.
    pub first_person_fov_deg: f32,
    /// First-person start position relative to the scene center.
    pub start_offset: Vec3,
    /// Padding margin for the boundary clamp, in world units.
    pub boundary_padding: f32,
    /// Distance of the debug look-at marker from the camera.
    pub look_distance: f32,
    /// Largest scene dimension after normalization.
    pub scene_target_size: f32,
    /// Which admissibility test gates movement.
    pub collision_policy: CollisionPolicy,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.002,
            smoothing: 0.1,
            pitch_clamp_deg: 85.0,
            // 0.02 units per frame at the 60 Hz reference rate.
            move_speed: 1.2,
            eye_height: 0.1,
            ground_level: 0.0,
            first_person_fov_deg: 75.0,
            start_offset: Vec3::new(-1.0, 0.1, -1.0),
            boundary_padding: 0.5,
            look_distance: 2.0,
            scene_target_size: 5.0,
            collision_policy: CollisionPolicy::MeshParity,
        }
    }
}

impl NavConfig {
    /// Returns the pitch clamp in radians.
    pub fn pitch_clamp(&self) -> f32 {
        self.pitch_clamp_deg.to_radians()
    }

    /// Loads a configuration from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        ron::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serializes the configuration to a RON string.
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
