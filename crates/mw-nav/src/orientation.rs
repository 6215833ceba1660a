//! Look-direction smoothing and device-orientation math.

use glam::{EulerRot, Quat, Vec3};

use crate::input::DeviceOrientationSample;

/// Smoothing state for the first-person look direction.
///
/// Raw pointer deltas move the *target* yaw/pitch; each tick the current
/// angles are pulled toward the targets by the smoothing factor. The
/// lerp is exponential-decay style and deliberately not scaled by
/// elapsed time, reproducing the reference behavior; at very low frame
/// rates the look feel becomes stiffer. Pitch is clamped to
/// `[0, pitch_clamp]`, where positive pitch looks down, so the camera can
/// never look above level. That restriction is intentional.
#[derive(Debug, Clone)]
pub struct OrientationState {
    current_yaw: f32,
    current_pitch: f32,
    target_yaw: f32,
    target_pitch: f32,
    pitch_clamp: f32,
    smoothing: f32,
    sensitivity: f32,
}

impl OrientationState {
    /// Creates smoothing state from config values.
    ///
    /// `smoothing` is clamped into (0, 1]; `pitch_clamp` is in radians.
    pub fn new(sensitivity: f32, smoothing: f32, pitch_clamp: f32) -> Self {
        Self {
            current_yaw: 0.0,
            current_pitch: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            pitch_clamp: pitch_clamp.max(0.0),
            smoothing: smoothing.clamp(f32::EPSILON, 1.0),
            sensitivity,
        }
    }

    /// Applies a raw pointer-motion delta to the target angles.
    pub fn apply_look_delta(&mut self, dx: f32, dy: f32) {
        self.target_yaw -= dx * self.sensitivity;
        self.target_pitch = (self.target_pitch - dy * self.sensitivity).clamp(0.0, self.pitch_clamp);
    }

    /// Advances the current angles toward the targets by one tick.
    pub fn tick(&mut self) {
        self.current_yaw += (self.target_yaw - self.current_yaw) * self.smoothing;
        self.current_pitch += (self.target_pitch - self.current_pitch) * self.smoothing;
        // Interpolation can momentarily carry old state past the limit.
        self.current_pitch = self.current_pitch.clamp(0.0, self.pitch_clamp);
    }

    /// Snaps current and target angles to the given facing.
    ///
    /// Used on first-person entry so the look direction starts at the
    /// camera's current orientation instead of jumping.
    pub fn reset_to(&mut self, yaw: f32, pitch: f32) {
        let pitch = pitch.clamp(0.0, self.pitch_clamp);
        self.current_yaw = yaw;
        self.current_pitch = pitch;
        self.target_yaw = yaw;
        self.target_pitch = pitch;
    }

    /// Returns the smoothed unit look direction.
    ///
    /// Yaw rotates about the vertical axis and is applied after pitch
    /// about the local horizontal axis, so pitch never introduces roll.
    /// Yaw 0 / pitch 0 looks down negative Z.
    pub fn look_direction(&self) -> Vec3 {
        let (sy, cy) = self.current_yaw.sin_cos();
        let (sp, cp) = self.current_pitch.sin_cos();
        Vec3::new(-sy * cp, -sp, -cy * cp)
    }

    /// Returns the smoothed yaw and pitch in radians.
    pub fn angles(&self) -> (f32, f32) {
        (self.current_yaw, self.current_pitch)
    }

    /// Returns the target yaw and pitch in radians.
    pub fn target_angles(&self) -> (f32, f32) {
        (self.target_yaw, self.target_pitch)
    }

    /// Yaw wrapped to [0, 360) degrees for the debug readout.
    pub fn yaw_degrees(&self) -> f32 {
        self.current_yaw.to_degrees().rem_euclid(360.0)
    }

    /// Pitch in degrees for the debug readout.
    pub fn pitch_degrees(&self) -> f32 {
        self.current_pitch.to_degrees()
    }
}

/// Extracts yaw and pitch from a unit look direction.
///
/// Inverse of [`OrientationState::look_direction`]; the pitch sign
/// convention (positive looks down) matches.
pub fn facing_angles(dir: Vec3) -> (f32, f32) {
    let pitch = (-dir.y).clamp(-1.0, 1.0).asin();
    let yaw = (-dir.x).atan2(-dir.z);
    (yaw, pitch)
}

/// Derives the camera orientation for device-look mode.
///
/// Maps the raw alpha/beta/gamma sample straight to a quaternion,
/// compensating for the physical screen rotation. Unlike first-person
/// look there is no smoothing here: the orientation is set directly
/// each tick. That asymmetry is deliberate: tilt sensors already
/// deliver absolute, continuous angles.
pub fn device_look_orientation(sample: &DeviceOrientationSample, screen_rotation_deg: f32) -> Quat {
    let alpha = sample.alpha_deg.to_radians();
    let beta = sample.beta_deg.to_radians();
    let gamma = sample.gamma_deg.to_radians();
    let screen = screen_rotation_deg.to_radians();

    let device = Quat::from_euler(EulerRot::YXZ, alpha, beta, -gamma);
    device * Quat::from_rotation_z(-screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> OrientationState {
        OrientationState::new(0.002, 0.1, 85.0_f32.to_radians())
    }

    #[test]
    fn test_pitch_clamped_after_every_step() {
        let mut o = state();
        // Drag hard past level (positive dy drives the target below 0).
        for _ in 0..200 {
            o.apply_look_delta(3.0, 900.0);
            o.tick();
            let (_, pitch) = o.angles();
            let (_, target_pitch) = o.target_angles();
            assert!((0.0..=85.0_f32.to_radians() + 1e-6).contains(&pitch));
            assert!((0.0..=85.0_f32.to_radians() + 1e-6).contains(&target_pitch));
        }
        // And hard the other way, past the downward clamp.
        for _ in 0..200 {
            o.apply_look_delta(-3.0, -900.0);
            o.tick();
            let (_, pitch) = o.angles();
            assert!(pitch >= 0.0);
        }
    }

    #[test]
    fn test_smoothing_converges_to_target() {
        let mut o = state();
        o.apply_look_delta(500.0, 100.0);
        let (target_yaw, target_pitch) = o.target_angles();
        for _ in 0..400 {
            o.tick();
        }
        let (yaw, pitch) = o.angles();
        assert!((yaw - target_yaw).abs() < 1e-4);
        assert!((pitch - target_pitch).abs() < 1e-4);
    }

    #[test]
    fn test_look_direction_is_unit_and_rolls_nothing() {
        let mut o = state();
        o.reset_to(1.3, 0.7);
        let dir = o.look_direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        // Positive pitch looks down.
        assert!(dir.y < 0.0);
    }

    #[test]
    fn test_facing_angles_round_trip() {
        let mut o = state();
        o.reset_to(2.1, 0.45);
        let (yaw, pitch) = facing_angles(o.look_direction());
        assert!((yaw - 2.1).abs() < 1e-4);
        assert!((pitch - 0.45).abs() < 1e-4);
    }

    #[test]
    fn test_yaw_degrees_wraps() {
        let mut o = state();
        o.reset_to(-0.5, 0.0);
        let deg = o.yaw_degrees();
        assert!((0.0..360.0).contains(&deg));
        assert!((deg - (360.0 - 0.5_f32.to_degrees())).abs() < 1e-3);
    }

    #[test]
    fn test_device_orientation_is_direct() {
        let sample = DeviceOrientationSample {
            alpha_deg: 30.0,
            beta_deg: 45.0,
            gamma_deg: -10.0,
        };
        // Same sample, same quaternion: no interpolation state involved.
        let a = device_look_orientation(&sample, 0.0);
        let b = device_look_orientation(&sample, 0.0);
        assert_eq!(a, b);
        assert!((a.length() - 1.0).abs() < 1e-5);

        // Screen rotation changes the result.
        let rotated = device_look_orientation(&sample, 90.0);
        assert!(a.dot(rotated).abs() < 1.0 - 1e-4);
    }
}
