//! Movement intent and displacement integration.

use glam::{Vec2, Vec3};

use crate::input::MoveKey;

/// Per-tick movement intent from keyboard and joystick.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementInput {
    /// Forward key held.
    pub forward: bool,
    /// Backward key held.
    pub backward: bool,
    /// Strafe-left key held.
    pub strafe_left: bool,
    /// Strafe-right key held.
    pub strafe_right: bool,
    /// Joystick deflection, components in [-1, 1]. x is rightward,
    /// y is forward.
    pub joystick: Vec2,
}

impl MovementInput {
    /// Updates a keyboard flag.
    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Forward => self.forward = pressed,
            MoveKey::Backward => self.backward = pressed,
            MoveKey::StrafeLeft => self.strafe_left = pressed,
            MoveKey::StrafeRight => self.strafe_right = pressed,
        }
    }

    /// Sets the joystick vector, clamping each component to magnitude 1.
    pub fn set_joystick(&mut self, x: f32, y: f32) {
        self.joystick = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
    }

    /// Zeroes the joystick vector (joystick end event).
    pub fn end_joystick(&mut self) {
        self.joystick = Vec2::ZERO;
    }

    /// Clears all movement intent. Called on mode exit so stale keys do
    /// not keep the camera drifting after re-entry.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if any key or the joystick is active.
    pub fn is_active(&self) -> bool {
        self.forward
            || self.backward
            || self.strafe_left
            || self.strafe_right
            || self.joystick != Vec2::ZERO
    }
}

/// Combines keyboard and joystick intent into one unit direction.
///
/// The basis is derived from the look direction: forward is the look
/// direction with its vertical component zeroed and renormalized, right
/// is `forward x up`. Keyboard flags add or subtract basis vectors and
/// the keyboard sum is normalized on its own before the joystick
/// contribution is added; the combined sum is normalized again if
/// non-zero. Zero intent yields exactly `Vec3::ZERO`.
pub fn movement_direction(look_dir: Vec3, input: &MovementInput) -> Vec3 {
    let forward = Vec3::new(look_dir.x, 0.0, look_dir.z).normalize_or_zero();
    let right = forward.cross(Vec3::Y).normalize_or_zero();

    let mut keyboard = Vec3::ZERO;
    if input.forward {
        keyboard += forward;
    }
    if input.backward {
        keyboard -= forward;
    }
    if input.strafe_left {
        keyboard -= right;
    }
    if input.strafe_right {
        keyboard += right;
    }
    keyboard = keyboard.normalize_or_zero();

    let joystick = forward * input.joystick.y + right * input.joystick.x;

    (keyboard + joystick).normalize_or_zero()
}

/// Computes the candidate position for one tick of movement.
///
/// The displacement is the combined direction scaled by `move_speed`
/// (world units per second) and the elapsed time; afterward the
/// vertical coordinate is forced to `ground_level + eye_height`.
/// Movement is confined to a horizontal plane at a fixed eye height:
/// no flight, no jumping.
pub fn candidate_position(
    position: Vec3,
    look_dir: Vec3,
    input: &MovementInput,
    move_speed: f32,
    dt: f32,
    ground_level: f32,
    eye_height: f32,
) -> Vec3 {
    let direction = movement_direction(look_dir, input);
    let mut candidate = position + direction * move_speed * dt;
    candidate.y = ground_level + eye_height;
    candidate
}
