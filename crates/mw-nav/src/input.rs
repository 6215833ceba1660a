//! Input adapter types.
//!
//! The controller consumes these small transport-agnostic events instead
//! of listening to any particular windowing or sensor API. Adapters for
//! pointer, keyboard, joystick, and device-orientation sources translate
//! their native events into this vocabulary and push them in. Events are
//! snapshots with last-write-wins semantics, not a queue: for continuous
//! navigation only the most recent intent matters.

use serde::{Deserialize, Serialize};

/// Discrete movement directions driven by key-down/key-up events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    /// Move toward the look direction.
    Forward,
    /// Move away from the look direction.
    Backward,
    /// Strafe left.
    StrafeLeft,
    /// Strafe right.
    StrafeRight,
}

/// A raw device-orientation sample in degrees.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DeviceOrientationSample {
    /// Rotation about the vertical axis (compass heading).
    pub alpha_deg: f32,
    /// Front-to-back tilt.
    pub beta_deg: f32,
    /// Left-to-right tilt.
    pub gamma_deg: f32,
}

/// Navigation input event, pushed by input adapters.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Relative pointer motion; only meaningful while exclusive capture
    /// is held.
    Look {
        /// Horizontal delta in capture units.
        dx: f32,
        /// Vertical delta in capture units.
        dy: f32,
    },
    /// A movement key changed state.
    Key {
        /// Which direction key.
        key: MoveKey,
        /// True on key-down, false on key-up.
        pressed: bool,
    },
    /// Joystick moved; components are normalized to magnitude <= 1.
    Joystick {
        /// Rightward deflection.
        x: f32,
        /// Forward deflection.
        y: f32,
    },
    /// Joystick released; zeroes the joystick vector.
    JoystickEnd,
    /// Latest device-orientation sample.
    DeviceOrientation(DeviceOrientationSample),
    /// Physical screen rotation in degrees, for device-look compensation.
    ScreenRotation(f32),
    /// The environment granted or revoked exclusive pointer capture.
    CaptureChanged(bool),
}
