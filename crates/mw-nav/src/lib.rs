//! Camera navigation for the modelwalk viewer
//!
//! The state machine, smoothing math, movement integration, and
//! collision gating behind the viewer's three navigation modes:
//!
//! - **Orbit**: default inspection mode; rotational input is the
//!   render-side damped orbit control, external to this crate.
//! - **FirstPerson**: walking navigation with pointer-driven look,
//!   ground-locked height, and collision-gated movement.
//! - **DeviceLook**: orientation-only look driven directly by device
//!   tilt sensors.
//!
//! Everything runs single-threaded inside a per-frame `tick`; input
//! adapters push [`input::InputEvent`]s between ticks and the committed
//! [`camera::Camera`] pose is read back by the renderer after each one.

pub mod camera;
pub mod collision;
pub mod config;
pub mod controller;
pub mod input;
pub mod movement;
pub mod orientation;

pub use camera::{Camera, CameraUniform, SavedView};
pub use collision::{BoundaryClamp, CollisionPolicy};
pub use config::{ConfigError, NavConfig};
pub use controller::{ViewMode, ViewModeController};
pub use input::{DeviceOrientationSample, InputEvent, MoveKey};
pub use movement::MovementInput;
pub use orientation::OrientationState;
