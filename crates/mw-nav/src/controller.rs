//! View-mode state machine and per-tick dispatch.

use glam::Vec3;
use tracing::{debug, info, trace};

use mw_core::{SceneBounds, TriangleMesh};

use crate::camera::{Camera, SavedView};
use crate::collision::{self, BoundaryClamp, CollisionPolicy};
use crate::config::NavConfig;
use crate::input::{DeviceOrientationSample, InputEvent};
use crate::movement::{self, MovementInput};
use crate::orientation::{self, OrientationState, facing_angles};

/// The active navigation mode. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Default mode: the camera orbits a fixed target under damped
    /// rotational input (handled by the external orbit control).
    Orbit,
    /// Walking navigation with pointer-driven look and collision-gated
    /// movement.
    FirstPerson,
    /// Orientation-only look driven by device tilt sensors.
    DeviceLook,
}

/// Scene data delivered once by the external loader.
struct LoadedScene {
    mesh: TriangleMesh,
    start_position: Vec3,
}

/// Owns the camera and all navigation state, and dispatches per-tick
/// work to the orientation smoother, movement integrator, and collision
/// gates.
///
/// All state lives in this one struct; there is no ambient or static
/// navigation state, so multiple independent viewers can coexist and
/// tests stay deterministic. The controller never blocks and never
/// returns per-tick errors: anything that goes wrong inside a tick
/// degrades to "no movement this tick".
pub struct ViewModeController {
    camera: Camera,
    orientation: OrientationState,
    movement: MovementInput,
    clamp: BoundaryClamp,
    config: NavConfig,
    scene: Option<LoadedScene>,
    saved_view: Option<SavedView>,
    first_person: bool,
    device_look: bool,
    capture_requested: bool,
    capture_active: bool,
    device_sample: DeviceOrientationSample,
    screen_rotation_deg: f32,
}

impl ViewModeController {
    /// Creates a controller in Orbit mode with no scene loaded.
    pub fn new(aspect: f32, config: NavConfig) -> Self {
        let orientation = OrientationState::new(
            config.mouse_sensitivity,
            config.smoothing,
            config.pitch_clamp(),
        );
        let clamp = BoundaryClamp::new(config.boundary_padding);
        Self {
            camera: Camera::new(aspect),
            orientation,
            movement: MovementInput::default(),
            clamp,
            config,
            scene: None,
            saved_view: None,
            first_person: false,
            device_look: false,
            capture_requested: false,
            capture_active: false,
            device_sample: DeviceOrientationSample::default(),
            screen_rotation_deg: 0.0,
        }
    }

    /// Returns the active mode. FirstPerson takes precedence over
    /// DeviceLook when both flags are set.
    pub fn mode(&self) -> ViewMode {
        if self.first_person {
            ViewMode::FirstPerson
        } else if self.device_look {
            ViewMode::DeviceLook
        } else {
            ViewMode::Orbit
        }
    }

    /// Returns the committed camera pose.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Update the viewport aspect ratio.
    pub fn update_aspect(&mut self, aspect: f32) {
        self.camera.update_aspect(aspect);
    }

    /// True while the controller wants exclusive pointer capture held.
    pub fn wants_capture(&self) -> bool {
        self.capture_requested
    }

    /// Delivers the normalized scene from the loader.
    ///
    /// Until this is called, mode toggles into FirstPerson and all
    /// movement integration are no-ops. The first-person start position
    /// is derived from the scene center plus the configured offset.
    pub fn set_scene(&mut self, mesh: TriangleMesh, bounds: SceneBounds) {
        let center = bounds.center();
        let start_position = Vec3::new(
            center.x + self.config.start_offset.x,
            self.config.ground_level + self.config.start_offset.y,
            center.z + self.config.start_offset.z,
        );
        self.clamp.set_bounds(bounds);
        self.camera.fit_to_bounds(&bounds);
        info!(
            triangles = mesh.triangle_count(),
            ?start_position,
            "scene delivered"
        );
        self.scene = Some(LoadedScene {
            mesh,
            start_position,
        });
    }

    /// Flips between Orbit and FirstPerson, returning the new mode.
    ///
    /// On entry the pre-navigation view is saved (first entry only; the
    /// original snapshot survives re-entries), the field of view widens
    /// to the walking value, the look direction is reset to the current
    /// facing, and the camera snaps to the fixed start position. On
    /// exit the saved view is restored exactly and capture is released.
    /// A no-op while no scene is loaded.
    pub fn toggle_first_person(&mut self) -> ViewMode {
        if self.first_person {
            self.exit_first_person();
        } else {
            self.enter_first_person();
        }
        self.mode()
    }

    /// Enables or disables device-look, returning the new mode.
    ///
    /// Independent of the FirstPerson flag; while FirstPerson is active
    /// this changes no camera behavior until FirstPerson exits.
    pub fn set_device_look_enabled(&mut self, enabled: bool) -> ViewMode {
        self.device_look = enabled;
        info!(enabled, "device look toggled");
        self.mode()
    }

    /// Environment callback for exclusive-capture changes.
    ///
    /// Losing capture while FirstPerson is active force-exits the mode
    /// within this call, exactly as if [`Self::toggle_first_person`]
    /// had been invoked.
    pub fn set_capture_active(&mut self, active: bool) {
        self.capture_active = active;
        if !active && self.first_person {
            debug!("pointer capture lost, leaving first-person mode");
            self.exit_first_person();
        }
    }

    /// Feeds one input event into the navigation state.
    ///
    /// Events update last-write-wins snapshots consumed by the next
    /// tick; they never mutate the camera directly.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Look { dx, dy } => {
                if self.first_person && self.capture_active {
                    self.orientation.apply_look_delta(dx, dy);
                }
            }
            InputEvent::Key { key, pressed } => {
                if self.first_person {
                    self.movement.set_key(key, pressed);
                }
            }
            InputEvent::Joystick { x, y } => {
                if self.first_person {
                    self.movement.set_joystick(x, y);
                }
            }
            InputEvent::JoystickEnd => {
                if self.first_person {
                    self.movement.end_joystick();
                }
            }
            InputEvent::DeviceOrientation(sample) => {
                if self.device_look {
                    self.device_sample = sample;
                }
            }
            InputEvent::ScreenRotation(degrees) => {
                self.screen_rotation_deg = degrees;
            }
            InputEvent::CaptureChanged(active) => {
                self.set_capture_active(active);
            }
        }
    }

    /// Advances the active mode by one frame and commits the camera.
    ///
    /// `dt` is the elapsed time in seconds since the previous tick.
    pub fn tick(&mut self, dt: f32) {
        match self.mode() {
            ViewMode::FirstPerson => self.tick_first_person(dt),
            ViewMode::DeviceLook => self.tick_device_look(),
            // Orbit input is the render-side damped control; nothing to
            // integrate here.
            ViewMode::Orbit => {}
        }
    }

    /// Current yaw and pitch in degrees for the on-screen debug readout
    /// (yaw wrapped to [0, 360)).
    pub fn debug_angles(&self) -> (f32, f32) {
        if self.mode() == ViewMode::DeviceLook {
            (
                self.device_sample.alpha_deg.rem_euclid(360.0),
                self.device_sample.beta_deg,
            )
        } else {
            (
                self.orientation.yaw_degrees(),
                self.orientation.pitch_degrees(),
            )
        }
    }

    fn enter_first_person(&mut self) {
        let Some(scene) = &self.scene else {
            debug!("first-person toggle ignored: no scene loaded");
            return;
        };

        if self.saved_view.is_none() {
            self.saved_view = Some(self.camera.save_view());
        }

        let (yaw, pitch) = facing_angles(self.camera.look_direction());
        self.orientation.reset_to(yaw, pitch);

        self.first_person = true;
        self.camera.fov_y_deg = self.config.first_person_fov_deg;
        self.camera.position = scene.start_position;
        self.camera.target =
            self.camera.position + self.orientation.look_direction() * self.config.look_distance;
        self.capture_requested = true;
        info!(position = ?self.camera.position, "entered first-person mode");
    }

    fn exit_first_person(&mut self) {
        self.first_person = false;
        self.capture_requested = false;
        self.movement.clear();
        if let Some(saved) = &self.saved_view {
            self.camera.restore_view(saved);
        }
        info!("left first-person mode");
    }

    fn tick_first_person(&mut self, dt: f32) {
        self.orientation.tick();
        let dir = self.orientation.look_direction();

        if let Some(scene) = &self.scene {
            if self.movement.is_active() {
                let candidate = movement::candidate_position(
                    self.camera.position,
                    dir,
                    &self.movement,
                    self.config.move_speed,
                    dt,
                    self.config.ground_level,
                    self.config.eye_height,
                );

                let admitted = match self.config.collision_policy {
                    CollisionPolicy::MeshParity => collision::displacement_admissible(
                        self.camera.position,
                        candidate,
                        &scene.mesh,
                    ),
                    CollisionPolicy::Bounds => {
                        self.clamp.is_within_bounds(candidate.x, candidate.z)
                    }
                };

                if admitted {
                    self.camera.position = candidate;
                } else {
                    trace!(?candidate, "displacement rejected");
                }
            }
        }

        self.camera.target = self.camera.position + dir * self.config.look_distance;
    }

    fn tick_device_look(&mut self) {
        let rotation =
            orientation::device_look_orientation(&self.device_sample, self.screen_rotation_deg);
        let forward = (rotation * Vec3::NEG_Z).normalize_or_zero();
        self.camera.target = self.camera.position + forward * self.config.look_distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveKey;
    use mw_core::{generate_room_mesh, normalize_scene};

    const DT: f32 = 1.0 / 60.0;

    fn controller_with_room() -> ViewModeController {
        let mut controller = ViewModeController::new(16.0 / 9.0, NavConfig::default());
        let mut mesh = generate_room_mesh(Vec3::new(4.0, 4.0, 4.0));
        let bounds = normalize_scene(&mut mesh, 5.0).expect("normalize");
        controller.set_scene(mesh, bounds);
        controller
    }

    #[test]
    fn test_starts_in_orbit() {
        let controller = ViewModeController::new(1.0, NavConfig::default());
        assert_eq!(controller.mode(), ViewMode::Orbit);
        assert!(!controller.wants_capture());
    }

    #[test]
    fn test_toggle_before_scene_is_noop() {
        let mut controller = ViewModeController::new(1.0, NavConfig::default());
        assert_eq!(controller.toggle_first_person(), ViewMode::Orbit);
        assert!(controller.saved_view.is_none());
        assert!(!controller.wants_capture());
    }

    #[test]
    fn test_enter_exit_restores_view_exactly() {
        let mut controller = controller_with_room();
        controller.camera.position = Vec3::new(0.0, 1.6, 3.0);
        controller.camera.target = Vec3::new(0.0, 1.0, 0.0);
        controller.camera.fov_y_deg = 50.0;

        assert_eq!(controller.toggle_first_person(), ViewMode::FirstPerson);
        assert!(controller.wants_capture());
        assert_eq!(controller.camera.fov_y_deg, 75.0);

        assert_eq!(controller.toggle_first_person(), ViewMode::Orbit);
        assert_eq!(controller.camera.position, Vec3::new(0.0, 1.6, 3.0));
        assert_eq!(controller.camera.target, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(controller.camera.fov_y_deg, 50.0);
        assert!(!controller.wants_capture());
    }

    #[test]
    fn test_reentry_snaps_to_start_and_keeps_first_snapshot() {
        let mut controller = controller_with_room();
        controller.camera.position = Vec3::new(0.0, 1.6, 3.0);
        controller.camera.fov_y_deg = 50.0;

        controller.toggle_first_person();
        let start = controller.camera.position;
        controller.toggle_first_person();

        // Move the orbit camera somewhere else, then re-enter.
        controller.camera.position = Vec3::new(9.0, 9.0, 9.0);
        controller.toggle_first_person();
        assert_eq!(controller.camera.position, start);

        // Exit restores the *first* snapshot, not the later orbit pose.
        controller.toggle_first_person();
        assert_eq!(controller.camera.position, Vec3::new(0.0, 1.6, 3.0));
        assert_eq!(controller.camera.fov_y_deg, 50.0);
    }

    #[test]
    fn test_capture_loss_forces_orbit_in_same_call() {
        let mut controller = controller_with_room();
        controller.toggle_first_person();
        controller.set_capture_active(true);
        assert_eq!(controller.mode(), ViewMode::FirstPerson);

        controller.handle_event(InputEvent::Key {
            key: MoveKey::Forward,
            pressed: true,
        });

        controller.handle_event(InputEvent::CaptureChanged(false));
        assert_eq!(controller.mode(), ViewMode::Orbit);

        // Subsequent ticks run no first-person movement logic.
        let position = controller.camera.position;
        for _ in 0..10 {
            controller.tick(DT);
        }
        assert_eq!(controller.camera.position, position);
    }

    #[test]
    fn test_first_person_wins_over_device_look() {
        let mut controller = controller_with_room();
        controller.toggle_first_person();
        controller.set_capture_active(true);
        controller.set_device_look_enabled(true);
        assert_eq!(controller.mode(), ViewMode::FirstPerson);

        // Device samples arrive but must not steer the camera yet.
        controller.tick(DT);
        let target_before = controller.camera.target;
        controller.handle_event(InputEvent::DeviceOrientation(DeviceOrientationSample {
            alpha_deg: 120.0,
            beta_deg: 45.0,
            gamma_deg: 10.0,
        }));
        controller.tick(DT);
        assert_eq!(controller.camera.target, target_before);

        // Exiting first-person hands control to device look.
        controller.toggle_first_person();
        assert_eq!(controller.mode(), ViewMode::DeviceLook);
    }

    #[test]
    fn test_device_look_steers_without_moving() {
        let mut controller = controller_with_room();
        controller.set_device_look_enabled(true);
        let position = controller.camera.position;

        controller.handle_event(InputEvent::DeviceOrientation(DeviceOrientationSample {
            alpha_deg: 90.0,
            beta_deg: 20.0,
            gamma_deg: 0.0,
        }));
        let target_first = {
            controller.tick(DT);
            controller.camera.target
        };
        controller.tick(DT);

        // Direct set: a second tick with the same sample changes nothing.
        assert_eq!(controller.camera.target, target_first);
        assert_eq!(controller.camera.position, position);
    }

    #[test]
    fn test_movement_blocked_by_room_wall() {
        let mut controller = controller_with_room();
        controller.toggle_first_person();
        controller.set_capture_active(true);

        // Face -X and hold forward; the wall at x = -2.5 must stop us.
        let (yaw, _) = facing_angles(Vec3::NEG_X);
        controller.orientation.reset_to(yaw, 0.0);
        controller.handle_event(InputEvent::Key {
            key: MoveKey::Forward,
            pressed: true,
        });

        let start_x = controller.camera.position.x;
        for _ in 0..600 {
            controller.tick(DT);
        }

        let position = controller.camera.position;
        assert!(position.x < start_x, "camera should have walked forward");
        assert!(position.x > -2.5, "camera must stay inside the room");
        assert!((position.y - 0.1).abs() < 1e-5, "eye height is fixed");
    }

    #[test]
    fn test_bounds_policy_discards_out_of_bounds_step() {
        let mut config = NavConfig::default();
        config.collision_policy = CollisionPolicy::Bounds;
        config.move_speed = 60.0; // one big step per tick

        let mut controller = ViewModeController::new(1.0, config);
        let mut mesh = generate_room_mesh(Vec3::new(4.0, 4.0, 4.0));
        let bounds = normalize_scene(&mut mesh, 5.0).expect("normalize");
        controller.set_scene(mesh, bounds);

        controller.toggle_first_person();
        controller.set_capture_active(true);
        let (yaw, _) = facing_angles(Vec3::NEG_X);
        controller.orientation.reset_to(yaw, 0.0);
        controller.handle_event(InputEvent::Key {
            key: MoveKey::Forward,
            pressed: true,
        });

        // A single step of one unit stays in the padded rectangle.
        controller.tick(DT);
        let inside = controller.camera.position;
        assert!(inside.x >= -3.0);

        // Keep walking; every tick that would leave the rectangle is
        // discarded entirely.
        for _ in 0..20 {
            controller.tick(DT);
        }
        assert!(controller.camera.position.x >= -3.0);
    }

    #[test]
    fn test_look_input_requires_capture() {
        let mut controller = controller_with_room();
        controller.toggle_first_person();

        let angles_before = controller.orientation.target_angles();
        controller.handle_event(InputEvent::Look { dx: 50.0, dy: 5.0 });
        assert_eq!(controller.orientation.target_angles(), angles_before);

        controller.set_capture_active(true);
        controller.handle_event(InputEvent::Look { dx: 50.0, dy: 5.0 });
        assert_ne!(controller.orientation.target_angles(), angles_before);
    }

    #[test]
    fn test_look_target_tracks_camera() {
        let mut controller = controller_with_room();
        controller.toggle_first_person();
        controller.set_capture_active(true);
        controller.tick(DT);

        let camera = controller.camera();
        let offset = camera.target - camera.position;
        assert!((offset.length() - 2.0).abs() < 1e-4);
    }
}
