//! Modelwalk demo entry point
//!
//! Runs the navigation stack headless over a procedurally generated
//! room: enters first-person mode, walks a scripted path with the
//! collision gate active, and logs the committed camera pose. A RON
//! config path may be passed as the first argument.

use glam::Vec3;

use mw_core::{generate_room_mesh, normalize_scene};
use mw_nav::{InputEvent, MoveKey, NavConfig, ViewModeController};

const TICK_SECONDS: f32 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mw_frontend=info,mw_nav=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "loading navigation config");
            NavConfig::load(path)?
        }
        None => NavConfig::default(),
    };

    let mut mesh = generate_room_mesh(Vec3::new(8.0, 3.0, 6.0));
    let bounds = normalize_scene(&mut mesh, config.scene_target_size)?;
    tracing::info!(min = ?bounds.min, max = ?bounds.max, "room normalized");

    let mut controller = ViewModeController::new(16.0 / 9.0, config);
    controller.set_scene(mesh, bounds);

    controller.toggle_first_person();
    // The headless environment grants capture immediately.
    controller.handle_event(InputEvent::CaptureChanged(true));

    // Walk forward while panning the view, then strafe along the wall.
    controller.handle_event(InputEvent::Key {
        key: MoveKey::Forward,
        pressed: true,
    });
    for tick in 0u32..300 {
        if tick % 10 == 0 {
            controller.handle_event(InputEvent::Look { dx: 12.0, dy: 2.0 });
        }
        controller.tick(TICK_SECONDS);
        if tick % 60 == 0 {
            log_pose(&controller, tick);
        }
    }

    controller.handle_event(InputEvent::Key {
        key: MoveKey::Forward,
        pressed: false,
    });
    controller.handle_event(InputEvent::Joystick { x: 0.8, y: 0.1 });
    for tick in 300u32..420 {
        controller.tick(TICK_SECONDS);
        if tick % 60 == 0 {
            log_pose(&controller, tick);
        }
    }
    controller.handle_event(InputEvent::JoystickEnd);

    controller.toggle_first_person();
    let camera = controller.camera();
    tracing::info!(
        position = ?camera.position,
        fov = camera.fov_y_deg,
        "walkthrough finished, orbit view restored"
    );
    Ok(())
}

fn log_pose(controller: &ViewModeController, tick: u32) {
    let camera = controller.camera();
    let (yaw_deg, pitch_deg) = controller.debug_angles();
    tracing::info!(
        tick,
        position = ?camera.position,
        yaw_deg = f64::from(yaw_deg),
        pitch_deg = f64::from(pitch_deg),
        "pose"
    );
}
