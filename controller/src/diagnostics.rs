//! Read-only introspection for running rigs, plus an optional gizmo overlay.
//!
//! The controller itself never draws; it exposes a snapshot that a
//! visualization layer (here, a Bevy gizmo system behind a toggle) consumes.

use bevy::prelude::*;

use crate::plugin::FirstPersonController;

/// Length of the pitch-bound indicator rays.
const PITCH_RAY_LENGTH: f32 = 4.0;

const RAY_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);
const PITCH_MIN_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const PITCH_MAX_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);

/// Snapshot of the ground probe and pitch constraints for one rig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerDiagnostics {
    pub ray_origin: Vec3,
    pub ray_direction: Vec3,
    pub ray_length: f32,
    pub camera_pitch_deg: f32,
    pub pitch_min_deg: f32,
    pub pitch_max_deg: f32,
}

/// Toggle for the debug overlay (F4 in the demo).
#[derive(Resource, Default)]
pub struct ControllerDebugMode(pub bool);

/// Draw the ground ray and the pitch bounds for every active rig.
pub fn debug_draw_rigs(
    mut gizmos: Gizmos,
    debug_mode: Res<ControllerDebugMode>,
    rigs: Query<(&FirstPersonController, &Transform)>,
    cameras: Query<&GlobalTransform>,
) {
    if !debug_mode.0 {
        return;
    }

    for (rig, transform) in rigs.iter() {
        let diag = rig
            .controller
            .diagnostics(transform.translation, transform.rotation);

        gizmos.line(
            diag.ray_origin,
            diag.ray_origin + diag.ray_direction * diag.ray_length,
            RAY_COLOR,
        );

        let Ok(camera) = cameras.get(rig.camera) else {
            continue;
        };
        let eye = camera.translation();
        let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
        for (bound_deg, color) in [
            (diag.pitch_min_deg, PITCH_MIN_COLOR),
            (diag.pitch_max_deg, PITCH_MAX_COLOR),
        ] {
            let dir = Quat::from_euler(EulerRot::YXZ, yaw, bound_deg.to_radians(), 0.0)
                * Vec3::NEG_Z;
            gizmos.line(eye, eye + dir * PITCH_RAY_LENGTH, color);
        }
    }
}
