//! Core movement logic, engine-independent.
//!
//! One controller per rig. Position and yaw are physics-authoritative: the
//! controller reads them from the body and submits requests; the body
//! resolves those requests against collision geometry. The only state the
//! controller owns outright is the clamped camera pitch.

use bevy::prelude::*;

use crate::config::MovementConfig;
use crate::diagnostics::ControllerDiagnostics;
use crate::hooks::{CameraHandle, ConfigurationError, GroundProbe, PhysicsBody};
use crate::input::InputSample;

/// Mutable per-rig state owned by the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovementState {
    /// Camera pitch in degrees, always within the configured bounds.
    pub camera_pitch_deg: f32,
}

/// Per-rig movement controller. Built by [`MovementController::initialize`],
/// stepped once per simulation tick by [`MovementController::tick`].
#[derive(Debug)]
pub struct MovementController {
    config: MovementConfig,
    state: MovementState,
}

impl MovementController {
    /// Validate collaborators and build the controller.
    ///
    /// `physics_present` and `camera_present` report what the caller found
    /// on the rig; a missing collaborator is a fatal setup error, not a
    /// runtime condition. Inverted pitch bounds are swapped, and the
    /// config's distance-valued tuning is rescaled by `entity_scale`
    /// exactly once here.
    pub fn initialize(
        mut config: MovementConfig,
        entity_scale: f32,
        physics_present: bool,
        camera_present: bool,
    ) -> Result<Self, ConfigurationError> {
        if !physics_present {
            return Err(ConfigurationError::MissingPhysicsBody);
        }
        if !camera_present {
            return Err(ConfigurationError::MissingCamera);
        }

        config.normalize();
        config.apply_scale(entity_scale);

        let state = MovementState {
            camera_pitch_deg: 0.0_f32.clamp(config.pitch_min_deg, config.pitch_max_deg),
        };
        Ok(Self { config, state })
    }

    /// Effective tuning after normalization and scaling.
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    /// Advance one tick. `dt` must be >= 0.
    ///
    /// Order matters: yaw is concatenated onto the body first so the move
    /// direction is computed from the post-rotation axes. Every step runs
    /// on every call.
    pub fn tick(
        &mut self,
        input: &InputSample,
        dt: f32,
        body: &mut dyn PhysicsBody,
        probe: &dyn GroundProbe,
        camera: &mut dyn CameraHandle,
    ) {
        let speed = if input.sprint_held {
            self.config.sprint_speed
        } else {
            self.config.walk_speed
        };

        // Mouse right turns right: negative rotation about +Y.
        let yaw_delta_deg = input.look_yaw * self.config.mouse_sensitivity;
        body.rotate(Quat::from_rotation_y(-yaw_delta_deg.to_radians()));

        // Axes read after the rotation so movement follows the new facing.
        let rotation = body.rotation();
        let forward = rotation * Vec3::NEG_Z;
        let right = rotation * Vec3::X;
        let position = body.position();
        let step = dt * speed * (forward * input.move_forward + right * input.move_right);
        body.move_to(position + step);

        self.state.camera_pitch_deg = (self.state.camera_pitch_deg
            + self.config.mouse_sensitivity * -input.look_pitch)
            .clamp(self.config.pitch_min_deg, self.config.pitch_max_deg);
        camera.set_local_pitch(self.state.camera_pitch_deg);

        let down = rotation * Vec3::NEG_Y;
        if input.jump_pressed && probe.is_grounded(position, down, self.config.ground_ray_length) {
            body.apply_impulse(Vec3::Y * self.config.jump_impulse);
        }
    }

    /// Read-only snapshot for a visualization layer.
    pub fn diagnostics(&self, position: Vec3, rotation: Quat) -> ControllerDiagnostics {
        ControllerDiagnostics {
            ray_origin: position,
            ray_direction: rotation * Vec3::NEG_Y,
            ray_length: self.config.ground_ray_length,
            camera_pitch_deg: self.state.camera_pitch_deg,
            pitch_min_deg: self.config.pitch_min_deg,
            pitch_max_deg: self.config.pitch_max_deg,
        }
    }
}
