//! Bevy/Rapier implementations of the collaborator seams.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::hooks::{CameraHandle, GroundProbe, PhysicsBody};

/// A dynamic rapier body with locked rotation, driven through its transform
/// plus an external impulse accumulator.
pub struct RapierBody<'a> {
    pub transform: &'a mut Transform,
    pub impulse: &'a mut ExternalImpulse,
}

impl PhysicsBody for RapierBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    fn rotate(&mut self, delta: Quat) {
        self.transform.rotation = self.transform.rotation * delta;
    }

    fn move_to(&mut self, target: Vec3) {
        // Rapier resolves any resulting overlap on its next step; this is a
        // position request, not a teleport past geometry.
        self.transform.translation = target;
    }

    fn apply_impulse(&mut self, impulse: Vec3) {
        self.impulse.impulse += impulse;
    }
}

/// One-ray grounded query against the rapier scene, excluding the rig's own
/// collider.
pub struct SceneGroundProbe<'a, 'w> {
    pub context: &'a RapierContext<'w>,
    pub exclude: Entity,
}

impl GroundProbe for SceneGroundProbe<'_, '_> {
    fn is_grounded(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> bool {
        let filter = QueryFilter::default().exclude_collider(self.exclude);
        self.context
            .cast_ray(origin, dir, max_dist, true, filter)
            .is_some()
    }
}

/// Writes the clamped pitch onto the camera child's local transform.
pub struct PitchCamera<'a> {
    pub transform: &'a mut Transform,
}

impl CameraHandle for PitchCamera<'_> {
    fn set_local_pitch(&mut self, degrees: f32) {
        self.transform.rotation = Quat::from_rotation_x(degrees.to_radians());
    }
}
