//! Collaborator seams the controller drives each tick.
//!
//! The controller never integrates motion itself. It reads the body's pose,
//! then submits rotate/move/impulse requests that the physics engine
//! resolves against collision geometry on its next step.

use bevy::prelude::*;
use thiserror::Error;

/// A physics-authoritative body. The implementor owns position and
/// orientation; the controller only requests changes.
pub trait PhysicsBody {
    fn position(&self) -> Vec3;
    fn rotation(&self) -> Quat;
    /// Concatenate `delta` onto the current orientation.
    fn rotate(&mut self, delta: Quat);
    /// Request a move to `target`, resolved against collision geometry.
    fn move_to(&mut self, target: Vec3);
    /// Apply an instantaneous velocity change.
    fn apply_impulse(&mut self, impulse: Vec3);
}

/// Ground-contact query: one ray, boolean answer, no slope analysis.
pub trait GroundProbe {
    fn is_grounded(&self, origin: Vec3, dir: Vec3, max_dist: f32) -> bool;
}

/// The look camera parented under the rig.
pub trait CameraHandle {
    /// Set the camera's local pitch in degrees about the lateral axis.
    /// Absolute, not cumulative.
    fn set_local_pitch(&mut self, degrees: f32);
}

/// Fatal setup failure: the rig is missing a collaborator it cannot run
/// without. Raised only at initialization, never at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("rig has no physics body with impulse support")]
    MissingPhysicsBody,
    #[error("rig has no child camera")]
    MissingCamera,
}
