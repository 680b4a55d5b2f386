//! Plugin wiring: rig discovery, validation, and the per-frame drive loop.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::MovementConfig;
use crate::controller::MovementController;
use crate::diagnostics::{debug_draw_rigs, ControllerDebugMode};
use crate::input::{gather_keyboard_input, gather_mouse_input, ControllerInput};
use crate::rapier::{PitchCamera, RapierBody, SceneGroundProbe};

/// Authoring component: attach to an entity with a dynamic rigidbody, an
/// [`ExternalImpulse`], and a child [`RigCamera`] to make it a first-person
/// rig.
#[derive(Component, Clone, Default)]
pub struct FirstPersonRig {
    pub config: MovementConfig,
}

/// Marker for the look camera parented under a rig.
#[derive(Component)]
pub struct RigCamera;

/// Live controller, attached once a rig passes validation.
#[derive(Component)]
pub struct FirstPersonController {
    pub controller: MovementController,
    pub camera: Entity,
}

/// Marker for rigs that failed validation, so setup is not retried every
/// frame.
#[derive(Component)]
pub struct RigSetupFailed;

pub struct FirstPersonControllerPlugin;

impl Plugin for FirstPersonControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerInput>()
            .init_resource::<ControllerDebugMode>()
            .add_systems(
                Update,
                (
                    gather_keyboard_input,
                    gather_mouse_input,
                    setup_rigs,
                    drive_rigs,
                    debug_draw_rigs,
                )
                    .chain(),
            );
    }
}

/// Validate fresh rigs and attach their controller.
///
/// A rig missing its impulse accumulator or child camera is a fatal setup
/// error: it is logged once and the rig is never driven.
fn setup_rigs(
    mut commands: Commands,
    rigs: Query<
        (
            Entity,
            &FirstPersonRig,
            &Transform,
            Option<&Children>,
            Has<ExternalImpulse>,
        ),
        (Without<FirstPersonController>, Without<RigSetupFailed>),
    >,
    cameras: Query<(), With<RigCamera>>,
) {
    for (entity, rig, transform, children, has_impulse) in rigs.iter() {
        let camera = children
            .into_iter()
            .flat_map(|children| children.iter())
            .find(|child| cameras.contains(*child));

        // Rigs are expected to be uniformly scaled.
        let entity_scale = transform.scale.x;

        match MovementController::initialize(
            rig.config.clone(),
            entity_scale,
            has_impulse,
            camera.is_some(),
        ) {
            Ok(controller) => {
                // Presence was just validated, so the camera entity exists.
                if let Some(camera) = camera {
                    commands
                        .entity(entity)
                        .insert(FirstPersonController { controller, camera });
                    info!("first-person rig ready: {entity:?} (scale {entity_scale})");
                }
            }
            Err(err) => {
                error!("first-person rig {entity:?} disabled: {err}");
                commands.entity(entity).insert(RigSetupFailed);
            }
        }
    }
}

/// Tick every active rig with this frame's input.
fn drive_rigs(
    time: Res<Time>,
    mut input: ResMut<ControllerInput>,
    read_context: ReadRapierContext,
    mut rigs: Query<
        (
            Entity,
            &mut FirstPersonController,
            &mut Transform,
            &mut ExternalImpulse,
        ),
        Without<RigCamera>,
    >,
    mut camera_transforms: Query<&mut Transform, With<RigCamera>>,
) {
    let Ok(context) = read_context.single() else {
        return;
    };

    let sample = std::mem::take(&mut input.0);
    for (entity, mut rig, mut transform, mut impulse) in rigs.iter_mut() {
        let camera = rig.camera;
        let Ok(mut camera_transform) = camera_transforms.get_mut(camera) else {
            warn!("first-person rig {entity:?}: camera entity vanished, skipping tick");
            continue;
        };

        let mut body = RapierBody {
            transform: &mut *transform,
            impulse: &mut *impulse,
        };
        let probe = SceneGroundProbe {
            context: &context,
            exclude: entity,
        };
        let mut camera = PitchCamera {
            transform: &mut *camera_transform,
        };

        rig.controller
            .tick(&sample, time.delta_secs(), &mut body, &probe, &mut camera);
    }
}
