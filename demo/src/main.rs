//! Playable demo: a flat arena with a few obstacles and one first-person
//! rig. WASD to move, Shift to sprint, Space to jump, F4 for the debug
//! overlay, Escape to release the cursor.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use controller::{
    ControllerDebugMode, FirstPersonControllerPlugin, FirstPersonRig, MovementConfig, RigCamera,
};

const PLAYER_HEIGHT: f32 = 1.8;
const PLAYER_RADIUS: f32 = 0.3;
/// Eye level above the capsule center.
const CAMERA_HEIGHT_OFFSET: f32 = PLAYER_HEIGHT * 0.4;
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

const ARENA_HALF_EXTENT: f32 = 50.0;
const CONFIG_PATH: &str = "demo/assets/controller.ron";

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "First Person Demo".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(FirstPersonControllerPlugin)
        .add_systems(Startup, (setup_scene, spawn_player))
        .add_systems(Update, (manage_cursor, toggle_debug_overlay))
        .run();
}

fn load_config() -> MovementConfig {
    match MovementConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => {
            info!("loaded controller config from {CONFIG_PATH}");
            config
        }
        Err(err) => {
            warn!("using default controller config: {err}");
            MovementConfig::default()
        }
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Floor.
    let floor_mesh = meshes.add(Cuboid::new(
        ARENA_HALF_EXTENT * 2.0,
        0.2,
        ARENA_HALF_EXTENT * 2.0,
    ));
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.4, 0.35),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((
        Mesh3d(floor_mesh),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, -0.1, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(ARENA_HALF_EXTENT, 0.1, ARENA_HALF_EXTENT),
    ));

    // A few boxes to jump on and collide with.
    let box_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.5, 0.4),
        perceptual_roughness: 0.8,
        ..default()
    });
    for (position, size) in [
        (Vec3::new(6.0, 0.5, -8.0), Vec3::new(2.0, 1.0, 2.0)),
        (Vec3::new(-5.0, 1.0, -12.0), Vec3::new(3.0, 2.0, 3.0)),
        (Vec3::new(0.0, 0.4, -20.0), Vec3::new(8.0, 0.8, 1.0)),
    ] {
        let mesh = meshes.add(Cuboid::new(size.x, size.y, size.z));
        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(box_material.clone()),
            Transform::from_translation(position),
            RigidBody::Fixed,
            Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.8, 0.85, 1.0),
        brightness: 120.0,
        affects_lightmapped_meshes: false,
    });
    commands.insert_resource(ClearColor(Color::srgb(0.55, 0.7, 0.9)));
}

fn spawn_player(mut commands: Commands) {
    let config = load_config();

    commands
        .spawn((
            FirstPersonRig { config },
            RigidBody::Dynamic,
            Collider::capsule_y(PLAYER_HEIGHT / 2.0 - PLAYER_RADIUS, PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            ExternalImpulse::default(),
            Damping {
                linear_damping: 0.2,
                angular_damping: 0.0,
            },
            Transform::from_translation(SPAWN_POSITION),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                RigCamera,
                Camera3d::default(),
                Transform::from_xyz(0.0, CAMERA_HEIGHT_OFFSET, 0.0),
            ));
        });
}

/// Click to capture the mouse, Escape to release it.
fn manage_cursor(
    windows: Query<Entity, With<PrimaryWindow>>,
    mut cursor_opts: Query<&mut CursorOptions>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let Ok(window_entity) = windows.single() else {
        return;
    };
    let Ok(mut cursor) = cursor_opts.get_mut(window_entity) else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    }
}

fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_mode: ResMut<ControllerDebugMode>,
) {
    if keyboard.just_pressed(KeyCode::F4) {
        debug_mode.0 = !debug_mode.0;
        info!(
            "controller debug overlay {}",
            if debug_mode.0 { "on" } else { "off" }
        );
    }
}
