//! Keyboard and mouse gathering for the controller.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

/// One tick's worth of control input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSample {
    /// Forward/back axis in [-1, 1].
    pub move_forward: f32,
    /// Strafe axis in [-1, 1].
    pub move_right: f32,
    /// Raw horizontal pointer delta.
    pub look_yaw: f32,
    /// Raw vertical pointer delta.
    pub look_pitch: f32,
    pub sprint_held: bool,
    /// True only on the tick the jump key goes down, never while held.
    pub jump_pressed: bool,
}

/// Input gathered for the current frame, consumed by the drive system.
#[derive(Resource, Default)]
pub struct ControllerInput(pub InputSample);

/// -1/0/+1 from a negative/positive key pair.
pub fn axis_value(negative: bool, positive: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}

/// WASD axes, Shift to sprint, Space (edge-triggered) to jump.
pub fn gather_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<ControllerInput>,
) {
    input.0.move_forward = axis_value(
        keyboard.pressed(KeyCode::KeyS),
        keyboard.pressed(KeyCode::KeyW),
    );
    input.0.move_right = axis_value(
        keyboard.pressed(KeyCode::KeyA),
        keyboard.pressed(KeyCode::KeyD),
    );
    input.0.sprint_held =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    input.0.jump_pressed = keyboard.just_pressed(KeyCode::Space);
}

/// Sum this frame's mouse motion into the look deltas.
pub fn gather_mouse_input(
    mut mouse_motion: MessageReader<MouseMotion>,
    mut input: ResMut<ControllerInput>,
) {
    let mut delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        delta += motion.delta;
    }
    input.0.look_yaw = delta.x;
    input.0.look_pitch = delta.y;
}
