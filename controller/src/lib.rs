//! First-person rigidbody movement controller.
//!
//! The core (`config`, `hooks`, `controller`) is engine-independent: a tick
//! function driven through injected collaborator traits, so the movement
//! logic can be tested without a running app. The integration layer
//! (`input`, `rapier`, `plugin`, `diagnostics`) wires that core to Bevy
//! input, a Rapier rigidbody, and a child camera.

pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod hooks;
pub mod input;
pub mod plugin;
pub mod rapier;

pub use config::{ConfigError, MovementConfig};
pub use controller::{MovementController, MovementState};
pub use diagnostics::{ControllerDebugMode, ControllerDiagnostics};
pub use hooks::{CameraHandle, ConfigurationError, GroundProbe, PhysicsBody};
pub use input::{ControllerInput, InputSample};
pub use plugin::{FirstPersonController, FirstPersonControllerPlugin, FirstPersonRig, RigCamera};
