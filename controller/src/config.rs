//! Controller tuning, loadable from RON.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tuning for a first-person rig.
///
/// Distance-valued fields (speeds, ground-ray length) are rescaled once by
/// the rig's uniform scale at initialization, so a half-size rig moves and
/// probes at half range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Magnitude of the instantaneous upward impulse on jump.
    pub jump_impulse: f32,
    /// Distance probed along the rig's local down axis for ground contact.
    pub ground_ray_length: f32,
    /// Walk speed in units per second.
    pub walk_speed: f32,
    /// Sprint speed in units per second.
    pub sprint_speed: f32,
    /// Multiplier on raw pointer deltas (degrees per count).
    pub mouse_sensitivity: f32,
    /// Inclusive camera pitch bounds in degrees.
    pub pitch_min_deg: f32,
    pub pitch_max_deg: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            jump_impulse: 5.0,
            ground_ray_length: 1.0,
            walk_speed: 30.0,
            sprint_speed: 40.0,
            mouse_sensitivity: 5.0,
            pitch_min_deg: -80.0,
            pitch_max_deg: 80.0,
        }
    }
}

impl MovementConfig {
    /// Enforce `pitch_min_deg <= pitch_max_deg` by swapping inverted bounds.
    pub fn normalize(&mut self) {
        if self.pitch_min_deg > self.pitch_max_deg {
            std::mem::swap(&mut self.pitch_min_deg, &mut self.pitch_max_deg);
        }
    }

    /// Rescale distance-valued tuning by the rig's uniform scale.
    /// Applied exactly once, at initialization.
    pub(crate) fn apply_scale(&mut self, entity_scale: f32) {
        self.ground_ray_length *= entity_scale;
        self.walk_speed *= entity_scale;
        self.sprint_speed *= entity_scale;
    }

    /// Load tuning from a RON file. Inverted pitch bounds are normalized on
    /// load so a hand-edited file cannot produce an empty pitch range.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let mut config: Self =
            ron::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize();
        Ok(config)
    }
}

/// Errors from loading a [`MovementConfig`] file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_swaps_inverted_pitch_bounds() {
        let mut config = MovementConfig {
            pitch_min_deg: 45.0,
            pitch_max_deg: -45.0,
            ..Default::default()
        };
        config.normalize();
        assert_eq!(config.pitch_min_deg, -45.0);
        assert_eq!(config.pitch_max_deg, 45.0);
    }

    #[test]
    fn normalize_keeps_ordered_bounds() {
        let mut config = MovementConfig::default();
        config.normalize();
        assert_eq!(config.pitch_min_deg, -80.0);
        assert_eq!(config.pitch_max_deg, 80.0);
    }

    #[test]
    fn apply_scale_touches_only_distance_fields() {
        let mut config = MovementConfig::default();
        config.apply_scale(2.0);
        assert_eq!(config.walk_speed, 60.0);
        assert_eq!(config.sprint_speed, 80.0);
        assert_eq!(config.ground_ray_length, 2.0);
        assert_eq!(config.jump_impulse, 5.0);
        assert_eq!(config.mouse_sensitivity, 5.0);
    }

    #[test]
    fn parses_partial_ron_with_defaults() {
        let config: MovementConfig =
            ron::from_str("(walk_speed: 12.0, sprint_speed: 18.0)").unwrap();
        assert_eq!(config.walk_speed, 12.0);
        assert_eq!(config.sprint_speed, 18.0);
        assert_eq!(config.jump_impulse, 5.0);
    }
}
