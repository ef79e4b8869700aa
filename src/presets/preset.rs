use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{clamp_fov, CameraState};
use crate::util::easing::EasingKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Preset", inline)]
#[serde(default)]
/// A named, fixed camera viewpoint plus its transition metadata.
///
/// Presets are immutable once the owning registry is built. All fields have
/// defaults so partial TOML entries (e.g. only overriding `position`) work
/// correctly.
pub struct CameraPreset {
    /// Camera position in world space.
    pub position: [f32; 3],
    /// Look-at target position.
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Default transition duration in seconds, used when the caller does not
    /// supply one.
    #[schemars(title = "Transition Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub transition_secs: f32,
    /// Whether this viewpoint follows a moving subject.
    pub tracking: bool,
    /// Follow distance behind the subject, for tracking presets.
    #[schemars(skip)]
    pub follow_distance: Option<f32>,
    /// Easing curve applied to transitions into this preset.
    pub curve: EasingKind,
}

impl CameraPreset {
    /// Preset position as a vector.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Preset look-at target as a vector.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        Vec3::from(self.target)
    }

    /// The camera state this preset resolves to (field of view clamped).
    #[must_use]
    pub fn state(&self) -> CameraState {
        CameraState::new(self.position(), self.target(), clamp_fov(self.fov))
    }
}

impl Default for CameraPreset {
    /// The documented fallback viewpoint: eye-level front view.
    fn default() -> Self {
        Self {
            position: [0.0, 1.7, 5.0],
            target: [0.0, 1.7, 0.0],
            fov: 45.0,
            transition_secs: 1.5,
            tracking: false,
            follow_distance: None,
            curve: EasingKind::Linear,
        }
    }
}
