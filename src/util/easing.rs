//! Easing functions for camera transitions.
//!
//! Maps linear time progress [0,1] to a perceptually smoothed progress value.
//! Curves are named in preset TOML files, so the enum derives serde and
//! schemars alongside the usual traits.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve variants for camera transitions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end): t².
    EaseIn,
    /// Quadratic ease-out (fast start, slow end): 1-(1-t)².
    EaseOut,
    /// Smoothstep ease-in-out: t²(3-2t).
    EaseInOut,
}

impl EasingKind {
    /// Evaluate the easing curve at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Returns the eased value, also in
    /// [0.0, 1.0], with exact endpoints at 0 and 1.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}
