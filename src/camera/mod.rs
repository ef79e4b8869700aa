//! Camera state, transitions, and orbiting.
//!
//! The live [`CameraState`] is owned by a [`CameraRig`], which runs at most
//! one motion job at a time (eased transition or orbit) and is driven by the
//! host render loop's per-frame tick.

/// Live camera state, FOV clamping, and GPU uniform interop.
pub mod core;
/// Continuous circular motion around a focus point.
pub mod orbit;
/// The rig facade: motion state machine, overrides, and per-frame tick.
pub mod rig;
/// Eased interpolation jobs between camera states.
pub mod transition;

pub use self::core::{
    clamp_fov, CameraState, CameraUniform, ProjectionOptions, FOV_MAX, FOV_MIN,
};
pub use orbit::OrbitJob;
pub use rig::{CameraRig, Motion};
pub use transition::TransitionJob;
