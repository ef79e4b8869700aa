// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Preset-driven 3D camera rig for host render loops.
//!
//! Camrig animates a camera between named viewpoints with eased transitions,
//! orbits it around a focus point, and accepts direct overrides — all as an
//! in-process library with no rendering framework dependency. The host loop
//! calls [`CameraRig::tick`](camera::CameraRig::tick) once per displayed
//! frame and reads the resulting [`camera::CameraState`] to position its
//! actual camera object.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - the motion state machine (transition / orbit /
//!   idle)
//! - [`presets::PresetRegistry`] - named viewpoints with TOML file support
//! - [`util::easing::EasingKind`] - transition easing curves
//! - [`util::frame_timing::FrameTiming`] - millisecond clock and FPS helper
//!   for driving the tick
//!
//! # Example
//!
//! ```
//! use camrig::camera::CameraRig;
//!
//! let mut rig = CameraRig::new();
//! rig.transition_to_preset("top", 0.0);
//! // ...once per frame, from the host render loop:
//! rig.tick(16.7);
//! let state = rig.state();
//! let view = state.view_matrix();
//! # let _ = view;
//! ```

pub mod camera;
pub mod error;
pub mod presets;
pub mod util;

pub use error::RigError;
