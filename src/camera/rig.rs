//! The camera rig: owns the live camera state and the motion state machine.

use glam::Vec3;

use crate::camera::core::{clamp_fov, CameraState};
use crate::camera::orbit::OrbitJob;
use crate::camera::transition::TransitionJob;
use crate::presets::{CameraPreset, PresetRegistry};
use crate::util::easing::EasingKind;

/// Follow distance used when a tracking preset omits one.
const DEFAULT_FOLLOW_DISTANCE: f32 = 5.0;

/// What the rig is currently doing.
///
/// Legal moves: `Idle → Transitioning → Idle`, `Idle → Orbiting → Idle`
/// (via [`CameraRig::stop_orbit`]), retargeting while transitioning, and
/// preemption in either direction between transitioning and orbiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// No active motion; the state only changes via direct overrides.
    Idle,
    /// An eased transition toward a target state is in flight.
    Transitioning,
    /// The camera is circling a fixed center.
    Orbiting,
}

/// At most one job is active at a time; starting one cancels the other.
#[derive(Debug, Clone, Copy)]
enum Job {
    None,
    Transition(TransitionJob),
    Orbit(OrbitJob),
}

/// Preset-driven camera rig with eased transitions, orbiting, and direct
/// overrides.
///
/// Single-threaded and frame-driven: the host render loop calls
/// [`tick`](Self::tick) once per displayed frame with its millisecond clock
/// (see [`FrameTiming::now_ms`](crate::util::frame_timing::FrameTiming::now_ms))
/// and reads [`state`](Self::state) to position its actual camera object.
/// Nothing here blocks, re-enters, or errors.
#[derive(Debug)]
pub struct CameraRig {
    state: CameraState,
    registry: PresetRegistry,
    job: Job,
    /// Name of the preset last transitioned to, if any. Drives the
    /// tracking behavior of [`follow`](Self::follow).
    active_preset: Option<String>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    /// Rig with the built-in preset registry, idle at the default preset's
    /// viewpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(PresetRegistry::default())
    }

    /// Rig with a caller-supplied registry, idle at its default preset's
    /// viewpoint.
    #[must_use]
    pub fn with_registry(registry: PresetRegistry) -> Self {
        let state = registry.get(crate::presets::DEFAULT_PRESET).state();
        Self {
            state,
            registry,
            job: Job::None,
            active_preset: None,
        }
    }

    /// Read-only snapshot of the live camera state.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Current motion state.
    #[must_use]
    pub fn motion(&self) -> Motion {
        match self.job {
            Job::None => Motion::Idle,
            Job::Transition(_) => Motion::Transitioning,
            Job::Orbit(_) => Motion::Orbiting,
        }
    }

    /// The preset registry backing name lookups.
    #[must_use]
    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// Mutable registry access, for host setup code.
    pub fn registry_mut(&mut self) -> &mut PresetRegistry {
        &mut self.registry
    }

    /// Name of the preset last transitioned to by name, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Start an eased transition to a named preset, using the preset's own
    /// duration and curve. Unknown names resolve to the registry fallback.
    pub fn transition_to_preset(&mut self, name: &str, now_ms: f64) {
        let preset = self.registry.get(name).clone();
        self.active_preset = Some(name.to_owned());
        self.begin_transition(
            preset.state(),
            preset.transition_secs,
            preset.curve,
            now_ms,
        );
    }

    /// Start an eased transition to a preset value with an explicit duration
    /// in seconds. A duration ≤ 0 (or NaN) snaps immediately with no
    /// intermediate frame.
    pub fn transition_to(
        &mut self,
        preset: &CameraPreset,
        duration_secs: f32,
        now_ms: f64,
    ) {
        self.active_preset = None;
        self.begin_transition(preset.state(), duration_secs, preset.curve, now_ms);
    }

    /// Start an eased transition to a fully custom camera state.
    pub fn transition_to_state(
        &mut self,
        to: CameraState,
        duration_secs: f32,
        curve: EasingKind,
        now_ms: f64,
    ) {
        self.active_preset = None;
        self.begin_transition(to, duration_secs, curve, now_ms);
    }

    fn begin_transition(
        &mut self,
        to: CameraState,
        duration_secs: f32,
        curve: EasingKind,
        now_ms: f64,
    ) {
        // NaN and non-positive durations both snap. Starting a job cancels
        // any active orbit, and re-bases a mid-flight transition from the
        // current (possibly partially interpolated) state so there is never
        // a backward jump.
        if duration_secs.is_nan() || duration_secs <= 0.0 {
            log::debug!("camera snap to {:?}", to.position);
            self.state = to;
            self.job = Job::None;
            return;
        }
        log::debug!(
            "camera transition to {:?} over {duration_secs}s",
            to.position
        );
        self.job = Job::Transition(TransitionJob::new(
            self.state,
            to,
            f64::from(duration_secs) * 1000.0,
            curve,
            now_ms,
        ));
    }

    /// Start orbiting around the current target at the given angular speed
    /// in degrees per tick. Cancels any in-flight transition.
    pub fn orbit(&mut self, speed_deg_per_tick: f32) {
        log::debug!(
            "camera orbit around {:?} at {speed_deg_per_tick}°/tick",
            self.state.target
        );
        self.job = Job::Orbit(OrbitJob::from_state(&self.state, speed_deg_per_tick));
    }

    /// Stop orbiting. A no-op when not orbiting.
    pub fn stop_orbit(&mut self) {
        if let Job::Orbit(_) = self.job {
            self.job = Job::None;
        }
    }

    /// Directly set the camera position (non-animated). An active job will
    /// overwrite this on the next tick.
    pub fn set_position(&mut self, position: Vec3) {
        self.state.position = position;
    }

    /// Directly set the look-at target (non-animated).
    pub fn set_target(&mut self, target: Vec3) {
        self.state.target = target;
    }

    /// Directly set the field of view in degrees, clamped into range.
    pub fn set_fov(&mut self, fov: f32) {
        self.state.fov = clamp_fov(fov);
    }

    /// Retarget the camera onto a moving subject (non-animated).
    ///
    /// When the active preset is a tracking preset, the position is also
    /// re-derived at the preset's follow distance behind the subject along
    /// the current view direction; otherwise only the target moves.
    pub fn follow(&mut self, subject: Vec3) {
        self.state.target = subject;
        let Some(name) = self.active_preset.as_deref() else {
            return;
        };
        let preset = self.registry.get(name);
        if !preset.tracking {
            return;
        }
        let distance = preset.follow_distance.unwrap_or(DEFAULT_FOLLOW_DISTANCE);
        let dir = (subject - self.state.position).normalize_or_zero();
        if dir != Vec3::ZERO {
            self.state.position = subject - dir * distance;
        }
    }

    /// Advance the rig by one frame. Called once per displayed frame by the
    /// host render loop with its current clock in milliseconds; strictly
    /// sequential, never re-entrant.
    pub fn tick(&mut self, now_ms: f64) {
        match &mut self.job {
            Job::None => {}
            Job::Transition(job) => {
                let (state, finished) = job.sample(now_ms);
                self.state = state;
                if finished {
                    self.job = Job::None;
                }
            }
            Job::Orbit(job) => {
                job.advance();
                job.apply(&mut self.state);
            }
        }
    }
}
