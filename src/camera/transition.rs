//! Eased interpolation from a captured camera state to a target state.

use crate::camera::core::CameraState;
use crate::util::easing::EasingKind;

/// An in-flight camera transition.
///
/// Created by [`CameraRig::transition_to`](crate::camera::CameraRig::transition_to)
/// and destroyed when progress reaches 1.0 or a new transition/orbit preempts
/// it. Position, target, and field of view interpolate independently using
/// the same eased progress.
#[derive(Debug, Clone, Copy)]
pub struct TransitionJob {
    /// Camera state captured when the transition started.
    pub from: CameraState,
    /// Destination state committed exactly at completion.
    pub to: CameraState,
    /// Start timestamp in milliseconds (host render-loop clock).
    pub start_ms: f64,
    /// Duration in milliseconds. May be `+∞`: the job then interpolates
    /// forever at progress 0, which is an accepted boundary condition.
    pub duration_ms: f64,
    /// Easing curve applied to raw progress.
    pub curve: EasingKind,
}

impl TransitionJob {
    /// Create a job starting at `now_ms`. Callers must only construct jobs
    /// with positive durations; non-positive durations snap in the rig
    /// instead of creating a job.
    #[must_use]
    pub fn new(
        from: CameraState,
        to: CameraState,
        duration_ms: f64,
        curve: EasingKind,
        now_ms: f64,
    ) -> Self {
        Self {
            from,
            to,
            start_ms: now_ms,
            duration_ms,
            curve,
        }
    }

    /// Raw (un-eased) progress at `now_ms`, clamped to [0, 1].
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f32 {
        // f64 division handles duration = +∞ (progress stays 0) and ticks
        // that arrive before start_ms (clamped to 0).
        let raw = (now_ms - self.start_ms) / self.duration_ms;
        raw.clamp(0.0, 1.0) as f32
    }

    /// Interpolated camera state at `now_ms`, plus whether the transition
    /// finished. At completion the returned state equals [`to`](Self::to)
    /// exactly, with no residual drift.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> (CameraState, bool) {
        let raw = self.progress(now_ms);
        if raw >= 1.0 {
            return (self.to, true);
        }
        let t = self.curve.evaluate(raw);
        let state = CameraState {
            position: self.from.position.lerp(self.to.position, t),
            target: self.from.target.lerp(self.to.target, t),
            fov: self.from.fov + (self.to.fov - self.from.fov) * t,
        };
        (state, false)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn front() -> CameraState {
        CameraState::new(Vec3::new(0.0, 1.7, 5.0), Vec3::new(0.0, 1.7, 0.0), 45.0)
    }

    fn top() -> CameraState {
        CameraState::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, 60.0)
    }

    #[test]
    fn progress_is_clamped() {
        let job =
            TransitionJob::new(front(), top(), 2000.0, EasingKind::Linear, 0.0);
        assert_eq!(job.progress(-500.0), 0.0);
        assert_eq!(job.progress(0.0), 0.0);
        assert_eq!(job.progress(1000.0), 0.5);
        assert_eq!(job.progress(2000.0), 1.0);
        assert_eq!(job.progress(99_999.0), 1.0);
    }

    #[test]
    fn linear_halfway_sample() {
        // Front→top over 2 s, sampled at 1 s with a linear curve.
        let job =
            TransitionJob::new(front(), top(), 2000.0, EasingKind::Linear, 0.0);
        let (state, finished) = job.sample(1000.0);
        assert!(!finished);
        assert!((state.position - Vec3::new(0.0, 5.85, 2.5)).length() < 1e-4);
        assert!((state.fov - 52.5).abs() < 1e-4);
        assert!((state.target - Vec3::new(0.0, 0.85, 0.0)).length() < 1e-4);
    }

    #[test]
    fn completion_commits_exact_target() {
        let job = TransitionJob::new(
            front(),
            top(),
            300.0,
            EasingKind::EaseInOut,
            100.0,
        );
        let (state, finished) = job.sample(400.0);
        assert!(finished);
        assert_eq!(state, top());
    }

    #[test]
    fn progress_is_monotonic() {
        let job =
            TransitionJob::new(front(), top(), 777.0, EasingKind::EaseOut, 0.0);
        let mut last = -1.0;
        for i in 0..100 {
            let p = job.progress(f64::from(i) * 10.0);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn infinite_duration_never_finishes() {
        let job = TransitionJob::new(
            front(),
            top(),
            f64::INFINITY,
            EasingKind::Linear,
            0.0,
        );
        let (state, finished) = job.sample(1.0e12);
        assert!(!finished);
        assert_eq!(state, front());
    }
}
