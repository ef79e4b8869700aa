//! Frame timing utilities: monotonic clock, FPS measurement, and frame limiting.

use web_time::{Duration, Instant};

/// Frame timing with a monotonic millisecond clock, FPS calculation, and
/// optional frame limiting.
///
/// [`now_ms`](Self::now_ms) is the intended time source for
/// [`CameraRig::tick`](crate::camera::CameraRig::tick): milliseconds since
/// this timer was created, monotonic on native and WASM targets alike.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Timer creation instant; epoch for `now_ms`.
    epoch: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        let now = Instant::now();
        Self {
            target_fps,
            min_frame_duration,
            epoch: now,
            last_frame: now,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Milliseconds elapsed since this timer was created.
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Call at the start of each frame. Returns true if enough time has passed
    /// to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Calculate instantaneous FPS
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
    }

    #[test]
    fn now_ms_is_monotonic() {
        let timing = FrameTiming::new(0);
        let a = timing.now_ms();
        let b = timing.now_ms();
        assert!(b >= a);
        assert!(a >= 0.0);
    }

    #[test]
    fn end_frame_updates_fps() {
        let mut timing = FrameTiming::new(0);
        std::thread::sleep(Duration::from_millis(2));
        timing.end_frame();
        assert!(timing.fps() > 0.0);
    }
}
