//! Continuous circular motion around a focus point.

use glam::Vec3;

use crate::camera::core::CameraState;

/// An active orbit around a fixed center.
///
/// Derived from the camera pose at the moment the orbit starts: the current
/// target becomes the center, the XZ-plane distance to it the radius, and
/// the current world height is held constant. Destroyed when stopped or
/// preempted by a transition.
#[derive(Debug, Clone, Copy)]
pub struct OrbitJob {
    /// Fixed focus point the camera circles and looks at.
    pub center: Vec3,
    /// Constant orbit radius in the XZ plane.
    pub radius: f32,
    /// Constant camera height (world Y).
    pub height: f32,
    /// Current orbit angle in radians.
    pub angle: f32,
    /// Angle increment per tick, in radians.
    pub angular_speed: f32,
}

impl OrbitJob {
    /// Derive an orbit from the current camera pose.
    ///
    /// `speed_deg_per_tick` is the per-frame angle increment in degrees, as
    /// supplied by UI code; it is converted to radians once here. The initial
    /// angle is chosen so the first tick continues from the camera's current
    /// bearing with no jump.
    #[must_use]
    pub fn from_state(state: &CameraState, speed_deg_per_tick: f32) -> Self {
        let center = state.target;
        let offset = state.position - center;
        let radius = Vec3::new(offset.x, 0.0, offset.z).length();
        // atan2(0, 0) = 0: a camera directly above its target starts at
        // angle zero and spins in place at radius zero.
        let angle = offset.z.atan2(offset.x);
        Self {
            center,
            radius,
            height: state.position.y,
            angle,
            angular_speed: speed_deg_per_tick.to_radians(),
        }
    }

    /// Advance the orbit by one tick.
    pub fn advance(&mut self) {
        self.angle += self.angular_speed;
    }

    /// Camera position for the current angle.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.center.x + self.radius * self.angle.cos(),
            self.height,
            self.center.z + self.radius * self.angle.sin(),
        )
    }

    /// Write the orbit pose into the camera state (position on the circle,
    /// target pinned to the center).
    pub fn apply(&self, state: &mut CameraState) {
        state.position = self.position();
        state.target = self.center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_radius_and_angle_from_pose() {
        let state = CameraState::new(
            Vec3::new(3.0, 2.0, 0.0),
            Vec3::ZERO,
            45.0,
        );
        let job = OrbitJob::from_state(&state, 90.0);
        assert_eq!(job.center, Vec3::ZERO);
        assert!((job.radius - 3.0).abs() < 1e-6);
        assert_eq!(job.height, 2.0);
        assert!(job.angle.abs() < 1e-6);
        assert!((job.angular_speed - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn initial_position_matches_current_pose() {
        let state = CameraState::new(
            Vec3::new(1.0, 4.0, -2.0),
            Vec3::new(0.5, 0.0, 0.5),
            45.0,
        );
        let job = OrbitJob::from_state(&state, 1.0);
        // Before any advance, the parameterized position reproduces the
        // camera's XZ bearing and height exactly.
        assert!((job.position() - state.position).length() < 1e-5);
    }

    #[test]
    fn advance_keeps_constant_radius() {
        let state = CameraState::new(
            Vec3::new(3.0, 2.0, 4.0),
            Vec3::new(1.0, 0.0, 1.0),
            45.0,
        );
        let mut job = OrbitJob::from_state(&state, 7.0);
        for _ in 0..360 {
            job.advance();
            let p = job.position();
            let planar =
                Vec3::new(p.x - job.center.x, 0.0, p.z - job.center.z).length();
            assert!((planar - job.radius).abs() < 1e-4);
            assert_eq!(p.y, 2.0);
        }
    }

    #[test]
    fn quarter_turn_per_tick() {
        let state =
            CameraState::new(Vec3::new(3.0, 2.0, 0.0), Vec3::ZERO, 45.0);
        let mut job = OrbitJob::from_state(&state, 90.0);
        job.advance();
        assert!((job.position() - Vec3::new(0.0, 2.0, 3.0)).length() < 1e-5);
        job.advance();
        assert!((job.position() - Vec3::new(-3.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn degenerate_pose_spins_in_place() {
        let state =
            CameraState::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, 45.0);
        let mut job = OrbitJob::from_state(&state, 10.0);
        assert_eq!(job.radius, 0.0);
        job.advance();
        assert!((job.position() - Vec3::new(0.0, 5.0, 0.0)).length() < 1e-6);
    }
}
