use glam::{Mat4, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Smallest accepted vertical field of view, in degrees.
pub const FOV_MIN: f32 = 1.0;
/// Largest accepted vertical field of view, in degrees.
pub const FOV_MAX: f32 = 179.0;

/// Live camera pose: position, look-at target, and vertical field of view.
///
/// Owned exclusively by the [`CameraRig`](crate::camera::CameraRig); hosts
/// read copies once per frame and never write it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Vertical field of view in degrees, always within [`FOV_MIN`]..[`FOV_MAX`].
    pub fov: f32,
}

impl CameraState {
    /// Create a camera state, clamping the field of view into range.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3, fov: f32) -> Self {
        Self {
            position,
            target,
            fov: clamp_fov(fov),
        }
    }

    /// Unit vector from the camera toward its target, or zero when the two
    /// coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Build the view matrix (right-handed, Y up).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Build the combined view-projection matrix for the given viewport
    /// aspect ratio and clip planes.
    #[must_use]
    pub fn view_proj_matrix(&self, aspect: f32, proj: &ProjectionOptions) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let projection = Mat4::perspective_rh(
            self.fov.to_radians(),
            aspect,
            proj.znear,
            proj.zfar,
        );
        projection * self.view_matrix()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.7, 5.0),
            target: Vec3::new(0.0, 1.7, 0.0),
            fov: 45.0,
        }
    }
}

/// Clamp a field-of-view value into the accepted degree range.
#[inline]
#[must_use]
pub fn clamp_fov(fov: f32) -> f32 {
    if fov.is_nan() {
        return FOV_MIN;
    }
    fov.clamp(FOV_MIN, FOV_MAX)
}

/// Projection clip-plane parameters supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer layout holding the view-projection matrix and camera
/// metadata, for hosts that upload the rig's pose to a shader.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fov: 45.0,
        }
    }

    /// Update uniform fields from the given camera state.
    pub fn update_view_proj(
        &mut self,
        state: &CameraState,
        aspect: f32,
        proj: &ProjectionOptions,
    ) {
        self.view_proj = state.view_proj_matrix(aspect, proj).to_cols_array_2d();
        self.position = state.position.to_array();
        self.aspect = aspect;
        self.forward = state.forward().to_array();
        self.fov = state.fov;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_fov() {
        let state = CameraState::new(Vec3::ZERO, Vec3::Z, 500.0);
        assert_eq!(state.fov, FOV_MAX);
        let state = CameraState::new(Vec3::ZERO, Vec3::Z, -10.0);
        assert_eq!(state.fov, FOV_MIN);
    }

    #[test]
    fn forward_is_unit_length() {
        let state =
            CameraState::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 45.0);
        let f = state.forward();
        assert!((f.length() - 1.0).abs() < 1e-6);
        assert!((f - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn forward_degenerate_is_zero() {
        let state = CameraState::new(Vec3::ONE, Vec3::ONE, 45.0);
        assert_eq!(state.forward(), Vec3::ZERO);
    }

    #[test]
    fn uniform_tracks_state() {
        let state =
            CameraState::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 60.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&state, 1.5, &ProjectionOptions::default());
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.fov, 60.0);
        assert_eq!(uniform.aspect, 1.5);
    }

    #[test]
    fn clamp_fov_handles_nan() {
        assert_eq!(clamp_fov(f32::NAN), FOV_MIN);
    }
}
