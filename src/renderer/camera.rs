//! First-person camera

use glam::{Mat4, Vec3};

use crate::sim::FrameSnapshot;

/// Keeps the view direction off the up axis at full pitch
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view (degrees)
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), aspect.max(1e-3), self.near, self.far)
    }

    pub fn view(eye: Vec3, yaw: f32, pitch: f32) -> Mat4 {
        let dir = crate::look_direction(yaw, pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT));
        Mat4::look_to_rh(eye, dir, Vec3::Y)
    }

    /// Combined view-projection for a frame
    pub fn view_proj(&self, snapshot: &FrameSnapshot, aspect: f32) -> Mat4 {
        self.projection(aspect) * Self::view(snapshot.eye, snapshot.yaw, snapshot.pitch)
    }
}
