//! Viewport-to-world projection for a camera looking down +Z.
//!
//! Viewport coordinates are normalized: `(0, 0)` is the bottom-left corner of
//! the screen, `(1, 1)` the top-right, and `z` is the distance in front of the
//! camera.

use glam::Vec3;

/// Maps normalized screen coordinates to world space
pub trait ViewportProjector {
    fn camera_position(&self) -> Vec3;

    fn viewport_to_world(&self, viewport: Vec3) -> Vec3;

    /// Distance from the camera to an object's depth plane
    fn object_depth(&self, object_z: f32) -> f32 {
        object_z - self.camera_position().z
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OrthographicProjector {
    pub position: Vec3,
    pub half_height: f32, // orthographic size
    pub aspect: f32,      // width / height
}

impl OrthographicProjector {
    pub fn new(position: Vec3, half_height: f32, aspect: f32) -> Self {
        Self {
            position,
            half_height,
            aspect,
        }
    }
}

impl ViewportProjector for OrthographicProjector {
    fn camera_position(&self) -> Vec3 {
        self.position
    }

    fn viewport_to_world(&self, viewport: Vec3) -> Vec3 {
        let half_width = self.half_height * self.aspect;
        Vec3::new(
            self.position.x + (viewport.x * 2.0 - 1.0) * half_width,
            self.position.y + (viewport.y * 2.0 - 1.0) * self.half_height,
            self.position.z + viewport.z,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PerspectiveProjector {
    pub position: Vec3,
    pub fov_y: f32, // vertical field of view, radians
    pub aspect: f32,
}

impl PerspectiveProjector {
    pub fn new(position: Vec3, fov_y: f32, aspect: f32) -> Self {
        Self {
            position,
            fov_y,
            aspect,
        }
    }
}

impl ViewportProjector for PerspectiveProjector {
    fn camera_position(&self) -> Vec3 {
        self.position
    }

    fn viewport_to_world(&self, viewport: Vec3) -> Vec3 {
        // Frustum widens linearly with depth
        let half_height = viewport.z * (self.fov_y * 0.5).tan();
        let half_width = half_height * self.aspect;
        Vec3::new(
            self.position.x + (viewport.x * 2.0 - 1.0) * half_width,
            self.position.y + (viewport.y * 2.0 - 1.0) * half_height,
            self.position.z + viewport.z,
        )
    }
}
