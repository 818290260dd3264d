use causeway_common::Viewport;
use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Third-person chase camera.
///
/// z follows the car rigidly at a fixed offset, x eases toward the car at
/// its own rate, and height never changes. Viewport resizes touch only the
/// aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseCamera {
    pub position: Vec3,
    /// Point the camera looks at; always the car after a `follow`.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    height: f32,
    distance: f32,
    smoothing: f32,
}

impl ChaseCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::new(0.0, config.height, config.distance),
            target: Vec3::ZERO,
            fov: config.fov_degrees.to_radians(),
            aspect: Viewport::default().aspect(),
            near: config.near,
            far: config.far,
            height: config.height,
            distance: config.distance,
            smoothing: config.smoothing,
        }
    }

    /// Advance one tick toward the car.
    pub fn follow(&mut self, car: Vec3) {
        self.position.z = car.z + self.distance;
        self.position.x += (car.x - self.position.x) * self.smoothing;
        self.position.y = self.height;
        self.target = car;
    }

    pub fn set_aspect(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
