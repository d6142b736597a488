//! Orbit camera for viewing the particle field.
//!
//! Drag rotates around the target, scroll changes distance; the sketch's
//! event handler owns that mapping. The camera also serves as the projection
//! provider for the interaction probe, turning pointer NDC coordinates into
//! world-space rays.

use glam::{Mat4, Vec2, Vec3};

/// Orbit camera with a perspective projection.
pub struct Camera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Camera {
    /// Create a camera at the reference position: straight down the Z axis,
    /// one unit from the origin.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
            target: Vec3::ZERO,
            fov_y: 70.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Calculate the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Calculate the projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World-space ray through a point given in normalized device
    /// coordinates (x, y ∈ [-1, 1], y up).
    ///
    /// Returns `(origin, direction)` with `direction` normalized. The origin
    /// lies on the near plane.
    pub fn ndc_ray(&self, ndc: Vec2, aspect: f32) -> (Vec3, Vec3) {
        let inverse = self.view_proj(aspect).inverse();
        let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        (near, (far - near).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_position_is_on_z_axis() {
        let camera = Camera::new();
        let position = camera.position();
        assert!((position - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = Camera::new();
        camera.yaw = 1.2;
        camera.pitch = 0.7;
        camera.distance = 3.0;
        assert!((camera.position().distance(camera.target) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::new();
        let (origin, direction) = camera.ndc_ray(Vec2::ZERO, 16.0 / 9.0);
        // Straight toward the origin, i.e. along -Z.
        assert!(direction.distance(Vec3::new(0.0, 0.0, -1.0)) < 1e-4);
        // Origin sits between camera and target, on the near plane.
        assert!(origin.z < 1.0 && origin.z > 0.0);
    }

    #[test]
    fn test_corner_rays_are_normalized_and_diverge() {
        let camera = Camera::new();
        let (_, top_right) = camera.ndc_ray(Vec2::new(1.0, 1.0), 1.5);
        let (_, bottom_left) = camera.ndc_ray(Vec2::new(-1.0, -1.0), 1.5);
        assert!((top_right.length() - 1.0).abs() < 1e-5);
        assert!((bottom_left.length() - 1.0).abs() < 1e-5);
        assert!(top_right.x > 0.0 && top_right.y > 0.0);
        assert!(bottom_left.x < 0.0 && bottom_left.y < 0.0);
    }
}
