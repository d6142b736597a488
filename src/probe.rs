//! Pointer interaction probe.
//!
//! Pointer-move events arrive between frames and land in a single-slot
//! mailbox (last write wins — only the newest position matters). Once per
//! frame the probe casts a ray from the camera through the stored NDC
//! coordinates against a fixed reference plane at z = 0 and records the
//! intersection point, which the simulation pass reads as the repulsion
//! source.
//!
//! The plane is sized to cover everything the camera can see of the field
//! in the reference configuration, so a miss should not happen; if one does
//! (parallel ray, hit behind the camera, hit off the plane), the previous
//! intersection is simply kept.

use glam::{Vec2, Vec3};

use crate::camera::Camera;

/// Half-extent of the reference plane: it spans [-5, 5] on X and Y.
pub const PLANE_HALF_EXTENT: f32 = 5.0;

/// Converts pointer positions into a repulsion source on the z = 0 plane.
#[derive(Debug)]
pub struct PointerProbe {
    /// Latest pointer position in NDC; `None` until the pointer first moves.
    ndc: Option<Vec2>,
    /// Latest plane intersection.
    intersection: Vec3,
}

impl PointerProbe {
    /// Create a probe with the intersection parked at the origin.
    pub fn new() -> Self {
        Self {
            ndc: None,
            intersection: Vec3::ZERO,
        }
    }

    /// Store a pointer position in normalized device coordinates.
    ///
    /// Overwrites any position stored since the last frame; events are not
    /// queued.
    pub fn set_ndc(&mut self, ndc: Vec2) {
        self.ndc = Some(ndc);
    }

    /// Convert a pixel-space pointer position to NDC (y up).
    pub fn ndc_from_pixels(x: f64, y: f64, width: u32, height: u32) -> Vec2 {
        Vec2::new(
            (x / width.max(1) as f64 * 2.0 - 1.0) as f32,
            (1.0 - y / height.max(1) as f64 * 2.0) as f32,
        )
    }

    /// Cast the stored pointer against the reference plane.
    ///
    /// Called once per frame before the simulation pass. Keeps the previous
    /// intersection when there is nothing new to cast or the ray misses.
    pub fn update(&mut self, camera: &Camera, aspect: f32) {
        let Some(ndc) = self.ndc else {
            return;
        };

        let (origin, direction) = camera.ndc_ray(ndc, aspect);
        if direction.z.abs() < 1e-6 {
            return;
        }

        let t = -origin.z / direction.z;
        if t <= 0.0 {
            return;
        }

        let x = origin.x + direction.x * t;
        let y = origin.y + direction.y * t;
        if x.abs() > PLANE_HALF_EXTENT || y.abs() > PLANE_HALF_EXTENT {
            return;
        }

        self.intersection = Vec3::new(x, y, 0.0);
    }

    /// The most recent plane intersection.
    #[inline]
    pub fn intersection(&self) -> Vec3 {
        self.intersection
    }
}

impl Default for PointerProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_idle_probe_stays_at_origin() {
        let mut probe = PointerProbe::new();
        probe.update(&Camera::new(), 1.0);
        assert_eq!(probe.intersection(), Vec3::ZERO);
    }

    #[test]
    fn test_intersection_lies_on_plane() {
        let mut probe = PointerProbe::new();
        probe.set_ndc(Vec2::new(0.35, -0.6));
        probe.update(&Camera::new(), 16.0 / 9.0);

        let hit = probe.intersection();
        assert_eq!(hit.z, 0.0);
        // The reference camera sits on +Z looking at the origin, so the hit
        // shares the pointer's quadrant.
        assert!(hit.x > 0.0);
        assert!(hit.y < 0.0);
    }

    #[test]
    fn test_center_pointer_hits_origin() {
        let mut probe = PointerProbe::new();
        probe.set_ndc(Vec2::ZERO);
        probe.update(&Camera::new(), 1.0);
        assert!(probe.intersection().length() < 1e-4);
    }

    #[test]
    fn test_mailbox_keeps_only_latest_position() {
        let mut probe = PointerProbe::new();
        probe.set_ndc(Vec2::new(-0.9, -0.9));
        probe.set_ndc(Vec2::new(0.5, 0.5));
        probe.update(&Camera::new(), 1.0);

        let hit = probe.intersection();
        assert!(hit.x > 0.0 && hit.y > 0.0);
    }

    #[test]
    fn test_parallel_ray_keeps_previous_intersection() {
        let mut probe = PointerProbe::new();
        probe.set_ndc(Vec2::ZERO);
        probe.update(&Camera::new(), 1.0);
        let first = probe.intersection();

        // Camera orbiting a target on the plane's level, looking along the
        // plane: the center ray never crosses z = 0.
        let mut sideways = Camera::new();
        sideways.target = Vec3::new(0.0, 0.0, 1.0);
        sideways.yaw = FRAC_PI_2;
        probe.set_ndc(Vec2::ZERO);
        probe.update(&sideways, 1.0);

        assert_eq!(probe.intersection(), first);
    }

    #[test]
    fn test_plane_behind_camera_keeps_previous_intersection() {
        let mut probe = PointerProbe::new();
        probe.set_ndc(Vec2::new(0.2, 0.2));
        probe.update(&Camera::new(), 1.0);
        let first = probe.intersection();

        // Camera behind the plane, looking further away from it: the hit
        // parameter along the ray is negative.
        let mut away = Camera::new();
        away.target = Vec3::new(0.0, 0.0, -2.0);
        probe.set_ndc(Vec2::ZERO);
        probe.update(&away, 1.0);

        assert_eq!(probe.intersection(), first);
    }

    #[test]
    fn test_hit_outside_plane_extent_keeps_previous_intersection() {
        let mut probe = PointerProbe::new();
        probe.set_ndc(Vec2::ZERO);
        probe.update(&Camera::new(), 1.0);
        let first = probe.intersection();

        // An absurdly wide aspect pushes the edge ray far past the plane's
        // half-extent by the time it reaches z = 0.
        probe.set_ndc(Vec2::new(1.0, 0.0));
        probe.update(&Camera::new(), 50.0);

        assert_eq!(probe.intersection(), first);
    }

    #[test]
    fn test_ndc_from_pixels_maps_corners() {
        let top_left = PointerProbe::ndc_from_pixels(0.0, 0.0, 800, 600);
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));

        let bottom_right = PointerProbe::ndc_from_pixels(800.0, 600.0, 800, 600);
        assert_eq!(bottom_right, Vec2::new(1.0, -1.0));

        let center = PointerProbe::ndc_from_pixels(400.0, 300.0, 800, 600);
        assert_eq!(center, Vec2::ZERO);
    }
}
