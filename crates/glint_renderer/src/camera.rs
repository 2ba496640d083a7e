//! View window for primary ray generation.
//!
//! The camera is axis-aligned: the eye sits at `camera_look_from` looking
//! down -Z with +Y up, and the view window is the square `[-e, e]^2` on the
//! plane one unit in front of the eye, `e = tan(fov)`.

use glint_core::CameraAndColorInfo;
use glint_math::{Ray, Vec3, Vec3Ext};

/// Maps pixel coordinates to primary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    eye: Vec3,
    /// Half-size of the window at distance 1
    extent: f32,
    width: u32,
    height: u32,
}

impl ViewWindow {
    /// Create a view window for an image of `width x height` pixels.
    pub fn new(info: &CameraAndColorInfo, width: u32, height: u32) -> Self {
        let extent = info.field_of_view.to_radians().tan();

        Self {
            eye: info.camera_look_from,
            extent,
            width,
            height,
        }
    }

    /// Half-size of the view window.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Window coordinates `(u, v)` of the center of pixel `(i, j)`.
    ///
    /// `i = 0` maps near `u = -extent`, `j = 0` near `v = -extent`.
    pub fn window_coords(&self, i: u32, j: u32) -> (f32, f32) {
        let x = i as f32 + 0.5;
        let y = j as f32 + 0.5;

        let u = x * (2.0 * self.extent / self.width as f32) - self.extent;
        let v = y * (2.0 * self.extent / self.height as f32) - self.extent;
        (u, v)
    }

    /// Generate the primary ray for pixel `(i, j)` (unit-length direction).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let (u, v) = self.window_coords(i, j);
        let direction = (Vec3::new(u, v, 0.0) - Vec3::Z).normalize_or_self();
        Ray::new(self.eye, direction)
    }
}
