//! Core ray casting renderer.
//!
//! One primary ray per pixel, nearest hit, local Phong shading with hard
//! shadows. Every pixel is a pure function of its coordinates and the
//! immutable scene.

use crate::bucket::{render_parallel, DEFAULT_BUCKET_SIZE};
use crate::{resolve, shade, ViewWindow};
use glint_core::{Color, Scene};
use glint_math::{Interval, Ray};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Tile size for parallel rendering
    pub bucket_size: u32,
    /// Render buckets on the rayon thread pool instead of a single loop
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 514,
            height: 513,
            bucket_size: DEFAULT_BUCKET_SIZE,
            parallel: true,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set bucket size. Zero is bumped to one.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size.max(1);
        self
    }

    /// Choose between parallel bucket rendering and a single loop.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Compute the (unclamped) color seen by a ray.
pub fn ray_color(ray: &Ray, scene: &Scene) -> Color {
    let hit = resolve(ray, scene);
    shade(hit.as_ref(), ray, scene)
}

/// Clamp a channel to [0, 1]. NaN maps to 0.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        Interval::UNIT.clamp(x)
    }
}

/// Clamp every channel of a color to [0, 1].
pub fn clamp_color(color: Color) -> Color {
    Color::new(clamp_01(color.x), clamp_01(color.y), clamp_01(color.z))
}

/// Convert a color to 8-bit RGB (clamp, scale by 255, truncate).
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = clamp_color(color);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}

/// Render a single pixel, clamped to [0, 1].
pub fn render_pixel(view: &ViewWindow, scene: &Scene, i: u32, j: u32) -> Color {
    let ray = view.get_ray(i, j);
    clamp_color(ray_color(&ray, scene))
}

/// Render output: a row-major grid of clamped colors.
///
/// Row `j = 0` is the bottom of the view window (lowest v).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to 8-bit RGB bytes with the top row (highest v) first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                bytes.extend_from_slice(&color_to_rgb8(self.get(x, y)));
            }
        }
        bytes
    }
}

/// Render the entire scene with a single loop, row by row.
pub fn render_serial(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let view = ViewWindow::new(&scene.info, config.width, config.height);
    let mut image = ImageBuffer::new(config.width, config.height);

    for j in 0..config.height {
        for i in 0..config.width {
            image.set(i, j, render_pixel(&view, scene, i, j));
        }
    }

    image
}

/// Render the entire scene to an image buffer.
///
/// Dispatches to parallel bucket rendering or the serial loop per
/// `config.parallel`. Both produce identical images.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    log::info!(
        "Rendering {}x{} ({} primitives, {})",
        config.width,
        config.height,
        scene.primitive_count(),
        if config.parallel { "parallel" } else { "serial" }
    );

    if config.parallel {
        render_parallel(scene, config)
    } else {
        render_serial(scene, config)
    }
}
