//! Tiled parallel rendering.
//!
//! The image is cut into square tiles (buckets) in row-major order. Tiles
//! render independently on the rayon pool and are stitched back into one
//! image, so the result does not depend on scheduling.

use rayon::prelude::*;

use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};
use crate::ViewWindow;
use glint_core::{Color, Scene};

/// Default bucket edge in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular block of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Tile a `width x height` image into buckets of at most `bucket_size`
/// pixels per side. Edge buckets are cropped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| {
                Bucket::new(x, y, size.min(width - x), size.min(height - y))
            })
        })
        .collect()
}

/// Render the pixels of one bucket, row by row.
pub fn render_bucket(bucket: &Bucket, view: &ViewWindow, scene: &Scene) -> Vec<Color> {
    (bucket.y..bucket.y + bucket.height)
        .flat_map(|j| (bucket.x..bucket.x + bucket.width).map(move |i| (i, j)))
        .map(|(i, j)| render_pixel(view, scene, i, j))
        .collect()
}

/// A rendered bucket waiting to be stitched into the frame.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Row-major within the bucket
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the pixels into their place in the full image.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let b = self.bucket;
        if b.width == 0 {
            return;
        }
        for (row, chunk) in self.pixels.chunks_exact(b.width as usize).enumerate() {
            for (col, &color) in chunk.iter().enumerate() {
                image.set(b.x + col as u32, b.y + row as u32, color);
            }
        }
    }
}

/// Render every bucket on the rayon thread pool and stitch the results.
pub fn render_parallel(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let view = ViewWindow::new(&scene.info, config.width, config.height);
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);

    log::debug!(
        "Rendering {} buckets of up to {}x{} pixels on {} threads",
        buckets.len(),
        config.bucket_size,
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, &view, scene)))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        result.write_into(&mut image);
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered_pixels(buckets: &[Bucket]) -> u32 {
        buckets.iter().map(Bucket::pixel_count).sum()
    }

    #[test]
    fn test_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);
        assert_eq!(covered_pixels(&buckets), 128 * 128);
    }

    #[test]
    fn test_edge_buckets_are_cropped() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(
            buckets,
            vec![
                Bucket::new(0, 0, 64, 64),
                Bucket::new(64, 0, 36, 64),
                Bucket::new(0, 64, 64, 6),
                Bucket::new(64, 64, 36, 6),
            ]
        );
    }

    #[test]
    fn test_buckets_cover_each_pixel_once() {
        let (width, height) = (37, 23);
        let mut coverage = vec![0u8; (width * height) as usize];

        for b in generate_buckets(width, height, 8) {
            for y in b.y..b.y + b.height {
                for x in b.x..b.x + b.width {
                    coverage[(y * width + x) as usize] += 1;
                }
            }
        }

        assert!(coverage.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_zero_bucket_size_does_not_hang() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_empty_image_has_no_buckets() {
        assert!(generate_buckets(0, 10, 4).is_empty());
        assert!(generate_buckets(10, 0, 4).is_empty());
    }

    #[test]
    fn test_write_into() {
        let bucket = Bucket::new(1, 1, 2, 2);
        let pixels = vec![Color::X, Color::Y, Color::Z, Color::ONE];
        let mut image = ImageBuffer::new(3, 3);

        BucketResult::new(bucket, pixels).write_into(&mut image);
        assert_eq!(image.get(1, 1), Color::X);
        assert_eq!(image.get(2, 1), Color::Y);
        assert_eq!(image.get(1, 2), Color::Z);
        assert_eq!(image.get(2, 2), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
    }
}
