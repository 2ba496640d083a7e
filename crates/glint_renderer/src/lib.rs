//! Glint Renderer - CPU Ray Casting
//!
//! Casts one primary ray per pixel, finds the nearest sphere or triangle by
//! linear search, and shades it with ambient + diffuse + specular (Phong)
//! lighting and hard shadows from a single directional light.

mod hittable;
mod sphere;
mod triangle;
mod resolver;
mod shading;
mod camera;
mod renderer;
mod bucket;
mod output;

pub use hittable::{HitRecord, Hittable};
pub use triangle::crossing_number_contains;
pub use resolver::{occluded, resolve};
pub use shading::{shade, shadow_factor, SHADOW_BIAS};
pub use camera::ViewWindow;
pub use renderer::{RenderConfig, ImageBuffer, render, render_serial, render_pixel, ray_color, clamp_01, clamp_color, color_to_rgb8};
pub use bucket::{Bucket, BucketResult, generate_buckets, render_bucket, render_parallel, DEFAULT_BUCKET_SIZE};
pub use output::{OutputError, OutputResult, write_ppm, save_ppm, save_png, save_image};

/// Re-export scene and math types used in the public API
pub use glint_core::{CameraAndColorInfo, Color, Material, Scene, Sphere, Triangle};
pub use glint_math::{Interval, Ray, Vec3};
