//! Glint Core - Scene model and scene description support.
//!
//! This crate provides:
//!
//! - **Scene model**: `Scene`, `Sphere`, `Triangle`, `Material`, `CameraAndColorInfo`
//! - **Scene files**: parsing and loading of the line-oriented scene description format
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.rtf")?;
//! println!("Loaded {} spheres, {} triangles",
//!     scene.sphere_count(),
//!     scene.triangle_count());
//! ```

pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use scene::{CameraAndColorInfo, Color, Material, Scene, Sphere, Triangle};
pub use scene_file::{
    load_scene, load_scene_strict, parse_scene, parse_scene_strict, LoadError, LoadResult, ParseError, ParseResult,
};
