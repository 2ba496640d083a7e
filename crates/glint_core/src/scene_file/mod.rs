//! Scene description files.
//!
//! The format is line oriented: one directive per line, whitespace-separated
//! tokens, keywords are case-sensitive.
//!
//! ## Directives
//!
//! - `FieldOfView <deg>`
//! - `CameraLookAt <x y z>`, `CameraLookFrom <x y z>`, `CameraLookUp <x y z>`
//! - `DirectionToLight <x y z> LightColor <r g b>`
//! - `AmbientLight <r g b>`, `BackgroundColor <r g b>`
//! - `Sphere Center <x y z> Radius <r> Material Diffuse <r g b> SpecularHighlight <r g b> PhongConstant <p> [Reflective <r g b>] [Transparency <t>]`
//! - `Triangle <x y z> <x y z> <x y z> Material Diffuse <r g b> SpecularHighlight <r g b> PhongConstant <p>`
//!
//! Blank lines and lines starting with `#` are skipped. Unknown directives
//! are skipped with a warning.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::scene_file::parse_scene;
//!
//! let scene = parse_scene("FieldOfView 60\nBackgroundColor 0.2 0.2 0.2\n");
//! assert_eq!(scene.info.field_of_view, 60.0);
//! ```

mod loader;
mod parser;

pub use loader::*;
pub use parser::*;
