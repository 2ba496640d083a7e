//! Scene model for Glint.
//!
//! A `Scene` is built once (by the scene file parser or programmatically)
//! and is read-only afterwards. The renderer only ever borrows it.

use glint_math::{Vec3, Vec3Ext};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface properties used by the Phong lighting model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse color (RGB, 0-1)
    pub diffuse: Color,

    /// Color of the specular highlight
    pub specular_highlight: Color,

    /// Phong exponent; larger values give tighter highlights
    pub phong_constant: f32,
}

impl Material {
    /// A black material with no highlight.
    pub const BLACK: Material = Material {
        diffuse: Color::ZERO,
        specular_highlight: Color::ZERO,
        phong_constant: 1.0,
    };

    /// Create a new material.
    pub fn new(diffuse: Color, specular_highlight: Color, phong_constant: f32) -> Self {
        Self {
            diffuse,
            specular_highlight,
            phong_constant,
        }
    }

    /// A purely diffuse material (no specular highlight).
    pub fn diffuse(diffuse: Color) -> Self {
        Self::new(diffuse, Color::ZERO, 1.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    radius2: f32,
    material: Material,

    /// Reflective tint. Parsed and stored, not used by the lighting model.
    pub reflective: Color,

    /// Transparency. Parsed and stored, not used by the lighting model.
    pub transparency: Option<f32>,
}

impl Sphere {
    /// Create a new sphere. A negative radius describes the same surface as
    /// its magnitude.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        let radius = radius.abs();
        Self {
            center,
            radius,
            radius2: radius * radius,
            material,
            reflective: Color::ZERO,
            transparency: None,
        }
    }

    /// Set the reflective tint.
    pub fn with_reflective(mut self, reflective: Color) -> Self {
        self.reflective = reflective;
        self
    }

    /// Set the transparency.
    pub fn with_transparency(mut self, transparency: f32) -> Self {
        self.transparency = Some(transparency);
        self
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Squared radius, cached at construction.
    #[inline]
    pub fn radius2(&self) -> f32 {
        self.radius2
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.center).normalize_or_self()
    }
}

/// A triangle primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    /// Vertices
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    /// Plane normal, `normalize((p2 - p1) x (p3 - p1))`
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The plane normal follows the winding order of the vertices. For a
    /// degenerate (collinear) triangle the normal is the zero vector.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, material: Material) -> Self {
        let edge1 = p2 - p1;
        let edge2 = p3 - p1;
        let normal = edge1.cross(edge2).normalize_or_self();

        Self {
            p1,
            p2,
            p3,
            normal,
            material,
        }
    }

    /// The three vertices in order.
    #[inline]
    pub fn vertices(&self) -> [Vec3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Unit plane normal in winding order (zero for degenerate triangles).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Whether the vertices are collinear (zero area).
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }
}

/// Camera placement and scene-wide lighting.
///
/// Only `camera_look_from` positions the camera. The view is always
/// axis-aligned looking down -Z; `camera_look_at` and `camera_look_up` are
/// kept so a scene round-trips faithfully.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraAndColorInfo {
    pub camera_look_at: Vec3,
    pub camera_look_from: Vec3,
    pub camera_look_up: Vec3,

    /// Field of view in degrees
    pub field_of_view: f32,

    /// Direction toward the (infinitely distant) light. Used as given.
    pub direction_to_light: Vec3,
    pub light_color: Color,
    pub ambient_light: Color,
    pub background_color: Color,
}

impl Default for CameraAndColorInfo {
    fn default() -> Self {
        Self {
            camera_look_at: Vec3::NEG_Z,
            camera_look_from: Vec3::ZERO,
            camera_look_up: Vec3::Y,
            field_of_view: 45.0,
            direction_to_light: Vec3::ZERO,
            light_color: Color::ZERO,
            ambient_light: Color::ZERO,
            background_color: Color::ZERO,
        }
    }
}

/// A complete scene: primitives plus camera and lighting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Spheres, in file order
    pub spheres: Vec<Sphere>,

    /// Triangles, in file order
    pub triangles: Vec<Triangle>,

    pub info: CameraAndColorInfo,
}

impl Scene {
    /// Create an empty scene with default camera and lighting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene with the given camera and lighting.
    pub fn with_info(info: CameraAndColorInfo) -> Self {
        Self {
            info,
            ..Default::default()
        }
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Total number of primitives.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.triangles.len()
    }

    /// True if the scene has no primitives (renders as solid background).
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
