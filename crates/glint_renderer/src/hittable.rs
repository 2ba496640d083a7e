//! Hittable trait and HitRecord for ray-object intersection.

use glint_core::Material;
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Debug)]
pub struct HitRecord<'a> {
    /// Point of intersection, `origin + direction * t`
    pub p: Vec3,
    /// Unit surface normal used for shading
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: &Material::BLACK,
            t: f32::INFINITY,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object with `t` strictly inside `ray_t`.
    ///
    /// Returns true if hit, and fills in the hit record. On a miss the
    /// record is left untouched.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;
}
