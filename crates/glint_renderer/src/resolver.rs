//! Nearest-hit resolution over a whole scene.
//!
//! Brute-force linear search: every sphere, then every triangle. A
//! candidate replaces the current best only if it is strictly nearer, so
//! exact ties go to whichever primitive was tested first.

use crate::hittable::{HitRecord, Hittable};
use glint_core::Scene;
use glint_math::{Interval, Ray};

impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        let primitives = self
            .spheres
            .iter()
            .map(|s| s as &dyn Hittable)
            .chain(self.triangles.iter().map(|t| t as &dyn Hittable));

        for object in primitives {
            if object.hit(ray, ray_t.with_max(closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}

/// Find the nearest strictly positive intersection of `ray` with the scene.
///
/// The ray direction should be unit length.
pub fn resolve<'a>(ray: &Ray, scene: &'a Scene) -> Option<HitRecord<'a>> {
    let mut rec = HitRecord::default();
    if scene.hit(ray, Interval::POSITIVE, &mut rec) {
        Some(rec)
    } else {
        None
    }
}

/// True if `ray` hits any primitive at a strictly positive distance.
///
/// Stops at the first hit; there is no maximum distance.
pub fn occluded(ray: &Ray, scene: &Scene) -> bool {
    let mut rec = HitRecord::default();
    scene
        .spheres
        .iter()
        .any(|s| s.hit(ray, Interval::POSITIVE, &mut rec))
        || scene
            .triangles
            .iter()
            .any(|t| t.hit(ray, Interval::POSITIVE, &mut rec))
}
