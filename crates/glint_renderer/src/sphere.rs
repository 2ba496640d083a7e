//! Ray-sphere intersection.

use crate::hittable::{HitRecord, Hittable};
use glint_core::Sphere;
use glint_math::{Interval, Ray};

impl Hittable for Sphere {
    /// Solves `|O + tD - C|^2 = r^2` assuming a unit-length `D`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let oc = ray.origin() - self.center();
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius2();

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-b - sqrtd) / 2.0;
        if !ray_t.surrounds(root) {
            root = (-b + sqrtd) / 2.0;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = ray.at(root);
        rec.normal = self.normal_at(rec.p);
        rec.material = self.material();

        true
    }
}
