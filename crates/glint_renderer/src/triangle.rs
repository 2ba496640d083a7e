//! Ray-triangle intersection.
//!
//! Intersects the ray with the triangle's plane, then projects the hit point
//! onto the two axes orthogonal to the plane normal's dominant component and
//! classifies it with a crossing-number point-in-polygon test.

use crate::hittable::{HitRecord, Hittable};
use glint_core::Triangle;
use glint_math::{Interval, Ray, Vec2, Vec3Ext};

/// Below this `|n . d|` the ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-8;

impl Hittable for Triangle {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let normal = self.normal();
        let [p1, p2, p3] = self.vertices();

        // Ray is parallel to the plane (or the triangle is degenerate)
        let denom = normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return false;
        }

        let t = normal.dot(p1 - ray.origin()) / denom;
        if !ray_t.surrounds(t) {
            return false;
        }

        let p = ray.at(t);
        let axis = normal.dominant_axis();
        let polygon = [
            p1.project_dropping(axis),
            p2.project_dropping(axis),
            p3.project_dropping(axis),
        ];
        if !crossing_number_contains(p.project_dropping(axis), &polygon) {
            return false;
        }

        rec.t = t;
        rec.p = p;
        // Face the normal back toward the incoming ray
        rec.normal = if denom > 0.0 { -normal } else { normal };
        rec.material = self.material();

        true
    }
}

/// Crossing-number point-in-polygon test in 2D.
///
/// Casts a ray from `point` along +u and counts polygon edges crossing it.
/// An odd count means inside. Vertices with `v == 0` count as above the
/// ray so an edge through a vertex is counted once.
pub fn crossing_number_contains(point: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut crossings = 0usize;
    for i in 0..n {
        let a = polygon[i] - point;
        let b = polygon[(i + 1) % n] - point;

        // Edge must straddle the u axis
        if (a.y < 0.0) == (b.y < 0.0) {
            continue;
        }

        if a.x > 0.0 && b.x > 0.0 {
            crossings += 1;
        } else if a.x > 0.0 || b.x > 0.0 {
            // b.y != a.y here since they have opposite signs
            let u = a.x - a.y * (b.x - a.x) / (b.y - a.y);
            if u > 0.0 {
                crossings += 1;
            }
        }
    }

    crossings % 2 == 1
}
