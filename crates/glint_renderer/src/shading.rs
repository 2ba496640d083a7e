//! Local illumination: ambient + diffuse + specular (Phong) with hard shadows.

use crate::hittable::HitRecord;
use crate::resolver::occluded;
use glint_core::{Color, Scene};
use glint_math::{Ray, Vec3, Vec3Ext};

/// Offset along the normal for shadow ray origins, avoids self-intersection.
pub const SHADOW_BIAS: f32 = 1e-4;

/// Compute the color for a resolved hit (or the background for a miss).
///
/// `color = kd * ambient + shadow * light * (kd * max(0, N.L) + ks * max(0, -D.R)^phong)`
/// where `R = 2N(N.L) - L`. No secondary bounces are traced.
pub fn shade(hit: Option<&HitRecord>, ray: &Ray, scene: &Scene) -> Color {
    let info = &scene.info;

    let Some(rec) = hit else {
        return info.background_color;
    };

    let material = rec.material;
    let n = rec.normal;
    let l = info.direction_to_light;

    let ambient = material.diffuse * info.ambient_light;

    let shadow = shadow_factor(rec.p, n, l, scene);
    if shadow == 0.0 {
        return ambient;
    }

    let n_dot_l = n.dot(l);
    let reflected = n * 2.0 * n_dot_l - l;

    let diffuse = material.diffuse * n_dot_l.max(0.0);
    let specular = material.specular_highlight
        * (-ray.direction())
            .dot(reflected)
            .max(0.0)
            .powf(material.phong_constant);

    ambient + info.light_color * (diffuse + specular) * shadow
}

/// 0.0 if anything blocks the way from `p` toward the light, else 1.0.
///
/// The shadow ray starts slightly above the surface along `normal` and is
/// not bounded in distance (the light is directional).
pub fn shadow_factor(p: Vec3, normal: Vec3, direction_to_light: Vec3, scene: &Scene) -> f32 {
    let shadow_ray = Ray::new(
        p + normal * SHADOW_BIAS,
        direction_to_light.normalize_or_self(),
    );

    if occluded(&shadow_ray, scene) {
        0.0
    } else {
        1.0
    }
}
