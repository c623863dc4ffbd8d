//! Ray / finite cone intersection
//!
//! The implicit equation `(p·n)² = cos²θ |p|²` (with `p` relative to the apex)
//! describes a double cone. Restricting accepted points to an axial height in
//! `[0, height]` keeps only the nappe that opens along `direction` and cuts it
//! at the base disk.

use crate::intersection::{closest_hit, intersect_ray_plane};
use crate::types::constants::EPSILON;
use crate::types::{Ray, RaycastHit, Vec3};

/// Intersect a ray with a solid cone.
///
/// * `vertex` - apex of the cone
/// * `direction` - unit axis, pointing from the apex towards the base
/// * `angle_cos` - cosine of the half-angle at the apex
/// * `height` - distance from the apex to the base along the axis
///
/// Both the lateral surface and the base disk are tested; the nearer wins.
pub fn intersect_ray_cone(
    ray: Ray,
    vertex: Vec3,
    direction: Vec3,
    angle_cos: f32,
    height: f32,
) -> Option<RaycastHit> {
    let ray_origin = ray.origin - vertex;
    let angle_cos_squared = angle_cos * angle_cos;

    let ray_dir_prim_len = ray.direction.dot(direction);
    let ray_origin_prim_len = ray_origin.dot(direction);

    let a = ray_dir_prim_len * ray_dir_prim_len - angle_cos_squared * ray.direction.length_squared();
    let b = 2.0
        * (ray_dir_prim_len * ray_origin_prim_len - angle_cos_squared * ray_origin.dot(ray.direction));
    let c = ray_origin_prim_len * ray_origin_prim_len - angle_cos_squared * ray_origin.length_squared();

    let within_height = |t: f32| {
        let point_height = (ray_origin + ray.direction * t).dot(direction);
        point_height >= 0.0 && point_height <= height
    };

    let lateral = if a.abs() > EPSILON {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let sqrt_discriminant = discriminant.sqrt();
            let t1 = 0.5 * (-b - sqrt_discriminant) / a;
            let t2 = 0.5 * (-b + sqrt_discriminant) / a;
            [t1, t2]
                .into_iter()
                .filter(|&t| t >= 0.0 && within_height(t))
                .map(|t| RaycastHit::at(&ray, t))
                .fold(None, |best, hit| closest_hit(best, Some(hit)))
        } else {
            None
        }
    } else if b.abs() > EPSILON {
        // Ray is parallel to a generating line of the cone
        let t = -c / b;
        (t >= 0.0 && within_height(t)).then(|| RaycastHit::at(&ray, t))
    } else if c.abs() > EPSILON {
        // Parallel to a generating line but off the surface
        None
    } else if (0.0..=height).contains(&ray_origin_prim_len) {
        // Ray runs along the cone boundary and starts on it
        crate::gizmo_trace!("ray origin lies on the cone boundary");
        Some(RaycastHit::at(&ray, 0.0))
    } else {
        // Foot of the perpendicular from the apex onto the ray
        let t = -ray_origin.dot(ray.direction);
        (t >= 0.0).then(|| RaycastHit::at(&ray, t))
    };

    // Base disk at `height` along the axis
    let base_radius_squared_scaled = height * height * (1.0 - angle_cos_squared);
    let base = intersect_ray_plane(Ray::new(ray_origin, ray.direction), direction, height)
        .filter(|hit| {
            let radial = hit.hit_point - hit.hit_point.dot(direction) * direction;
            radial.length_squared() * angle_cos_squared <= base_radius_squared_scaled
        })
        .map(|hit| RaycastHit::at(&ray, hit.distance));

    closest_hit(lateral, base)
}
