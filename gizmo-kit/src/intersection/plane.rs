//! Ray / plane intersection

use crate::types::constants::EPSILON;
use crate::types::{Ray, RaycastHit, Vec3};

/// Intersect a ray with the plane `dot(p, plane_normal) = plane_distance`.
///
/// `plane_normal` must be normalized. A ray whose direction is within
/// [`EPSILON`] of parallel to the plane is a miss, even when it lies inside the
/// plane. Hits behind the ray origin are rejected.
pub fn intersect_ray_plane(ray: Ray, plane_normal: Vec3, plane_distance: f32) -> Option<RaycastHit> {
    let angle_cos = ray.direction.dot(plane_normal);
    if angle_cos.abs() <= EPSILON {
        crate::gizmo_trace!("ray parallel to plane (cos = {})", angle_cos);
        return None;
    }

    let t = (plane_distance - ray.origin.dot(plane_normal)) / angle_cos;
    if t >= 0.0 { Some(RaycastHit::at(&ray, t)) } else { None }
}
