//! Analytic ray intersection tests
//!
//! Every test takes a world-space [`Ray`](crate::Ray) and returns
//! `Option<RaycastHit>`. A miss, a ray parallel to the surface and a hit
//! behind the ray origin all come back as `None`; nothing here panics or
//! returns an error. Inputs are not validated, so non-unit axes or a degenerate
//! OBB produce garbage distances rather than failures.

pub mod cone;
pub mod cylinder;
pub mod obb;
pub mod plane;
pub mod sphere;

pub use cone::intersect_ray_cone;
pub use cylinder::{intersect_ray_cylinder, intersect_ray_cylinder_uncapped};
pub use obb::intersect_ray_obb;
pub use plane::intersect_ray_plane;
pub use sphere::intersect_ray_sphere;

use crate::types::RaycastHit;

/// Keep whichever of two optional hits is closer to the ray origin.
///
/// Ties keep `current`, so the first tested volume wins on equal distance.
pub fn closest_hit(current: Option<RaycastHit>, candidate: Option<RaycastHit>) -> Option<RaycastHit> {
    match (current, candidate) {
        (Some(a), Some(b)) if b.distance < a.distance => Some(b),
        (Some(a), _) => Some(a),
        (None, b) => b,
    }
}

/// Same reduction as [`closest_hit`] for bare distances.
pub fn closest_distance(current: Option<f32>, candidate: Option<f32>) -> Option<f32> {
    match (current, candidate) {
        (Some(a), Some(b)) if b < a => Some(b),
        (Some(a), _) => Some(a),
        (None, b) => b,
    }
}

/// Pick the handle whose test reported the nearest distance.
///
/// `candidates` pairs a caller-defined handle id with the result of its
/// intersection test, e.g. `(Axis::X, intersect_arrow_3d(...))`.
///
/// ```
/// use gizmo_kit::intersection::pick_closest;
/// let picked = pick_closest([("x", Some(4.0)), ("y", None), ("z", Some(2.5))]);
/// assert_eq!(picked, Some(("z", 2.5)));
/// ```
pub fn pick_closest<T>(candidates: impl IntoIterator<Item = (T, Option<f32>)>) -> Option<(T, f32)> {
    let mut best: Option<(T, f32)> = None;
    for (handle, distance) in candidates {
        let Some(distance) = distance else {
            continue;
        };
        match &best {
            Some((_, best_distance)) if *best_distance <= distance => {}
            _ => best = Some((handle, distance)),
        }
    }
    best
}
