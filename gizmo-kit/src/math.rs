//! Mathematical utilities for gizmo-kit
//!
//! Screen-space helpers (ray unprojection and pixel-size compensation) and the
//! scalar helpers shared by the drag math.

use crate::mat::Mat4Like;
use crate::types::{Quat, Ray, Vec2, Vec3, Vec4};
use crate::{GizmoError, GizmoResult};

/// Check whether `value` is within `tolerance` of zero
pub fn is_almost_zero(value: f32, tolerance: f32) -> bool {
    value.abs() <= tolerance
}

/// Round `value` to the nearest multiple of `snap`.
///
/// A `snap` of zero disables snapping and returns `value` unchanged.
pub fn snap_to(value: f32, snap: f32) -> f32 {
    if snap == 0.0 {
        value
    } else {
        (value / snap).round() * snap
    }
}

/// Signed angle that rotates `from` onto `to` about `axis`.
///
/// Both vectors are expected to lie in the plane perpendicular to `axis`; the
/// result is in `(-PI, PI]` and follows the right-hand rule around `axis`.
pub fn signed_angle_about_axis(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    let sin = from.cross(to).dot(axis);
    let cos = from.dot(to);
    sin.atan2(cos)
}

/// Rebuild a rotation with its angle rounded to a multiple of `snap` radians.
///
/// Goes through axis-angle decomposition, so the rotation axis is preserved.
pub fn snap_rotation(rotation: Quat, snap: f32) -> Quat {
    if snap == 0.0 {
        return rotation;
    }
    let (axis, angle) = rotation.to_axis_angle();
    Quat::from_axis_angle(axis, snap_to(angle, snap))
}

/// World-space size of `target_size` pixels at the position of `world_transform`.
///
/// Multiplying handle dimensions by this factor keeps a gizmo the same size on
/// screen regardless of its distance to the camera. `projection` is usually the
/// view-projection matrix; only the `w` row of it matters.
pub fn compute_scale(
    world_transform: impl Mat4Like,
    target_size: u32,
    projection: impl Mat4Like,
    viewport_size: Vec2,
) -> f32 {
    let pixel_size = 1.0 / viewport_size.y;
    let projected_w = (projection.to_mat4() * world_transform.to_mat4().w_axis).w;
    target_size as f32 * pixel_size * projected_w
}

/// Unproject a screen point into a world-space ray.
///
/// `point` is in pixels with the origin in the bottom-left corner of the
/// viewport. The ray starts on the near plane (NDC z = -1) and points through
/// NDC z = 0; its direction is normalized.
///
/// # Errors
/// Returns [`GizmoError::InvalidViewport`] for empty or non-finite viewports and
/// [`GizmoError::MathOperation`] if the inverse matrices collapse the ray.
pub fn screen_to_ray(
    inv_view: impl Mat4Like,
    inv_projection: impl Mat4Like,
    viewport_size: Vec2,
    point: Vec2,
) -> GizmoResult<Ray> {
    if !viewport_size.is_finite() || viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return Err(GizmoError::invalid_viewport(format!(
            "viewport size must be positive, got {}x{}",
            viewport_size.x, viewport_size.y
        )));
    }

    let inv_view = inv_view.to_mat4();
    let inv_projection = inv_projection.to_mat4();

    // Screen point to normalized -1..1 coordinates
    let ndc = 2.0 * point / viewport_size - Vec2::ONE;
    let ray_start = inv_projection * Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
    let ray_end = inv_projection * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);

    let start_view = homogenize(ray_start);
    let end_view = homogenize(ray_end);

    let origin = inv_view.transform_point3(start_view);
    let direction = inv_view
        .transform_vector3(end_view - start_view)
        .try_normalize()
        .ok_or_else(|| GizmoError::math_operation("unprojected ray has zero length"))?;

    Ok(Ray { origin, direction })
}

fn homogenize(v: Vec4) -> Vec3 {
    if v.w != 0.0 { v.truncate() / v.w } else { v.truncate() }
}
