use super::{drag_hits, ManipulationConfig};
use crate::math::{is_almost_zero, signed_angle_about_axis, snap_rotation};
use crate::types::constants::TRACKBALL_EPSILON;
use crate::types::{Quat, Ray, Vec3};

/// Drag rotation expressed in the parent frame, snapped to multiples of
/// `config.snap` radians.
fn rotation_in_parent(axis: Vec3, angle: f32, config: &ManipulationConfig) -> Quat {
    let axis = config.parent_transform.transform_vector3(axis).try_normalize().unwrap_or(axis);
    snap_rotation(Quat::from_axis_angle(axis, angle), config.snap)
}

/// Turn an orientation about a fixed axis through `origin`.
///
/// Both rays are intersected with the plane perpendicular to `axis`; the
/// signed angle between the two hits, seen from `origin`, times
/// `config.speed` and snapped to multiples of `config.snap` radians, is
/// applied on top of `initial_orientation`.
///
/// Returns `initial_orientation` when either ray misses the plane or lands
/// exactly on `origin`.
pub fn orient_turn(
    axis: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    initial_orientation: Quat,
    config: &ManipulationConfig,
) -> Quat {
    let Some(normal) = axis.try_normalize() else {
        return initial_orientation;
    };
    let Some((initial_hit, current_hit)) = drag_hits(normal, origin.dot(normal), initial_ray, current_ray) else {
        crate::gizmo_trace!("orient_turn: drag ray missed the plane");
        return initial_orientation;
    };
    let (Some(start), Some(target)) = ((initial_hit - origin).try_normalize(), (current_hit - origin).try_normalize())
    else {
        return initial_orientation;
    };

    let angle = signed_angle_about_axis(start, target, normal) * config.speed;
    rotation_in_parent(normal, angle, config) * initial_orientation
}

/// Free trackball rotation driven by the drag length in a plane.
///
/// The in-plane distance between the two hits is the rotation angle in
/// radians; the axis is `plane_normal x drag_direction`, so dragging right
/// on a camera-facing plane rolls the object to the right. Drags shorter than
/// [`TRACKBALL_EPSILON`] leave the orientation unchanged.
pub fn orient_trackball(
    plane_normal: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    initial_orientation: Quat,
    config: &ManipulationConfig,
) -> Quat {
    let Some((initial_hit, current_hit)) = drag_hits(plane_normal, origin.dot(plane_normal), initial_ray, current_ray)
    else {
        crate::gizmo_trace!("orient_trackball: drag ray missed the plane");
        return initial_orientation;
    };

    let delta = current_hit - initial_hit;
    let delta_length = delta.length();
    if is_almost_zero(delta_length, TRACKBALL_EPSILON) {
        return initial_orientation;
    }

    let Some(axis) = plane_normal.cross(delta / delta_length).try_normalize() else {
        return initial_orientation;
    };
    let angle = delta_length * config.speed;
    rotation_in_parent(axis, angle, config) * initial_orientation
}
