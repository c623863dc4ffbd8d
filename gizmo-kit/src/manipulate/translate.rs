use super::{axis_plane, drag_hits, ManipulationConfig};
use crate::math::snap_to;
use crate::types::{Ray, Vec3};

/// Drag a position along a single axis.
///
/// Both rays are intersected with a plane that contains the axis and faces
/// the current ray origin. The hit-point difference projected on `axis`,
/// times `config.speed` and snapped to `config.snap`, moves the position.
///
/// Returns `initial_position` when either ray misses the plane.
pub fn translate_along_line(
    axis: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    initial_position: Vec3,
    config: &ManipulationConfig,
) -> Vec3 {
    let Some((initial_hit, current_hit)) = axis_plane(axis, origin, current_ray)
        .and_then(|(normal, distance)| drag_hits(normal, distance, initial_ray, current_ray))
    else {
        crate::gizmo_trace!("translate_along_line: drag ray missed the plane");
        return initial_position;
    };

    let amount = snap_to((current_hit - initial_hit).dot(axis) * config.speed, config.snap);
    initial_position + config.parent_transform.transform_vector3(axis * amount)
}

/// Drag a position within the plane spanned by two axes.
///
/// The axes need not be orthogonal: the hit-point difference is decomposed
/// into `first_axis` and `second_axis` coefficients by solving the 2x2 Gram
/// system, and each coefficient is scaled and snapped on its own.
///
/// Returns `initial_position` when the axes are parallel or either ray misses
/// the plane.
pub fn translate_along_plane(
    first_axis: Vec3,
    second_axis: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    initial_position: Vec3,
    config: &ManipulationConfig,
) -> Vec3 {
    let Some(normal) = first_axis.cross(second_axis).try_normalize() else {
        crate::gizmo_debug!("translate_along_plane: axes {} and {} are parallel", first_axis, second_axis);
        return initial_position;
    };
    let Some((initial_hit, current_hit)) = drag_hits(normal, origin.dot(normal), initial_ray, current_ray) else {
        crate::gizmo_trace!("translate_along_plane: drag ray missed the plane");
        return initial_position;
    };

    let delta = current_hit - initial_hit;
    let (g11, g12, g22) = (
        first_axis.length_squared(),
        first_axis.dot(second_axis),
        second_axis.length_squared(),
    );
    let (r1, r2) = (delta.dot(first_axis), delta.dot(second_axis));
    let determinant = g11 * g22 - g12 * g12;
    let first = snap_to((r1 * g22 - r2 * g12) / determinant * config.speed, config.snap);
    let second = snap_to((r2 * g11 - r1 * g12) / determinant * config.speed, config.snap);

    let offset = first_axis * first + second_axis * second;
    initial_position + config.parent_transform.transform_vector3(offset)
}
