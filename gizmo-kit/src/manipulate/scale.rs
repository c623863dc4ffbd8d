use super::{axis_plane, drag_hits, ManipulationConfig};
use crate::math::snap_to;
use crate::types::constants::EPSILON;
use crate::types::{Ray, Vec3};

/// Ratio of the current drag offset to the initial one, measured from the
/// gizmo origin. Negative once the drag crosses over to the other side of
/// the origin. `None` when the drag started on the origin itself.
///
/// Speed and snap act on the change `factor - 1`, so a drag that has not
/// moved always yields exactly `1`.
fn drag_factor(initial_offset: Vec3, current_offset: Vec3, config: &ManipulationConfig) -> Option<f32> {
    let initial_length = initial_offset.length();
    if initial_length <= EPSILON {
        return None;
    }

    let mut factor = current_offset.length() / initial_length;
    if initial_offset.dot(current_offset) < 0.0 {
        factor = -factor;
    }
    Some(1.0 + snap_to((factor - 1.0) * config.speed, config.snap))
}

/// Scale only the components selected by `mask`; a weight of zero leaves the
/// component untouched.
fn apply_masked(initial_scale: Vec3, factor: f32, mask: Vec3) -> Vec3 {
    initial_scale * (Vec3::ONE + (factor - 1.0) * mask)
}

fn line_factor(axis: Vec3, origin: Vec3, initial_ray: Ray, current_ray: Ray, config: &ManipulationConfig) -> Option<f32> {
    let (normal, distance) = axis_plane(axis, origin, current_ray)?;
    let (initial_hit, current_hit) = drag_hits(normal, distance, initial_ray, current_ray)?;
    let project = |hit: Vec3| axis * (hit - origin).dot(axis);
    drag_factor(project(initial_hit), project(current_hit), config)
}

fn plane_factor(
    first_axis: Vec3,
    second_axis: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    config: &ManipulationConfig,
) -> Option<f32> {
    let normal = first_axis.cross(second_axis).try_normalize()?;
    let (initial_hit, current_hit) = drag_hits(normal, origin.dot(normal), initial_ray, current_ray)?;
    drag_factor(initial_hit - origin, current_hit - origin, config)
}

/// Scale the components of `initial_scale` selected by `axis`.
///
/// The drag factor is how far the cursor now sits from `origin` along the
/// axis compared to where the drag started. Components are weighted by
/// `|axis|`, so a unit x axis scales only `x`.
///
/// Returns `initial_scale` when either ray misses the plane or the drag
/// started on the origin.
pub fn scale_along_line(
    axis: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    initial_scale: Vec3,
    config: &ManipulationConfig,
) -> Vec3 {
    match line_factor(axis, origin, initial_ray, current_ray, config) {
        Some(factor) => apply_masked(initial_scale, factor, axis.abs()),
        None => initial_scale,
    }
}

/// Scale the components of `initial_scale` selected by two axes.
///
/// The factor comes from the in-plane distance to `origin`. Component weights
/// are the larger of `|first_axis|` and `|second_axis|` per component.
pub fn scale_along_plane(
    first_axis: Vec3,
    second_axis: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    initial_scale: Vec3,
    config: &ManipulationConfig,
) -> Vec3 {
    match plane_factor(first_axis, second_axis, origin, initial_ray, current_ray, config) {
        Some(factor) => apply_masked(initial_scale, factor, first_axis.abs().max(second_axis.abs())),
        None => initial_scale,
    }
}

/// Like [`scale_along_line`] but scales all three components.
pub fn scale_uniform_along_line(
    axis: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    initial_scale: Vec3,
    config: &ManipulationConfig,
) -> Vec3 {
    line_factor(axis, origin, initial_ray, current_ray, config).map_or(initial_scale, |factor| initial_scale * factor)
}

/// Like [`scale_along_plane`] but scales all three components.
pub fn scale_uniform_along_plane(
    first_axis: Vec3,
    second_axis: Vec3,
    origin: Vec3,
    initial_ray: Ray,
    current_ray: Ray,
    initial_scale: Vec3,
    config: &ManipulationConfig,
) -> Vec3 {
    plane_factor(first_axis, second_axis, origin, initial_ray, current_ray, config)
        .map_or(initial_scale, |factor| initial_scale * factor)
}
