//! Drag manipulation math
//!
//! Every drag follows the same pattern: the ray captured when the handle was
//! grabbed and the ray of the current frame are both intersected with a
//! manipulation plane, and the difference between the two hit points becomes a
//! translation, a scale factor or a rotation.
//!
//! Dragging is a per-frame transient. When either ray misses the plane (most
//! often because it runs parallel to it) the functions return the value the
//! drag started from, never an error.

mod orient;
mod scale;
mod translate;

pub use orient::{orient_trackball, orient_turn};
pub use scale::{scale_along_line, scale_along_plane, scale_uniform_along_line, scale_uniform_along_plane};
pub use translate::{translate_along_line, translate_along_plane};

use crate::intersection::intersect_ray_plane;
use crate::types::{Mat4, Ray, Vec3};

/// Options shared by all drag functions.
///
/// ```
/// use gizmo_kit::manipulate::ManipulationConfig;
/// let config = ManipulationConfig::default().with_snap(0.25);
/// assert_eq!(config.speed, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManipulationConfig {
    /// Increment the result is rounded to; `0.0` disables snapping.
    /// Radians for rotations, world units for translations, a plain factor
    /// for scaling.
    pub snap: f32,
    /// Multiplier on the raw drag delta
    pub speed: f32,
    /// Maps world-space deltas into the space of the manipulated value,
    /// usually the inverse of the parent's world transform. Applied to
    /// translation deltas and rotation axes as a direction.
    pub parent_transform: Mat4,
}

impl Default for ManipulationConfig {
    fn default() -> Self {
        Self {
            snap: 0.0,
            speed: 1.0,
            parent_transform: Mat4::IDENTITY,
        }
    }
}

impl ManipulationConfig {
    /// Set the snap increment
    pub fn with_snap(mut self, snap: f32) -> Self {
        self.snap = snap;
        self
    }

    /// Set the drag speed multiplier
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the transform applied to deltas before they reach the result
    pub fn with_parent_transform(mut self, parent_transform: Mat4) -> Self {
        self.parent_transform = parent_transform;
        self
    }
}

/// Plane through `origin` containing `axis` and facing the current ray origin.
///
/// Recomputed every frame from `current_ray`, so it follows a moving camera.
/// Fails when the camera sits on the axis line.
fn axis_plane(axis: Vec3, origin: Vec3, current_ray: Ray) -> Option<(Vec3, f32)> {
    let point_on_axis = origin + axis * (current_ray.origin - origin).dot(axis);
    let normal = (current_ray.origin - point_on_axis).try_normalize()?;
    Some((normal, origin.dot(normal)))
}

/// Hit points of both drag rays on one plane.
fn drag_hits(plane_normal: Vec3, plane_distance: f32, initial_ray: Ray, current_ray: Ray) -> Option<(Vec3, Vec3)> {
    let initial = intersect_ray_plane(initial_ray, plane_normal, plane_distance)?;
    let current = intersect_ray_plane(current_ray, plane_normal, plane_distance)?;
    Some((initial.hit_point, current.hit_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_defaults() {
        let config = ManipulationConfig::default();
        assert_eq!(
            config,
            ManipulationConfig {
                snap: 0.0,
                speed: 1.0,
                parent_transform: Mat4::IDENTITY,
            }
        );
    }

    #[test]
    fn test_config_builder() {
        let parent = Mat4::from_scale(Vec3::splat(2.0));
        let config = ManipulationConfig::default()
            .with_snap(0.5)
            .with_speed(0.1)
            .with_parent_transform(parent);
        assert_eq!(config.snap, 0.5);
        assert_eq!(config.speed, 0.1);
        assert_eq!(config.parent_transform, parent);
    }

    #[test]
    fn test_axis_plane_faces_camera() {
        let ray = Ray::new([3.0, 0.0, 10.0], [0.0, 0.0, -1.0]);
        let (normal, distance) = axis_plane(Vec3::X, Vec3::new(0.0, 0.0, 1.0), ray).unwrap();
        assert_eq!(normal, Vec3::Z);
        assert_eq!(distance, 1.0);

        // Camera on the axis line has no preferred plane
        let on_axis = Ray::new([5.0, 0.0, 0.0], [-1.0, 0.0, 0.0]);
        assert_eq!(axis_plane(Vec3::X, Vec3::ZERO, on_axis), None);
    }

    #[test]
    fn test_drag_hits_needs_both_rays() {
        let hitting = Ray::new([0.0, 0.0, 10.0], [0.0, 0.0, -1.0]);
        let parallel = Ray::new([0.0, 0.0, 10.0], [1.0, 0.0, 0.0]);
        assert!(drag_hits(Vec3::Z, 0.0, hitting, hitting).is_some());
        assert_eq!(drag_hits(Vec3::Z, 0.0, hitting, parallel), None);
        assert_eq!(drag_hits(Vec3::Z, 0.0, parallel, hitting), None);
    }
}
