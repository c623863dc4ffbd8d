//! Rotation dial handle
//!
//! A dial is a torus in the local xy-plane around the local z axis. It is
//! drawn as a real torus but picked as a "napkin ring": the solid between two
//! coaxial cylinders spanning the ring thickness.

use crate::intersection::{closest_distance, intersect_ray_cylinder, intersect_ray_cylinder_uncapped};
use crate::mat::Mat4Like;
use crate::math::{compute_scale, is_almost_zero};
use crate::shapes::check_vertex_count;
use crate::types::constants::DIAL_INNER_RADIUS_EPSILON;
use crate::types::{Ray, Vec2, Vec3};
use crate::GizmoResult;

/// Dial handle parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dial3d {
    /// On-screen size of one local unit, in pixels
    pub size: u32,
    /// Diameter of the ring's center line
    pub major_diameter: f32,
    /// Thickness of the ring tube
    pub minor_diameter: f32,
}

impl Default for Dial3d {
    fn default() -> Self {
        Self {
            size: 100,
            major_diameter: 1.0,
            minor_diameter: 0.03,
        }
    }
}

/// Triangle list for a dial torus in the local xy-plane.
///
/// `vertex_count_major` segments go around the ring and `vertex_count_minor`
/// around the tube; every quad is split into two outward-facing triangles.
///
/// # Errors
/// [`GizmoError::InvalidGeometry`](crate::GizmoError::InvalidGeometry) when
/// either count is below 3.
pub fn generate_dial_3d_geometry(
    dial: &Dial3d,
    vertex_count_major: u32,
    vertex_count_minor: u32,
) -> GizmoResult<Vec<Vec3>> {
    check_vertex_count(vertex_count_major)?;
    check_vertex_count(vertex_count_minor)?;

    let major_radius = 0.5 * dial.major_diameter;
    let minor_radius = 0.5 * dial.minor_diameter;
    let major_step = std::f32::consts::TAU / vertex_count_major as f32;
    let minor_step = std::f32::consts::TAU / vertex_count_minor as f32;

    let rings: Vec<Vec<Vec3>> = (0..vertex_count_major)
        .map(|i| {
            let (sin, cos) = (major_step * i as f32).sin_cos();
            let radial = Vec3::new(cos, sin, 0.0);
            let center = radial * major_radius;
            (0..vertex_count_minor)
                .map(|j| {
                    let (sin, cos) = (minor_step * j as f32).sin_cos();
                    center + (radial * cos + Vec3::Z * sin) * minor_radius
                })
                .collect()
        })
        .collect();

    let (major, minor) = (rings.len(), vertex_count_minor as usize);
    let mut vertices = Vec::with_capacity(major * minor * 6);
    for i in 0..major {
        let (ring1, ring2) = (&rings[i], &rings[(i + 1) % major]);
        for j in 0..minor {
            let k = (j + 1) % minor;
            vertices.extend([ring1[j], ring2[j], ring2[k], ring1[j], ring2[k], ring1[k]]);
        }
    }
    Ok(vertices)
}

/// Pick a dial handle.
///
/// The ring is bounded by an outer capped cylinder of radius
/// `scale * (major + minor) / 2` and an inner one of radius
/// `scale * (major - minor) / 2`, both spanning the tube thickness along the
/// local z axis:
///
/// 1. the outer capped cylinder gives the first candidate;
/// 2. if the inner capped cylinder is hit at or before it, the ray entered the
///    hollow through a cap and the candidate is dropped;
/// 3. the inner wall, tested uncapped, is taken if closer, so the ring can be
///    hit from inside the hole.
///
/// A dial whose inner radius collapses is picked as a solid disk.
pub fn intersect_dial_3d(
    ray: Ray,
    dial: &Dial3d,
    world_transform: impl Mat4Like,
    view_projection: impl Mat4Like,
    viewport_size: Vec2,
) -> Option<f32> {
    let world = world_transform.to_mat4();
    let scale = compute_scale(world, dial.size, view_projection, viewport_size);

    let half_thickness = 0.5 * dial.minor_diameter * scale;
    let vertex1 = world.transform_point3(Vec3::new(0.0, 0.0, -half_thickness));
    let vertex2 = world.transform_point3(Vec3::new(0.0, 0.0, half_thickness));
    let r_large = 0.5 * scale * (dial.major_diameter + dial.minor_diameter);
    let r_small = 0.5 * scale * (dial.major_diameter - dial.minor_diameter);

    let mut result = intersect_ray_cylinder(ray, vertex1, vertex2, r_large).map(|hit| hit.distance);

    if !is_almost_zero(r_small, DIAL_INNER_RADIUS_EPSILON) {
        let inner_capped = intersect_ray_cylinder(ray, vertex1, vertex2, r_small);
        if let (Some(inner), Some(outer)) = (inner_capped, result) {
            if inner.distance <= outer {
                crate::gizmo_trace!("dial pick entered the hollow at {}", inner.distance);
                result = None;
            }
        }

        let inner_wall = intersect_ray_cylinder_uncapped(ray, vertex1, vertex2, r_small);
        result = closest_distance(result, inner_wall.map(|hit| hit.distance));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mat4;
    use approx::assert_relative_eq;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 100.0);

    // Center line radius 0.5, tube radius 0.05
    const DIAL: Dial3d = Dial3d {
        size: 100,
        major_diameter: 1.0,
        minor_diameter: 0.1,
    };

    fn pick(ray: Ray, dial: &Dial3d) -> Option<f32> {
        intersect_dial_3d(ray, dial, Mat4::IDENTITY, Mat4::IDENTITY, VIEWPORT)
    }

    #[test]
    fn test_hole_along_axis_misses() {
        let ray = Ray::new([0.0, 0.0, 5.0], [0.0, 0.0, -1.0]);
        assert_eq!(pick(ray, &DIAL), None);
    }

    #[test]
    fn test_ring_face_hit() {
        let ray = Ray::new([0.5, 0.0, 5.0], [0.0, 0.0, -1.0]);
        let distance = pick(ray, &DIAL).unwrap();
        assert_relative_eq!(distance, 4.95, epsilon = 1e-5);
    }

    #[test]
    fn test_side_hit_uses_outer_wall() {
        let ray = Ray::new([-5.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let distance = pick(ray, &DIAL).unwrap();
        assert_relative_eq!(distance, 4.45, epsilon = 1e-5);
    }

    #[test]
    fn test_hit_from_inside_the_hole() {
        let ray = Ray::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let distance = pick(ray, &DIAL).unwrap();
        assert_relative_eq!(distance, 0.45, epsilon = 1e-5);
    }

    #[test]
    fn test_collapsed_inner_radius_is_a_disk() {
        let disk = Dial3d {
            minor_diameter: 1.0,
            ..DIAL
        };
        let ray = Ray::new([0.0, 0.0, 5.0], [0.0, 0.0, -1.0]);
        let distance = pick(ray, &disk).unwrap();
        assert_relative_eq!(distance, 4.5, epsilon = 1e-5);
    }

    #[test]
    fn test_geometry_lies_on_torus() {
        let vertices = generate_dial_3d_geometry(&DIAL, 24, 8).unwrap();
        assert_eq!(vertices.len(), 24 * 8 * 6);
        for v in &vertices {
            let ring_distance = Vec2::new(v.x, v.y).length() - 0.5;
            assert_relative_eq!(ring_distance.hypot(v.z), 0.05, epsilon = 1e-5);
        }
        assert!(generate_dial_3d_geometry(&DIAL, 24, 2).is_err());
    }

    #[test]
    fn test_geometry_faces_outward() {
        let vertices = generate_dial_3d_geometry(&DIAL, 24, 8).unwrap();
        for triangle in vertices.chunks_exact(3) {
            let normal = (triangle[1] - triangle[0]).cross(triangle[2] - triangle[0]);
            let centroid = (triangle[0] + triangle[1] + triangle[2]) / 3.0;
            let tube_center = Vec3::new(centroid.x, centroid.y, 0.0).normalize() * 0.5;
            assert!(normal.dot(centroid - tube_center) > 0.0);
        }
    }
}
