//! Translation / scale arrow handle
//!
//! An arrow is a cylindrical shaft running from the local origin along `-z`,
//! finished with either a cone or a cube cap. Geometry is emitted in local
//! units; picking multiplies every dimension by the screen-space scale from
//! [`compute_scale`] so the handle keeps a constant pixel size.

use crate::intersection::{closest_distance, intersect_ray_cone, intersect_ray_cylinder, intersect_ray_obb};
use crate::mat::Mat4Like;
use crate::math::compute_scale;
use crate::shapes::{generate_circle, generate_cube};
use crate::types::{Obb, Ray, Vec2, Vec3};
use crate::GizmoResult;

/// Shape of the arrow head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrowStyle {
    /// Cone head, typical for translation handles
    #[default]
    Cone,
    /// Cube head, typical for scale handles
    Cube,
}

/// Arrow handle parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrow3d {
    /// Head shape
    pub style: ArrowStyle,
    /// On-screen size of one local unit, in pixels
    pub size: u32,
    /// Cone: diameter of the cone base. Cube: edge length of the cube.
    pub cap_size: f32,
    /// Cone: height of the cone. Ignored for cubes.
    pub cap_length: f32,
    /// Length of the shaft from the origin
    pub shaft_length: f32,
    /// Diameter of the shaft
    pub shaft_diameter: f32,
}

impl Default for Arrow3d {
    fn default() -> Self {
        Self {
            style: ArrowStyle::Cone,
            size: 100,
            cap_size: 0.1,
            cap_length: 0.25,
            shaft_length: 0.75,
            shaft_diameter: 0.02,
        }
    }
}

impl Arrow3d {
    /// Cosine of the half-angle at the cone apex.
    pub fn cap_angle_cos(&self) -> f32 {
        let base_radius = 0.5 * self.cap_size;
        self.cap_length / (self.cap_length * self.cap_length + base_radius * base_radius).sqrt()
    }
}

/// Triangle list for an arrow, pointing along `-z` from the origin.
///
/// `vertex_count` is the number of segments around the shaft and cone. All
/// triangles wind counter-clockwise when seen from outside.
///
/// # Errors
/// [`GizmoError::InvalidGeometry`](crate::GizmoError::InvalidGeometry) for fewer
/// than 3 segments.
pub fn generate_arrow_3d_geometry(arrow: &Arrow3d, vertex_count: u32) -> GizmoResult<Vec<Vec3>> {
    let ring = generate_circle(Vec3::ZERO, Vec3::Z, 1.0, vertex_count)?;
    let shaft_end = Vec3::new(0.0, 0.0, -arrow.shaft_length);
    let shaft_radius = 0.5 * arrow.shaft_diameter;

    let segments = ring.len();
    let mut vertices = Vec::with_capacity(segments * 15 + 36);
    for i in 0..segments {
        let (u1, u2) = (ring[i], ring[(i + 1) % segments]);
        let (top1, top2) = (u1 * shaft_radius, u2 * shaft_radius);
        let (bottom1, bottom2) = (top1 + shaft_end, top2 + shaft_end);

        // Back cap at the origin, facing +z
        vertices.extend([Vec3::ZERO, top1, top2]);
        // Shaft wall
        vertices.extend([bottom1, bottom2, top2, bottom1, top2, top1]);

        if arrow.style == ArrowStyle::Cone {
            let base_radius = 0.5 * arrow.cap_size;
            let (rim1, rim2) = (u1 * base_radius + shaft_end, u2 * base_radius + shaft_end);
            let apex = shaft_end - Vec3::Z * arrow.cap_length;
            vertices.extend([rim2, rim1, apex]);
            vertices.extend([shaft_end, rim1, rim2]);
        } else {
            // Front cap of the shaft, the cube head may not cover it
            vertices.extend([shaft_end, bottom2, bottom1]);
        }
    }

    if arrow.style == ArrowStyle::Cube {
        let center = cube_cap_center(arrow, 1.0);
        vertices.extend(generate_cube(arrow.cap_size).into_iter().map(|v| v + center));
    }

    Ok(vertices)
}

fn cube_cap_center(arrow: &Arrow3d, scale: f32) -> Vec3 {
    Vec3::new(0.0, 0.0, (-arrow.shaft_length + 0.5 * arrow.cap_size) * scale)
}

/// Pick an arrow handle.
///
/// Tests the shaft as a capped cylinder and the head as a cone or an OBB, all
/// placed by `world_transform` and scaled to `arrow.size` pixels. Returns the
/// distance to the nearest volume hit.
pub fn intersect_arrow_3d(
    ray: Ray,
    arrow: &Arrow3d,
    world_transform: impl Mat4Like,
    view_projection: impl Mat4Like,
    viewport_size: Vec2,
) -> Option<f32> {
    let world = world_transform.to_mat4();
    let scale = compute_scale(world, arrow.size, view_projection, viewport_size);

    let shaft_start = world.transform_point3(Vec3::ZERO);
    let shaft_end = world.transform_point3(Vec3::new(0.0, 0.0, -arrow.shaft_length * scale));
    let shaft_radius = 0.5 * arrow.shaft_diameter * scale;
    let shaft = intersect_ray_cylinder(ray, shaft_start, shaft_end, shaft_radius).map(|hit| hit.distance);

    let head = match arrow.style {
        ArrowStyle::Cone => {
            let apex = world.transform_point3(Vec3::new(
                0.0,
                0.0,
                -(arrow.shaft_length + arrow.cap_length) * scale,
            ));
            let direction = world.transform_vector3(Vec3::Z).normalize_or_zero();
            intersect_ray_cone(ray, apex, direction, arrow.cap_angle_cos(), arrow.cap_length * scale)
        }
        ArrowStyle::Cube => {
            let obb = Obb {
                center: world.transform_point3(cube_cap_center(arrow, scale)),
                local_x: world.transform_vector3(Vec3::X).normalize_or_zero(),
                local_y: world.transform_vector3(Vec3::Y).normalize_or_zero(),
                local_z: world.transform_vector3(Vec3::NEG_Z).normalize_or_zero(),
                halfwidths: Vec3::splat(0.5 * arrow.cap_size * scale),
            };
            intersect_ray_obb(ray, obb)
        }
    };

    let result = closest_distance(shaft, head.map(|hit| hit.distance));
    crate::gizmo_trace!("arrow pick: shaft {:?} head {:?} -> {:?}", shaft, head, result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mat4;
    use approx::assert_relative_eq;

    // Identity matrices with a 100 pixel viewport height give a scale of one
    const VIEWPORT: Vec2 = Vec2::new(800.0, 100.0);

    fn cube_arrow() -> Arrow3d {
        Arrow3d {
            style: ArrowStyle::Cube,
            size: 100,
            cap_size: 0.2,
            cap_length: 0.0,
            shaft_length: 1.0,
            shaft_diameter: 0.1,
        }
    }

    fn cone_arrow() -> Arrow3d {
        Arrow3d {
            style: ArrowStyle::Cone,
            cap_size: 0.2,
            cap_length: 0.25,
            ..cube_arrow()
        }
    }

    fn pick(ray: Ray, arrow: &Arrow3d, world: Mat4) -> Option<f32> {
        intersect_arrow_3d(ray, arrow, world, Mat4::IDENTITY, VIEWPORT)
    }

    #[test]
    fn test_shaft_beats_cube_exit() {
        // Passes through both the shaft and the cube head; the shaft surface is
        // nearer than the cube's exit face at x = 0.1
        let ray = Ray::new([-5.0, 0.0, -0.85], [1.0, 0.0, 0.0]);
        let distance = pick(ray, &cube_arrow(), Mat4::IDENTITY).unwrap();
        assert_relative_eq!(distance, 4.95, epsilon = 1e-4);
    }

    #[test]
    fn test_cube_only_reports_exit() {
        // Outside the shaft radius but inside the cube
        let ray = Ray::new([-5.0, 0.08, -0.9], [1.0, 0.0, 0.0]);
        let distance = pick(ray, &cube_arrow(), Mat4::IDENTITY).unwrap();
        assert_relative_eq!(distance, 5.1, epsilon = 1e-4);
    }

    #[test]
    fn test_cone_head_hit() {
        // Halfway up the cone the radius is half the base radius
        let ray = Ray::new([-5.0, 0.0, -1.125], [1.0, 0.0, 0.0]);
        let distance = pick(ray, &cone_arrow(), Mat4::IDENTITY).unwrap();
        assert_relative_eq!(distance, 4.95, epsilon = 1e-3);

        let ray = Ray::new([-5.0, 0.0, -1.3], [1.0, 0.0, 0.0]);
        assert!(pick(ray, &cone_arrow(), Mat4::IDENTITY).is_none());
    }

    #[test]
    fn test_follows_world_transform() {
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        let ray = Ray::new([-5.0, 0.0, -5.5], [1.0, 0.0, 0.0]);
        let distance = pick(ray, &cone_arrow(), world).unwrap();
        assert_relative_eq!(distance, 4.95, epsilon = 1e-4);

        // The untransformed position is empty
        let ray = Ray::new([-5.0, 0.0, -0.5], [1.0, 0.0, 0.0]);
        assert!(pick(ray, &cone_arrow(), world).is_none());
    }

    #[test]
    fn test_cap_angle_cos() {
        let arrow = Arrow3d {
            cap_size: 2.0,
            cap_length: 1.0,
            ..Arrow3d::default()
        };
        assert_relative_eq!(arrow.cap_angle_cos(), std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn test_geometry_layout() {
        let cone = generate_arrow_3d_geometry(&cone_arrow(), 16).unwrap();
        assert_eq!(cone.len(), 16 * 15);
        let tip = cone.iter().map(|v| v.z).fold(f32::INFINITY, f32::min);
        assert_relative_eq!(tip, -1.25, epsilon = 1e-6);
        assert!(cone.iter().all(|v| v.z <= 1e-6));

        let cube = generate_arrow_3d_geometry(&cube_arrow(), 16).unwrap();
        assert_eq!(cube.len(), 16 * 12 + 36);
        assert!(generate_arrow_3d_geometry(&cube_arrow(), 2).is_err());
    }

    #[test]
    fn test_cone_geometry_faces_outward() {
        let arrow = cone_arrow();
        let vertices = generate_arrow_3d_geometry(&arrow, 12).unwrap();
        // Every triangle on the shaft wall and the cone side has a normal
        // pointing away from the arrow axis
        for triangle in vertices.chunks_exact(3) {
            let normal = (triangle[1] - triangle[0]).cross(triangle[2] - triangle[0]);
            let centroid = (triangle[0] + triangle[1] + triangle[2]) / 3.0;
            let radial = Vec3::new(centroid.x, centroid.y, 0.0);
            if normal.truncate().length() > 1e-6 {
                assert!(normal.dot(radial) > 0.0, "inward triangle {triangle:?}");
            }
        }
    }
}
