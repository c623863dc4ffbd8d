//! Generic shape primitives
//!
//! Triangle-list emitters for circles, squares, cubes and icospheres, plus the
//! single-volume picking tests for cube and sphere handles. Emitted vertices
//! are in local space around the origin; the caller uploads them and renders
//! with the gizmo's world transform.

use crate::intersection::{intersect_ray_obb, intersect_ray_sphere};
use crate::mat::Mat4Like;
use crate::types::constants::{GOLDEN_RATIO, MAX_ICOSPHERE_SUBDIVISION};
use crate::types::{Obb, Quat, Ray, Vec3};
use crate::{GizmoError, GizmoResult};

pub(crate) fn check_vertex_count(vertex_count: u32) -> GizmoResult<()> {
    if vertex_count < 3 {
        return Err(GizmoError::invalid_geometry(format!(
            "vertex_count must be at least 3, got {vertex_count}"
        )));
    }
    Ok(())
}

/// Points on a circle of `radius` around `origin` in the plane facing `normal`.
///
/// Returns exactly `vertex_count` points, counter-clockwise about `normal`.
/// The first point lies along a fixed in-plane vector derived from the normal.
///
/// # Errors
/// [`GizmoError::InvalidGeometry`] for fewer than 3 vertices or a zero normal.
pub fn generate_circle(origin: Vec3, normal: Vec3, radius: f32, vertex_count: u32) -> GizmoResult<Vec<Vec3>> {
    check_vertex_count(vertex_count)?;
    let normal = normal
        .try_normalize()
        .ok_or_else(|| GizmoError::invalid_geometry("circle normal must be non-zero"))?;

    let in_plane = if normal.x == 0.0 {
        Vec3::new(0.0, -normal.z, normal.y)
    } else if normal.y == 0.0 {
        Vec3::new(-normal.z, 0.0, normal.x)
    } else {
        Vec3::new(-normal.y, normal.x, 0.0)
    };
    let start = in_plane.normalize() * radius;

    let step = std::f32::consts::TAU / vertex_count as f32;
    Ok((0..vertex_count)
        .map(|i| origin + Quat::from_axis_angle(normal, step * i as f32) * start)
        .collect())
}

/// Filled disk as a triangle fan around `origin`, facing `normal`.
pub fn generate_filled_circle(
    origin: Vec3,
    normal: Vec3,
    radius: f32,
    vertex_count: u32,
) -> GizmoResult<Vec<Vec3>> {
    let rim = generate_circle(origin, normal, radius, vertex_count)?;
    let mut vertices = Vec::with_capacity(rim.len() * 3);
    for (i, &v1) in rim.iter().enumerate() {
        let v2 = rim[(i + 1) % rim.len()];
        vertices.extend([origin, v1, v2]);
    }
    Ok(vertices)
}

/// Square centered at `origin`, facing `normal`, with one edge pair parallel to `up`.
///
/// Two counter-clockwise triangles when seen from the side `normal` points to.
///
/// # Errors
/// [`GizmoError::InvalidGeometry`] if `up` is parallel to `normal`.
pub fn generate_square(origin: Vec3, normal: Vec3, up: Vec3, edge_length: f32) -> GizmoResult<Vec<Vec3>> {
    let half = 0.5 * edge_length;
    let right = up
        .cross(normal)
        .try_normalize()
        .ok_or_else(|| GizmoError::invalid_geometry("square up vector must not be parallel to its normal"))?;
    let up = normal.cross(right).normalize() * half;
    let right = right * half;

    let bottom_left = origin - right - up;
    let bottom_right = origin + right - up;
    let top_right = origin + right + up;
    let top_left = origin - right + up;
    Ok(vec![
        bottom_left,
        bottom_right,
        top_right,
        bottom_left,
        top_right,
        top_left,
    ])
}

/// Axis-aligned cube centered at the origin, 36 vertices, outward-facing.
pub fn generate_cube(edge_length: f32) -> Vec<Vec3> {
    let half = 0.5 * edge_length;
    // (normal, u, v) with u x v = normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let corner = |su: f32, sv: f32| (normal + su * u + sv * v) * half;
        let (a, b, c, d) = (corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0));
        vertices.extend([a, b, c, a, c, d]);
    }
    vertices
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 9, 10],
    [0, 10, 7],
    [0, 7, 3],
    [0, 3, 6],
    [0, 6, 9],
    [10, 9, 1],
    [7, 10, 4],
    [3, 7, 11],
    [6, 3, 8],
    [9, 6, 5],
    [2, 8, 11],
    [2, 11, 4],
    [2, 4, 1],
    [2, 1, 5],
    [2, 5, 8],
    [11, 8, 3],
    [4, 11, 7],
    [1, 4, 10],
    [5, 1, 9],
    [8, 5, 6],
];

/// Icosphere of `radius` centered at the origin.
///
/// Level 0 is the plain icosahedron (60 vertices); every level splits each
/// triangle into four and pushes the new vertices onto the sphere.
///
/// # Errors
/// [`GizmoError::InvalidGeometry`] above [`MAX_ICOSPHERE_SUBDIVISION`].
pub fn generate_icosphere(radius: f32, subdivision_level: u32) -> GizmoResult<Vec<Vec3>> {
    if subdivision_level > MAX_ICOSPHERE_SUBDIVISION {
        return Err(GizmoError::invalid_geometry(format!(
            "icosphere subdivision level {subdivision_level} exceeds the maximum of {MAX_ICOSPHERE_SUBDIVISION}"
        )));
    }

    // Corners of three orthogonal golden rectangles
    let g = GOLDEN_RATIO;
    let corners = [
        Vec3::new(-1.0, g, 0.0),
        Vec3::new(-1.0, -g, 0.0),
        Vec3::new(1.0, -g, 0.0),
        Vec3::new(1.0, g, 0.0),
        Vec3::new(0.0, -1.0, g),
        Vec3::new(0.0, -1.0, -g),
        Vec3::new(0.0, 1.0, -g),
        Vec3::new(0.0, 1.0, g),
        Vec3::new(g, 0.0, -1.0),
        Vec3::new(-g, 0.0, -1.0),
        Vec3::new(-g, 0.0, 1.0),
        Vec3::new(g, 0.0, 1.0),
    ]
    .map(|corner| corner.normalize() * radius);

    let mut vertices: Vec<Vec3> = ICOSAHEDRON_FACES
        .iter()
        .flat_map(|face| face.map(|index| corners[index]))
        .collect();

    for _ in 0..subdivision_level {
        let mut subdivided = Vec::with_capacity(vertices.len() * 4);
        for triangle in vertices.chunks_exact(3) {
            let (v1, v2, v3) = (triangle[0], triangle[1], triangle[2]);
            let a = (v1 + v2).normalize() * radius;
            let b = (v1 + v3).normalize() * radius;
            let c = (v2 + v3).normalize() * radius;
            subdivided.extend([v1, a, b, v2, c, a, v3, b, c, a, c, b]);
        }
        vertices = subdivided;
    }

    crate::gizmo_debug!("generated icosphere with {} vertices", vertices.len());
    Ok(vertices)
}

/// Pick a cube of `edge_length` centered at the world transform's origin.
///
/// The box follows the rotation of `world_transform` but not its scale:
/// `edge_length` is already in world units. Reports the exit distance like
/// [`intersect_ray_obb`].
pub fn intersect_cube(ray: Ray, edge_length: f32, world_transform: impl Mat4Like) -> Option<f32> {
    let world = world_transform.to_mat4();
    let obb = Obb {
        center: world.transform_point3(Vec3::ZERO),
        local_x: world.transform_vector3(Vec3::X).normalize_or_zero(),
        local_y: world.transform_vector3(Vec3::Y).normalize_or_zero(),
        local_z: world.transform_vector3(Vec3::NEG_Z).normalize_or_zero(),
        halfwidths: Vec3::splat(0.5 * edge_length),
    };
    intersect_ray_obb(ray, obb).map(|hit| hit.distance)
}

/// Pick a sphere of `radius` centered at the world transform's origin.
pub fn intersect_sphere(ray: Ray, radius: f32, world_transform: impl Mat4Like) -> Option<f32> {
    let center = world_transform.to_mat4().transform_point3(Vec3::ZERO);
    intersect_ray_sphere(ray, center, radius).map(|hit| hit.distance)
}
