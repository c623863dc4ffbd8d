//! Core value types shared by picking and manipulation
//!
//! All math runs on glam types with the column-vector convention: matrices are
//! column-major and transform with `M * v`. Points go through
//! `Mat4::transform_point3`, directions through `Mat4::transform_vector3`.

/// 2D vector for screen coordinates and sizes
pub type Vec2 = glam::Vec2;

/// 3D vector for world coordinates
pub type Vec3 = glam::Vec3;

/// 4D vector for homogeneous coordinates
pub type Vec4 = glam::Vec4;

/// 4x4 column-major transformation matrix
pub type Mat4 = glam::Mat4;

/// Unit quaternion for orientations
pub type Quat = glam::Quat;

/// A half-line `origin + t * direction`, `t >= 0`.
///
/// Plane and sphere tests assume `direction` has unit length so that `t` is a
/// world-space distance. Nothing here normalizes for you.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// Starting point of the ray in world coordinates
    pub origin: Vec3,
    /// Direction of the ray, expected to be normalized
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from anything convertible to [`Vec3`].
    ///
    /// ```
    /// use gizmo_kit::Ray;
    /// let ray = Ray::new([0.0, 0.0, 5.0], [0.0, 0.0, -1.0]);
    /// assert_eq!(ray.at(5.0), glam::Vec3::ZERO);
    /// ```
    pub fn new(origin: impl Into<Vec3>, direction: impl Into<Vec3>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a successful ray test.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RaycastHit {
    /// World-space intersection point, `origin + distance * direction`
    pub hit_point: Vec3,
    /// Reserved for triangle tests; analytic primitives leave it zeroed
    pub barycentric_coordinates: Vec3,
    /// Ray parameter of the intersection, never negative
    pub distance: f32,
}

impl RaycastHit {
    /// Build a hit at parameter `t` along `ray`.
    pub fn at(ray: &Ray, t: f32) -> Self {
        Self {
            hit_point: ray.at(t),
            barycentric_coordinates: Vec3::ZERO,
            distance: t,
        }
    }
}

/// Oriented bounding box.
///
/// `local_x`, `local_y` and `local_z` must be orthonormal world-space axes;
/// otherwise the slab test describes a sheared box and its distances are
/// meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    /// World-space center
    pub center: Vec3,
    /// Box x axis in world space
    pub local_x: Vec3,
    /// Box y axis in world space
    pub local_y: Vec3,
    /// Box z axis in world space
    pub local_z: Vec3,
    /// Half extents along the local axes
    pub halfwidths: Vec3,
}

impl Obb {
    /// Axis-aligned box expressed as an OBB.
    pub fn axis_aligned(center: Vec3, halfwidths: Vec3) -> Self {
        Self {
            center,
            local_x: Vec3::X,
            local_y: Vec3::Y,
            local_z: Vec3::Z,
            halfwidths,
        }
    }
}

/// Constants used throughout the library
pub mod constants {
    /// Threshold below which a denominator, cosine or quadratic coefficient
    /// counts as zero
    pub const EPSILON: f32 = 1e-5;
    /// Inner dial radius below which the dial is treated as a solid disk
    pub const DIAL_INNER_RADIUS_EPSILON: f32 = 1e-3;
    /// Minimum in-plane drag length for the trackball to rotate
    pub const TRACKBALL_EPSILON: f32 = 1e-4;
    /// Highest icosphere subdivision level accepted (20 * 4^7 triangles)
    pub const MAX_ICOSPHERE_SUBDIVISION: u32 = 7;
    /// Golden ratio, used to lay out the icosahedron
    pub const GOLDEN_RATIO: f32 = 1.618_034;
}
