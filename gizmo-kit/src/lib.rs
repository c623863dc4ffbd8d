//! # gizmo-kit
//!
//! Geometry and math behind 3D transform gizmos: the arrows, dials, cubes
//! and spheres an editor draws around a selected object.
//!
//! The crate does three things and draws nothing:
//!
//! - **Geometry**: triangle lists for every handle shape, in local space
//!   ([`shapes`], [`generate_arrow_3d_geometry`], [`generate_dial_3d_geometry`]).
//! - **Picking**: analytic ray tests against the bounding volumes of each
//!   handle ([`intersection`], [`intersect_arrow_3d`], [`intersect_dial_3d`]),
//!   reduced to the nearest hit with [`pick_closest`].
//! - **Dragging**: converting the ray at press time and the current ray into
//!   a new position, scale or orientation ([`manipulate`]).
//!
//! ## Conventions
//!
//! Matrices are glam's column-major [`Mat4`] applied as `M * v`. Anything
//! implementing [`Mat4Like`] (plain `[f32; 16]`, glam, or mint with the `mint`
//! feature) is accepted where a transform is taken. Handles are sized in
//! pixels and rescaled every frame by [`compute_scale`].
//!
//! ## Example
//!
//! ```
//! use gizmo_kit::{Arrow3d, Mat4, Ray, Vec2, intersect_arrow_3d, pick_closest};
//!
//! let arrow = Arrow3d::default();
//! let ray = Ray::new([-5.0, 0.0, -0.4], [1.0, 0.0, 0.0]);
//! let viewport = Vec2::new(800.0, 100.0);
//!
//! let z_axis = intersect_arrow_3d(ray, &arrow, Mat4::IDENTITY, Mat4::IDENTITY, viewport);
//! let x_axis = intersect_arrow_3d(
//!     ray,
//!     &arrow,
//!     Mat4::from_rotation_y(-std::f32::consts::FRAC_PI_2),
//!     Mat4::IDENTITY,
//!     viewport,
//! );
//! let picked = pick_closest([("z", z_axis), ("x", x_axis)]);
//! assert_eq!(picked.map(|(handle, _)| handle), Some("z"));
//! ```
//!
//! ## Features
//!
//! - `tracing`: log degenerate picks and drag fallbacks, plus [`logging`]
//!   helpers to install a subscriber
//! - `mint`: accept mint vectors and matrices
//! - `serde`: serialize handle parameters and [`ManipulationConfig`]

pub mod arrow;
pub mod dial;
pub mod error;
pub mod intersection;
pub mod logging;
pub mod manipulate;
pub mod mat;
pub mod math;
pub mod shapes;
pub mod types;

pub use arrow::{Arrow3d, ArrowStyle, generate_arrow_3d_geometry, intersect_arrow_3d};
pub use dial::{Dial3d, generate_dial_3d_geometry, intersect_dial_3d};
pub use error::{GizmoError, GizmoResult};
pub use intersection::{closest_distance, closest_hit, pick_closest};
pub use manipulate::{
    ManipulationConfig, orient_trackball, orient_turn, scale_along_line, scale_along_plane,
    scale_uniform_along_line, scale_uniform_along_plane, translate_along_line, translate_along_plane,
};
pub use mat::Mat4Like;
pub use math::{compute_scale, screen_to_ray};
pub use shapes::{
    generate_circle, generate_cube, generate_filled_circle, generate_icosphere, generate_square,
    intersect_cube, intersect_sphere,
};
pub use types::{Mat4, Obb, Quat, Ray, RaycastHit, Vec2, Vec3, Vec4};
