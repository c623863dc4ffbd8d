//! Ray / oriented bounding box intersection

use crate::types::{Obb, Ray, RaycastHit, Vec3};

/// Intersect a ray with an oriented bounding box using the slab test.
///
/// The ray is moved into box space by projecting onto the local axes, then
/// clipped against the three slabs. The reported distance is the **exit**
/// parameter `tmax`, so a ray starting outside the box hits at the far face.
/// Handle picking only compares distances between volumes of one gizmo, where
/// that bias is harmless.
pub fn intersect_ray_obb(ray: Ray, obb: Obb) -> Option<RaycastHit> {
    let axes = [obb.local_x, obb.local_y, obb.local_z];
    let relative_origin = ray.origin - obb.center;
    let origin = Vec3::from_array(axes.map(|axis| relative_origin.dot(axis)));
    let direction = Vec3::from_array(axes.map(|axis| ray.direction.dot(axis)));

    let mut tmin = f32::NEG_INFINITY;
    let mut tmax = f32::INFINITY;
    for i in 0..3 {
        let tx1 = (obb.halfwidths[i] - origin[i]) / direction[i];
        let tx2 = (-obb.halfwidths[i] - origin[i]) / direction[i];
        tmax = tmax.min(tx1.max(tx2));
        tmin = tmin.max(tx1.min(tx2));
    }

    if tmax >= 0.0 && tmax >= tmin {
        Some(RaycastHit::at(&ray, tmax))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Quat;
    use approx::assert_relative_eq;

    #[test]
    fn test_reports_exit_distance() {
        let obb = Obb::axis_aligned(Vec3::ZERO, Vec3::ONE);
        let ray = Ray::new([-5.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let hit = intersect_ray_obb(ray, obb).unwrap();
        assert_relative_eq!(hit.distance, 6.0);
        assert_relative_eq!(hit.hit_point, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_inside_box_hits_exit_face() {
        let obb = Obb::axis_aligned(Vec3::new(0.0, 0.0, -3.0), Vec3::splat(0.5));
        let ray = Ray::new([0.0, 0.0, -3.0], [0.0, 0.0, -1.0]);
        let hit = intersect_ray_obb(ray, obb).unwrap();
        assert_relative_eq!(hit.distance, 0.5);
    }

    #[test]
    fn test_miss_and_behind() {
        let obb = Obb::axis_aligned(Vec3::ZERO, Vec3::ONE);
        let ray = Ray::new([-5.0, 2.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(intersect_ray_obb(ray, obb).is_none());

        let ray = Ray::new([5.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(intersect_ray_obb(ray, obb).is_none());
    }

    #[test]
    fn test_rotated_box() {
        // Unit half-width box rotated 45 degrees about z: its corner points
        // along +x at distance sqrt(2)
        let rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_4);
        let obb = Obb {
            center: Vec3::ZERO,
            local_x: rotation * Vec3::X,
            local_y: rotation * Vec3::Y,
            local_z: Vec3::Z,
            halfwidths: Vec3::ONE,
        };
        let ray = Ray::new([-5.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let hit = intersect_ray_obb(ray, obb).unwrap();
        assert_relative_eq!(hit.distance, 5.0 + std::f32::consts::SQRT_2, epsilon = 1e-4);

        // Just outside the rotated corner on the y axis
        let ray = Ray::new([-5.0, 1.5, 0.0], [1.0, 0.0, 0.0]);
        assert!(intersect_ray_obb(ray, obb).is_none());
    }
}
