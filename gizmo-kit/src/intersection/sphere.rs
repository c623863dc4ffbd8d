//! Ray / sphere intersection

use crate::types::{Ray, RaycastHit, Vec3};

/// Intersect a ray with a sphere.
///
/// Solves the quadratic with `a = 1`, so `ray.direction` must be normalized.
/// Returns the nearest root in front of the origin; from inside the sphere
/// that is the exit point.
pub fn intersect_ray_sphere(ray: Ray, center: Vec3, radius: f32) -> Option<RaycastHit> {
    let oc = ray.origin - center;
    let half_b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t1 = -half_b - sqrt_discriminant;
    let t2 = -half_b + sqrt_discriminant;
    let t = if t1 >= 0.0 {
        t1
    } else if t2 >= 0.0 {
        t2
    } else {
        return None;
    };

    Some(RaycastHit::at(&ray, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_front_hit() {
        let ray = Ray::new([0.0, 0.0, -5.0], [0.0, 0.0, 1.0]);
        let hit = intersect_ray_sphere(ray, Vec3::ZERO, 1.0).unwrap();
        assert_relative_eq!(hit.distance, 4.0);
        assert_relative_eq!(hit.hit_point, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_inside_returns_exit() {
        let ray = Ray::new([0.0, 0.0, 0.5], [0.0, 0.0, 1.0]);
        let hit = intersect_ray_sphere(ray, Vec3::ZERO, 1.0).unwrap();
        assert_relative_eq!(hit.distance, 0.5);
    }

    #[test]
    fn test_tangent_ray_has_single_root() {
        // Closest approach to the center equals the radius
        let ray = Ray::new([2.0, 1.0, -5.0], [0.0, 0.0, 1.0]);
        let hit = intersect_ray_sphere(ray, Vec3::new(2.0, 0.0, 0.0), 1.0).unwrap();
        assert_relative_eq!(hit.distance, 5.0);
        assert_relative_eq!(hit.hit_point, Vec3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_miss_and_behind() {
        let ray = Ray::new([0.0, 1.5, -5.0], [0.0, 0.0, 1.0]);
        assert!(intersect_ray_sphere(ray, Vec3::ZERO, 1.0).is_none());

        let ray = Ray::new([0.0, 0.0, 5.0], [0.0, 0.0, 1.0]);
        assert!(intersect_ray_sphere(ray, Vec3::ZERO, 1.0).is_none());
    }
}
