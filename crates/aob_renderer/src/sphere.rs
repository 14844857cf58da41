//! Sphere primitive for ray tracing.

use crate::intersection::{Intersect, Intersection};
use aob_math::{normalize, Float, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: Float,
}

impl Sphere {
    /// Create a new sphere.
    pub const fn new(center: Vec3, radius: Float) -> Self {
        Self { center, radius }
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray, isect: &mut Intersection) {
        let rs = ray.origin - self.center;

        let b = rs.dot(ray.direction);
        let c = rs.dot(rs) - self.radius * self.radius;
        let d = b * b - c;

        if d <= 0.0 {
            return;
        }

        // Near root only: a ray starting inside the sphere does not see it
        let t = -b - d.sqrt();

        if isect.accepts(t) {
            let point = ray.at(t);
            isect.record(t, point, normalize(point - self.center));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: Float = 1.0e-6;

    fn unit_sphere_ahead() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut isect = Intersection::new();

        unit_sphere_ahead().intersect(&ray, &mut isect);

        assert!(isect.hit);
        assert!((isect.t - 0.5).abs() < TOLERANCE); // Should hit at t=0.5
        assert!((isect.point - Vec3::new(0.0, 0.0, -0.5)).length() < TOLERANCE);
        assert!((isect.normal - Vec3::Z).length() < TOLERANCE);
    }

    #[test]
    fn test_sphere_miss() {
        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let mut isect = Intersection::new();

        unit_sphere_ahead().intersect(&ray, &mut isect);

        assert_eq!(isect, Intersection::new());
    }

    #[test]
    fn test_sphere_behind_ray_is_ignored() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut isect = Intersection::new();

        unit_sphere_ahead().intersect(&ray, &mut isect);

        assert!(!isect.hit);
    }

    #[test]
    fn test_grazing_ray_is_a_miss() {
        // Tangent to the sphere: discriminant is exactly zero
        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let mut isect = Intersection::new();

        unit_sphere_ahead().intersect(&ray, &mut isect);

        assert!(!isect.hit);
    }

    #[test]
    fn test_origin_inside_sphere_is_ignored() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let mut isect = Intersection::new();

        sphere.intersect(&ray, &mut isect);

        assert!(!isect.hit);
    }

    #[test]
    fn test_normal_points_outward_with_unit_length() {
        let sphere = Sphere::new(Vec3::new(0.3, -0.2, -4.0), 1.25);
        let origins = [
            Vec3::ZERO,
            Vec3::new(5.0, 1.0, -4.0),
            Vec3::new(-3.0, 4.0, -9.0),
            Vec3::new(0.3, -6.0, -4.1),
        ];

        for origin in origins {
            // Aim slightly off-center so the hit is not along the axis
            let target = sphere.center + Vec3::new(0.2, 0.4, -0.1);
            let ray = Ray::new(origin, normalize(target - origin));
            let mut isect = Intersection::new();

            sphere.intersect(&ray, &mut isect);

            assert!(isect.hit, "ray from {origin:?} should hit");
            assert!((isect.normal.length() - 1.0).abs() < TOLERANCE);
            assert!(isect.normal.dot(isect.point - sphere.center) > 0.0);
            assert!(isect.normal.dot(ray.direction) < 0.0);
        }
    }

    #[test]
    fn test_closest_hit_is_order_independent() {
        let near = Sphere::new(Vec3::new(0.0, 0.1, -2.0), 0.5);
        let far = Sphere::new(Vec3::new(0.0, -0.1, -3.0), 0.8);
        let rays = [
            Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)),
            Ray::new(Vec3::ZERO, normalize(Vec3::new(0.0, -0.2, -1.0))),
            Ray::new(Vec3::ZERO, normalize(Vec3::new(0.1, 0.2, -1.0))),
            Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z),
            Ray::new(Vec3::ZERO, Vec3::X),
        ];

        for ray in rays {
            let mut ab = Intersection::new();
            near.intersect(&ray, &mut ab);
            far.intersect(&ray, &mut ab);

            let mut ba = Intersection::new();
            far.intersect(&ray, &mut ba);
            near.intersect(&ray, &mut ba);

            assert_eq!(ab, ba, "{ray:?}");
        }
    }

    #[test]
    fn test_farther_hit_does_not_overwrite() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut isect = Intersection::new();

        Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5).intersect(&ray, &mut isect);
        let first = isect;
        Sphere::new(Vec3::new(0.0, 0.0, -5.0), 0.5).intersect(&ray, &mut isect);

        assert_eq!(isect, first);
    }
}
