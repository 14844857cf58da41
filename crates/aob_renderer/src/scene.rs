//! The fixed aobench scene.

use crate::intersection::{Intersect, Intersection};
use crate::{Plane, Sphere};
use aob_math::{Ray, Vec3};

/// Analytic scene: a list of spheres above one plane.
///
/// Scenes are built once and only read while rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    spheres: Vec<Sphere>,
    plane: Plane,
}

impl Scene {
    /// Create a scene from arbitrary spheres and a plane.
    pub fn new(spheres: Vec<Sphere>, plane: Plane) -> Self {
        Self { spheres, plane }
    }

    /// The benchmark scene: three unit-diameter spheres resting on y = -0.5.
    pub fn aobench() -> Self {
        Self::new(
            vec![
                Sphere::new(Vec3::new(-2.0, 0.0, -3.5), 0.5),
                Sphere::new(Vec3::new(-0.5, 0.0, -3.0), 0.5),
                Sphere::new(Vec3::new(1.0, 0.0, -2.2), 0.5),
            ],
            Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::Y),
        )
    }

    /// Get the spheres.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Get the ground plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Find the nearest hit of `ray` against the whole scene.
    pub fn closest_hit(&self, ray: &Ray) -> Intersection {
        let mut isect = Intersection::new();
        self.intersect(ray, &mut isect);
        isect
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::aobench()
    }
}

impl Intersect for Scene {
    fn intersect(&self, ray: &Ray, isect: &mut Intersection) {
        for sphere in &self.spheres {
            sphere.intersect(ray, isect);
        }
        self.plane.intersect(ray, isect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aob_math::{normalize, Float};

    #[test]
    fn test_aobench_geometry() {
        let scene = Scene::aobench();

        assert_eq!(scene.spheres().len(), 3);
        assert_eq!(scene.spheres()[0].center, Vec3::new(-2.0, 0.0, -3.5));
        assert_eq!(scene.spheres()[1].center, Vec3::new(-0.5, 0.0, -3.0));
        assert_eq!(scene.spheres()[2].center, Vec3::new(1.0, 0.0, -2.2));
        assert!(scene.spheres().iter().all(|s| s.radius == 0.5));

        assert_eq!(scene.plane().point, Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(scene.plane().normal, Vec3::Y);
    }

    #[test]
    fn test_construction_is_bit_identical() {
        let a = Scene::aobench();
        let b = Scene::aobench();
        assert_eq!(a, b);

        let bits = |scene: &Scene| -> Vec<u64> {
            scene
                .spheres()
                .iter()
                .flat_map(|s| [s.center.x, s.center.y, s.center.z, s.radius])
                .chain(scene.plane().point.to_array())
                .chain(scene.plane().normal.to_array())
                .map(|f| f.to_bits() as u64)
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_closest_hit_picks_nearest_sphere() {
        let scene = Scene::aobench();

        // Straight at the center of the middle sphere
        let center = scene.spheres()[1].center;
        let ray = Ray::new(Vec3::ZERO, normalize(center));
        let isect = scene.closest_hit(&ray);

        assert!(isect.hit);
        let expected: Float = center.length() - 0.5;
        assert!((isect.t - expected).abs() < 1.0e-5);
    }

    #[test]
    fn test_closest_hit_ground_and_sky() {
        let scene = Scene::aobench();

        let down = scene.closest_hit(&Ray::new(Vec3::ZERO, -Vec3::Y));
        assert!(down.hit);
        assert_eq!(down.normal, Vec3::Y);

        let up = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::Y));
        assert!(!up.hit);
    }
}
