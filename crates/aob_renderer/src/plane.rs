//! Infinite plane primitive.

use crate::intersection::{Intersect, Intersection};
use aob_math::{Float, Ray, Vec3};

/// Rays whose direction is closer than this to lying in the plane are
/// treated as parallel.
const PARALLEL_EPSILON: Float = 1.0e-17;

/// An infinite plane through `point` with unit `normal`.
///
/// Planes are two-sided: a ray hits it from either side, and the recorded
/// normal is always `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// Create a new plane.
    pub const fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray, isect: &mut Intersection) {
        let d = -self.point.dot(self.normal);
        let v = ray.direction.dot(self.normal);

        if v.abs() < PARALLEL_EPSILON {
            return;
        }

        let t = -(ray.origin.dot(self.normal) + d) / v;

        if isect.accepts(t) {
            isect.record(t, ray.at(t), self.normal);
        }
    }
}
