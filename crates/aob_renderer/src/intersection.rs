//! Closest-hit record and the trait primitives use to update it.

use aob_math::{Float, Ray, Vec3};

/// `t` of a fresh record. Hits at or beyond this distance are ignored.
pub const T_MAX: Float = 1.0e17;

/// Nearest ray intersection found so far.
///
/// Primitives only overwrite the record with a hit that is in front of the
/// ray origin and strictly closer than the current one, so testing the same
/// primitives in any order ends with the same record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the nearest hit
    pub t: Float,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Whether anything has been hit
    pub hit: bool,
}

impl Intersection {
    /// Create an empty record with `t` at [`T_MAX`].
    pub fn new() -> Self {
        Self {
            t: T_MAX,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            hit: false,
        }
    }

    /// Whether a candidate at `t` would replace the current hit.
    #[inline]
    pub fn accepts(&self, t: Float) -> bool {
        t > 0.0 && t < self.t
    }

    #[inline]
    pub(crate) fn record(&mut self, t: Float, point: Vec3, normal: Vec3) {
        self.t = t;
        self.point = point;
        self.normal = normal;
        self.hit = true;
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for geometry that can be tested against rays.
pub trait Intersect: Send + Sync {
    /// Test `ray` against this object and update `isect` if the hit is
    /// closer than the one already recorded. Misses leave it untouched.
    fn intersect(&self, ray: &Ray, isect: &mut Intersection);
}
