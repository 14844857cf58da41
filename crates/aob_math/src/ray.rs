use crate::{Float, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// The direction does not have to be unit length for intersection tests;
/// camera rays are normalized before use so `t` is a distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: Float) -> Vec3 {
        self.origin + self.direction * t
    }
}
