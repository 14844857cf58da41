//! Orthonormal tangent frame around a surface normal.

use crate::{normalize, Float, Vec3};

/// Components with a magnitude below this are "not aligned" with the normal.
const SEED_THRESHOLD: Float = 0.6;

/// Three mutually perpendicular unit vectors with `normal` as local +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoBasis {
    pub tangent: Vec3,
    pub bitangent: Vec3,
    pub normal: Vec3,
}

impl OrthoBasis {
    /// Build a frame around `normal`.
    ///
    /// A helper axis is picked from X, Y, Z (in that order) as the first one
    /// the normal is not nearly aligned with, falling back to X. The tangent
    /// is `normalize(seed × normal)` and the bitangent `normalize(normal × tangent)`.
    /// Sample directions depend on this exact choice.
    pub fn from_normal(normal: Vec3) -> Self {
        let seed = seed_axis(normal);
        let tangent = normalize(seed.cross(normal));
        let bitangent = normalize(normal.cross(tangent));

        Self {
            tangent,
            bitangent,
            normal,
        }
    }

    /// Transform a direction expressed in this frame into world space.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.tangent * local.x + self.bitangent * local.y + self.normal * local.z
    }
}

fn seed_axis(n: Vec3) -> Vec3 {
    if n.x.abs() < SEED_THRESHOLD {
        Vec3::X
    } else if n.y.abs() < SEED_THRESHOLD {
        Vec3::Y
    } else if n.z.abs() < SEED_THRESHOLD {
        Vec3::Z
    } else {
        Vec3::X
    }
}
