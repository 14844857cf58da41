//! Vector math for the aobench renderer.
//!
//! Scalars are `f64` and vectors are `glam::DVec3` by default. The
//! `single-precision` feature switches both to `f32` / `glam::Vec3`; every
//! downstream type is written against the [`Float`] and [`Vec3`] aliases so
//! both modes build from the same source.

mod basis;
mod ray;

pub use basis::OrthoBasis;
pub use ray::Ray;

#[cfg(not(feature = "single-precision"))]
mod precision {
    pub type Float = f64;
    pub type Vec3 = glam::DVec3;
    pub use std::f64::consts;

    pub const PRECISION_NAME: &str = "double";
}

#[cfg(feature = "single-precision")]
mod precision {
    pub type Float = f32;
    pub type Vec3 = glam::Vec3;
    pub use std::f32::consts;

    pub const PRECISION_NAME: &str = "float";
}

pub use precision::{consts, Float, Vec3, PRECISION_NAME};

/// Vectors whose length is at or below this are left as they are by [`normalize`].
pub const NORMALIZE_EPSILON: Float = 1.0e-17;

/// Scale `v` to unit length.
///
/// Near-zero vectors are returned unchanged instead of blowing up into
/// infinities or NaNs.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.length();

    if length.abs() > NORMALIZE_EPSILON {
        v / length
    } else {
        v
    }
}
