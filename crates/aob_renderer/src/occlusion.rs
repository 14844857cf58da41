//! Monte Carlo ambient occlusion.
//!
//! For a surface hit, casts an `n × n` grid of cosine-weighted rays over the
//! hemisphere around the normal and reports the fraction that escape the
//! scene without hitting anything.

use crate::{Color, Intersection, Scene};
use aob_math::{consts::PI, Float, OrthoBasis, Ray, Vec3};
use rand::{Rng, RngCore};

/// Offset along the normal applied to occlusion ray origins to avoid
/// hitting the surface being shaded.
pub const SURFACE_EPSILON: Float = 1.0e-4;

/// Map two uniform numbers in `[0, 1)` to a cosine-weighted direction in the
/// local frame where +Z is the surface normal.
#[inline]
pub fn hemisphere_direction(u1: Float, u2: Float) -> Vec3 {
    let theta = u1.sqrt();
    let phi = 2.0 * PI * u2;

    Vec3::new(
        phi.cos() * theta,
        phi.sin() * theta,
        (1.0 - theta * theta).sqrt(),
    )
}

#[inline]
fn gen_float(rng: &mut dyn RngCore) -> Float {
    rng.gen()
}

/// Compute the ambient occlusion at a surface hit.
///
/// Returns a grey color whose channels are the fraction of the
/// `ao_samples * ao_samples` rays that hit nothing: 1 is fully open, 0 is
/// fully occluded.
pub fn ambient_occlusion(
    scene: &Scene,
    isect: &Intersection,
    ao_samples: u32,
    rng: &mut dyn RngCore,
) -> Color {
    debug_assert!(ao_samples > 0, "ambient occlusion needs at least one sample");

    let origin = isect.point + isect.normal * SURFACE_EPSILON;
    let basis = OrthoBasis::from_normal(isect.normal);

    let total = ao_samples * ao_samples;
    let mut occluded = 0u32;

    for _ in 0..ao_samples {
        for _ in 0..ao_samples {
            let u1 = gen_float(rng);
            let u2 = gen_float(rng);
            let direction = basis.to_world(hemisphere_direction(u1, u2));

            if scene.closest_hit(&Ray::new(origin, direction)).hit {
                occluded += 1;
            }
        }
    }

    let open = (total - occluded) as Float / total as Float;
    Color::splat(open)
}
