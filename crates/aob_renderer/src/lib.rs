//! aobench - ambient occlusion scanline renderer
//!
//! Renders a fixed scene of three spheres on a ground plane, shading every
//! primary hit by the fraction of its hemisphere that is open to the sky.
//! The image is produced one row per call into a caller-owned RGB buffer so
//! a host can interleave rendering with its own work.

mod config;
mod export;
mod intersection;
mod occlusion;
mod plane;
mod renderer;
mod scene;
mod sphere;

pub use config::{ConfigError, ConfigResult, RenderConfig, DEFAULT_AO_SAMPLES, DEFAULT_SUBSAMPLES};
pub use export::{save_image, save_ppm, write_ppm, ExportError, ExportResult};
pub use intersection::{Intersect, Intersection, T_MAX};
pub use occlusion::{ambient_occlusion, hemisphere_direction, SURFACE_EPSILON};
pub use plane::Plane;
pub use renderer::{clamp, render_frame, render_row, ImageBuffer, Renderer};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export the math types from aob_math
pub use aob_math::{Float, OrthoBasis, Ray, Vec3, PRECISION_NAME};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;
