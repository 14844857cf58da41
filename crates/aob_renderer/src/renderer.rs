//! Scanline renderer.
//!
//! Implements:
//! - One-row-per-call rendering into a caller-owned RGB buffer
//! - Box-filtered sub-pixel antialiasing
//! - Ambient occlusion shading of every primary hit

use crate::occlusion::ambient_occlusion;
use crate::{Color, RenderConfig, Scene};
use aob_math::{normalize, Float, Ray, Vec3};
use rand::RngCore;

/// Quantize a color channel to a byte.
///
/// Scales by 255.5, truncates toward zero and saturates to `[0, 255]`.
#[inline]
pub fn clamp(value: Float) -> u8 {
    let i = (value * 255.5) as i64;
    i.clamp(0, 255) as u8
}

/// Render image row `row` into `image`.
///
/// `image` must hold `config.width * config.height * 3` bytes. Only the
/// bytes `[3 * row * width, 3 * (row + 1) * width)` are written.
pub fn render_row(
    scene: &Scene,
    config: &RenderConfig,
    image: &mut [u8],
    row: u32,
    rng: &mut dyn RngCore,
) {
    debug_assert!(row < config.height, "row {} out of range", row);
    debug_assert!(image.len() >= config.buffer_len(), "image buffer too small");

    let half_w = config.width as Float / 2.0;
    let half_h = config.height as Float / 2.0;
    let subsamples = config.subsamples as Float;
    let y = row as Float;

    let stride = config.width as usize * 3;
    let start = row as usize * stride;
    let pixels = &mut image[start..start + stride];

    for (x, pixel) in pixels.chunks_exact_mut(3).enumerate() {
        let x = x as Float;
        let mut color = Color::ZERO;

        for v in 0..config.subsamples {
            for u in 0..config.subsamples {
                let px = (x + (u as Float / subsamples) - half_w) / half_w;
                let py = -(y + (v as Float / subsamples) - half_h) / half_h;

                let ray = Ray::new(Vec3::ZERO, normalize(Vec3::new(px, py, -1.0)));
                let isect = scene.closest_hit(&ray);

                // Misses stay black
                if isect.hit {
                    color += ambient_occlusion(scene, &isect, config.ao_samples, rng);
                }
            }
        }

        color /= (config.subsamples * config.subsamples) as Float;

        pixel[0] = clamp(color.x);
        pixel[1] = clamp(color.y);
        pixel[2] = clamp(color.z);
    }

    log::trace!("Rendered row {}", row);
}

/// Render every row of the image, top to bottom.
pub fn render_frame(scene: &Scene, config: &RenderConfig, image: &mut [u8], rng: &mut dyn RngCore) {
    log::debug!(
        "Rendering {}x{} frame ({}x{} subsamples, {}x{} AO samples)",
        config.width,
        config.height,
        config.subsamples,
        config.subsamples,
        config.ao_samples,
        config.ao_samples
    );

    for row in 0..config.height {
        render_row(scene, config, image, row, rng);
    }
}

/// Owned, zero-initialized RGB buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Create a buffer sized for `config`.
    pub fn for_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = 3 * (y as usize * self.width as usize + x as usize);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Get the bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * 3;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutably borrow the raw bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

/// A scene, its configuration and a random generator bundled together for
/// hosts that render one row at a time.
pub struct Renderer<R: RngCore> {
    scene: Scene,
    config: RenderConfig,
    rng: R,
}

impl<R: RngCore> Renderer<R> {
    /// Create a new renderer.
    pub fn new(scene: Scene, config: RenderConfig, rng: R) -> Self {
        Self { scene, config, rng }
    }

    /// Get the scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get the render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one row into `image`.
    pub fn render_row(&mut self, image: &mut ImageBuffer, row: u32) {
        debug_assert_eq!((image.width, image.height), (self.config.width, self.config.height));
        render_row(&self.scene, &self.config, &mut image.pixels, row, &mut self.rng);
    }

    /// Render all rows into `image`.
    pub fn render_frame(&mut self, image: &mut ImageBuffer) {
        debug_assert_eq!((image.width, image.height), (self.config.width, self.config.height));
        render_frame(&self.scene, &self.config, &mut image.pixels, &mut self.rng);
    }
}
