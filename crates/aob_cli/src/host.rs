//! Progressive host loop state.
//!
//! Renders one row per tick so the caller stays responsive between rows,
//! and keeps the row/frame counters and per-frame timing.

use std::time::{Duration, Instant};

use aob_renderer::{ImageBuffer, Renderer, PRECISION_NAME};
use rand::RngCore;

/// Timing of a completed frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    /// Index of the frame that just finished, starting at 0
    pub frame: u32,
    /// Time spent inside the renderer for the whole frame
    pub elapsed: Duration,
}

impl FrameStats {
    /// Frames per second implied by the render time.
    pub fn fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            1.0 / secs
        } else {
            f64::INFINITY
        }
    }
}

/// Row-at-a-time render loop.
pub struct Progressive<R: RngCore> {
    renderer: Renderer<R>,
    image: ImageBuffer,
    row: u32,
    frame: u32,
    current: Duration,
    last: Option<FrameStats>,
}

impl<R: RngCore> Progressive<R> {
    /// Create a loop with a zeroed image sized for the renderer's config.
    pub fn new(renderer: Renderer<R>) -> Self {
        let image = ImageBuffer::for_config(renderer.config());
        Self {
            renderer,
            image,
            row: 0,
            frame: 0,
            current: Duration::ZERO,
            last: None,
        }
    }

    /// Render the next row. Returns the frame's stats when this row completed it.
    pub fn tick(&mut self) -> Option<FrameStats> {
        let begin = Instant::now();
        self.renderer.render_row(&mut self.image, self.row);
        self.current += begin.elapsed();
        self.row += 1;

        if self.row < self.renderer.config().height {
            return None;
        }

        let stats = FrameStats {
            frame: self.frame,
            elapsed: self.current,
        };
        self.last = Some(stats);
        self.current = Duration::ZERO;
        self.row = 0;
        self.frame += 1;
        Some(stats)
    }

    /// Number of completed frames.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// The image being rendered into.
    pub fn image(&self) -> &ImageBuffer {
        &self.image
    }

    /// One-line status, e.g. `aobench (256x256, double): 812 ms / 1.232 fps, frame #3, row #17`.
    pub fn status(&self) -> String {
        let config = self.renderer.config();
        let elapsed = self.last.map_or(self.current, |stats| stats.elapsed);
        let fps = FrameStats { frame: self.frame, elapsed }.fps();

        format!(
            "aobench ({}x{}, {}): {} ms / {:.3} fps, frame #{}, row #{}",
            config.width,
            config.height,
            PRECISION_NAME,
            elapsed.as_millis(),
            fps,
            self.frame,
            self.row
        )
    }
}
