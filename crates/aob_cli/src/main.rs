//! aob: render the aobench scene one row at a time and save the result.

mod host;

use std::path::PathBuf;

use anyhow::{Context, Result};
use aob_renderer::{save_image, RenderConfig, Renderer, Scene};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::host::Progressive;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "aob")]
#[command(version)]
#[command(about = "Ambient occlusion benchmark renderer")]
struct Cli {
    /// JSON render config; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Sub-samples per pixel axis
    #[arg(long)]
    subsamples: Option<u32>,

    /// Ambient occlusion samples per hemisphere axis
    #[arg(long)]
    ao_samples: Option<u32>,

    /// Number of frames to render
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Seed for a reproducible image
    #[arg(long)]
    seed: Option<u64>,

    /// Output path; the extension picks the format (.ppm, .png, ...)
    #[arg(short, long, default_value = "aobench.ppm")]
    output: PathBuf,

    /// Set logging level
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LogLevel,
}

impl Cli {
    /// Merge the optional config file with command-line overrides.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(subsamples) = self.subsamples {
            config.subsamples = subsamples;
        }
        if let Some(ao_samples) = self.ao_samples {
            config.ao_samples = ao_samples;
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.render_config()?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "Rendering {}x{} ({} subsamples, {} AO samples) for {} frame(s)",
        config.width,
        config.height,
        config.subsamples,
        config.ao_samples,
        cli.frames
    );

    let mut host = Progressive::new(Renderer::new(Scene::aobench(), config, rng));

    while host.frame() < cli.frames {
        let Some(stats) = host.tick() else {
            continue;
        };

        log::info!("{}", host.status());

        // Only the first frame is saved
        if stats.frame == 0 {
            let image = host.image();
            save_image(&cli.output, image.width, image.height, image.as_bytes())
                .with_context(|| format!("Failed to save {}", cli.output.display()))?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.into())
        .init();

    log::info!("Starting aob");

    run(&cli)
}
