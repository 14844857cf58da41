//! Writing rendered RGB buffers to disk.
//!
//! PPM (`P6`) is written directly; any other extension goes through the
//! `image` crate's encoders.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while exporting an image.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

fn check_buffer(width: u32, height: u32, pixels: &[u8]) -> ExportResult<()> {
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(ExportError::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// Write a binary PPM (header followed by raw interleaved RGB bytes).
pub fn write_ppm<W: Write>(writer: &mut W, width: u32, height: u32, pixels: &[u8]) -> ExportResult<()> {
    check_buffer(width, height, pixels)?;

    write!(writer, "P6\n{} {}\n255\n", width, height)?;
    writer.write_all(pixels)?;
    Ok(())
}

/// Save a binary PPM file.
///
/// Nothing is created if the buffer does not match the image size.
pub fn save_ppm(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[u8]) -> ExportResult<()> {
    let path = path.as_ref();
    check_buffer(width, height, pixels)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, width, height, pixels)?;
    writer.flush()?;

    log::info!("Saved {}x{} image to {}", width, height, path.display());
    Ok(())
}

/// Save an image, picking the format from the file extension.
pub fn save_image(path: impl AsRef<Path>, width: u32, height: u32, pixels: &[u8]) -> ExportResult<()> {
    let path = path.as_ref();

    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));
    if is_ppm {
        return save_ppm(path, width, height, pixels);
    }

    check_buffer(width, height, pixels)?;
    let image = image::RgbImage::from_raw(width, height, pixels.to_vec()).ok_or(
        ExportError::BufferSize {
            expected: width as usize * height as usize * 3,
            actual: pixels.len(),
        },
    )?;
    image.save(path)?;

    log::info!("Saved {}x{} image to {}", width, height, path.display());
    Ok(())
}
