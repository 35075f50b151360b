//! I/O layer: frame discovery on disk, GIF frame decoding, and `writers`
//! for animations, sprite sheets and atlas sidecars.
pub mod discovery;
pub mod gif;
pub mod writers;

use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::Result;

/// Decode any supported image file, keeping its native channel layout.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    Ok(image::open(path)?)
}

/// Decode an image file and convert it to 8-bit RGBA (opaque alpha added
/// when the file has none).
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    Ok(open_image(path)?.into_rgba8())
}
