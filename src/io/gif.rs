use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// One fully composited GIF frame and how long it is shown.
#[derive(Debug, Clone)]
pub struct GifFrame {
    pub image: RgbaImage,
    pub delay_ms: u32,
}

/// Decode every frame of a GIF in native order. Running out of frames ends
/// the sequence; any other decoder error is returned.
pub fn read_gif_frames(path: &Path) -> Result<Vec<GifFrame>> {
    if !path.is_file() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let decoder = GifDecoder::new(reader)?;

    let mut frames = Vec::new();
    for frame in decoder.into_frames() {
        let frame = frame?;
        let (numer, denom) = frame.delay().numer_denom_ms();
        let delay_ms = if denom == 0 { 0 } else { numer / denom };
        frames.push(GifFrame {
            image: frame.into_buffer(),
            delay_ms,
        });
    }

    debug!("Decoded {} frames from {:?}", frames.len(), path);
    Ok(frames)
}
