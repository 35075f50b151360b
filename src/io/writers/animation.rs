use std::fs::File;
use std::io::BufWriter;
use std::num::NonZeroU16;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use tracing::info;
use zenwebp::decoder::LoopCount;
use zenwebp::mux::{AnimationConfig, AnimationEncoder};
use zenwebp::{EncoderConfig, PixelLayout};

use crate::core::params::AnimationParams;
use crate::error::{Error, Result};

/// Plays clamped to the 16-bit counters WebP and GIF store; 0 means forever.
fn plays_u16(loop_count: u32) -> Option<NonZeroU16> {
    NonZeroU16::new(loop_count.min(u16::MAX as u32) as u16)
}

/// Write equally sized RGBA frames as a lossless animated WebP with a
/// transparent background. Every frame is shown for `frame_duration_ms`.
pub fn write_webp(output: &Path, frames: &[RgbaImage], params: &AnimationParams) -> Result<()> {
    let first = frames.first().ok_or_else(|| Error::Encode("no frames to encode".into()))?;
    let (width, height) = first.dimensions();

    let config = AnimationConfig {
        background_color: [0, 0, 0, 0],
        loop_count: match plays_u16(params.loop_count) {
            None => LoopCount::Forever,
            Some(n) => LoopCount::Times(n),
        },
        ..Default::default()
    };
    let mut encoder = AnimationEncoder::new(width, height, config)
        .map_err(|e| Error::Encode(format!("{e:?}")))?;

    let frame_config = EncoderConfig::new_lossless();
    let duration = params.frame_duration_ms as u32;
    for (i, frame) in frames.iter().enumerate() {
        encoder
            .add_frame(
                frame.as_raw(),
                PixelLayout::Rgba8,
                i as u32 * duration,
                &frame_config,
            )
            .map_err(|e| Error::Encode(format!("{e:?}")))?;
    }
    let bytes = encoder
        .finalize(duration)
        .map_err(|e| Error::Encode(format!("{e:?}")))?;
    std::fs::write(output, bytes)?;

    info!("write_webp: {} frames saved to {:?}", frames.len(), output);
    Ok(())
}

/// Write equally sized RGBA frames as an animated PNG. Every frame replaces
/// the previous one and is shown for `frame_duration_ms`.
pub fn write_apng(output: &Path, frames: &[RgbaImage], params: &AnimationParams) -> Result<()> {
    let first = frames.first().ok_or_else(|| Error::Encode("no frames to encode".into()))?;
    let (width, height) = first.dimensions();

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let mut encoder = apng_encoder::Encoder::create(
        &mut writer,
        apng_encoder::Meta {
            width,
            height,
            color: apng_encoder::Color::RGBA(8),
            frames: frames.len() as u32,
            plays: match params.loop_count {
                0 => None,
                n => Some(n),
            },
        },
    )
    .map_err(|e| Error::Encode(format!("{e:?}")))?;

    let frame_meta = apng_encoder::Frame {
        delay: Some(apng_encoder::Delay::new(params.frame_duration_ms, 1000)),
        ..Default::default()
    };
    for frame in frames {
        encoder
            .write_frame(frame.as_raw(), Some(&frame_meta), None, None)
            .map_err(|e| Error::Encode(format!("{e:?}")))?;
    }
    encoder
        .finish()
        .map_err(|e| Error::Encode(format!("{e:?}")))?;

    info!("write_apng: {} frames saved to {:?}", frames.len(), output);
    Ok(())
}

/// Write RGBA frames as an animated GIF (palette-quantized per frame).
pub fn write_gif(output: &Path, frames: &[RgbaImage], params: &AnimationParams) -> Result<()> {
    if frames.is_empty() {
        return Err(Error::Encode("no frames to encode".into()));
    }

    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let mut encoder = GifEncoder::new(writer);
    // NETSCAPE counts repeats after the first play
    encoder.set_repeat(match plays_u16(params.loop_count) {
        None => Repeat::Infinite,
        Some(n) => Repeat::Finite(n.get() - 1),
    })?;

    let delay = Delay::from_numer_denom_ms(params.frame_duration_ms as u32, 1);
    encoder.encode_frames(
        frames
            .iter()
            .map(|frame| Frame::from_parts(frame.clone(), 0, 0, delay)),
    )?;

    info!("write_gif: {} frames saved to {:?}", frames.len(), output);
    Ok(())
}
