//! Near-white background removal by HSV thresholding.
use image::{GrayImage, Luma, Rgba, RgbaImage, imageops};
use imageproc::distance_transform::Norm;
use imageproc::morphology;

use crate::core::params::BackgroundParams;
use crate::types::HsvRange;

/// 8-bit HSV: hue in 0..180 (degrees / 2), saturation and value in 0..=255.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = (max - min) as f64;

    let v = max;
    let s = if max == 0 {
        0
    } else {
        (diff * 255.0 / max as f64).round() as u8
    };

    if diff == 0.0 {
        return [0, s, v];
    }

    let (r, g, b) = (r as f64, g as f64, b as f64);
    let mut degrees = if max as f64 == r {
        60.0 * (g - b) / diff
    } else if max as f64 == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }

    let h = (degrees / 2.0).round() as u32 % 180;
    [h as u8, s, v]
}

/// 255 where the pixel's color (alpha ignored) lies inside `range`, else 0.
pub fn in_range_mask(image: &RgbaImage, range: &HsvRange) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, _]) = *image.get_pixel(x, y);
        if range.contains(rgb_to_hsv(r, g, b)) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Mask of the pixels to keep: the inverted background window, refined with
/// one morphological closing.
pub fn foreground_mask(image: &RgbaImage, params: &BackgroundParams) -> GrayImage {
    let mut mask = in_range_mask(image, &params.range);
    imageops::invert(&mut mask);
    if params.close_radius > 0 {
        mask = morphology::close(&mask, Norm::LInf, params.close_radius);
    }
    mask
}

/// Zero all four channels outside the foreground mask; keep everything else.
pub fn remove_background(image: &RgbaImage, params: &BackgroundParams) -> RgbaImage {
    let mask = foreground_mask(image, params);
    let mut output = image.clone();
    for (pixel, keep) in output.pixels_mut().zip(mask.pixels()) {
        if keep[0] == 0 {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
    output
}
