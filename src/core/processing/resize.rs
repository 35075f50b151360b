use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::core::processing::padding::center_on_canvas;
use crate::error::{Error, Result};
use crate::types::CanvasSize;

/// Dimensions of `original` scaled by `min(target_w / w, target_h / h)`, so the
/// larger relative side fits exactly and the other fits inside. Rounded to the
/// nearest pixel and never below 1.
pub fn calculate_fit_dimensions(
    original_cols: u32,
    original_rows: u32,
    target: CanvasSize,
) -> (u32, u32) {
    if original_cols == 0 || original_rows == 0 {
        return (0, 0);
    }

    let scale_x = target.width as f64 / original_cols as f64;
    let scale_y = target.height as f64 / original_rows as f64;
    let scale_factor = scale_x.min(scale_y);

    let new_cols = ((original_cols as f64 * scale_factor).round() as u32).clamp(1, target.width);
    let new_rows = ((original_rows as f64 * scale_factor).round() as u32).clamp(1, target.height);
    (new_cols, new_rows)
}

pub fn resize_rgba_image(
    image: &RgbaImage,
    target_cols: u32,
    target_rows: u32,
) -> Result<RgbaImage> {
    if image.dimensions() == (target_cols, target_rows) {
        return Ok(image.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        image.width(),
        image.height(),
        image.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(|e| Error::Resize(e.to_string()))?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Resize(e.to_string()))?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer has unexpected length".to_string()))
}

/// Scale `frame` to fit inside `canvas` preserving its aspect ratio, then
/// center it on a transparent canvas of exactly that size.
pub fn fit_to_canvas(frame: &RgbaImage, canvas: CanvasSize) -> Result<RgbaImage> {
    let (cols, rows) = frame.dimensions();
    let (new_cols, new_rows) = calculate_fit_dimensions(cols, rows, canvas);
    debug!(
        "Fitting frame {}x{} into {}: scaled to {}x{}",
        cols, rows, canvas, new_cols, new_rows
    );

    if new_cols == 0 || new_rows == 0 {
        return Ok(RgbaImage::new(canvas.width, canvas.height));
    }

    let resized = resize_rgba_image(frame, new_cols, new_rows)?;
    Ok(center_on_canvas(&resized, canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn wide_frames_fill_the_width() {
        let canvas = CanvasSize::new(660, 793);
        let (w, h) = calculate_fit_dimensions(400, 200, canvas);
        assert_eq!((w, h), (660, 330));
    }

    #[test]
    fn tall_frames_fill_the_height() {
        let canvas = CanvasSize::new(660, 793);
        let (w, h) = calculate_fit_dimensions(100, 400, canvas);
        assert_eq!(h, 793);
        // 100 * 793 / 400 = 198.25
        assert_eq!(w, 198);
    }

    #[test]
    fn aspect_ratio_is_preserved_within_rounding() {
        let canvas = CanvasSize::default();
        for &(w, h) in &[(37u32, 91u32), (1000, 3), (250, 250), (659, 794)] {
            let (nw, nh) = calculate_fit_dimensions(w, h, canvas);
            assert!(nw <= canvas.width && nh <= canvas.height);
            assert!(nw == canvas.width || nh == canvas.height);
            let original = w as f64 / h as f64;
            // one pixel of rounding on either side
            let lo = (nw as f64 - 1.0).max(0.5) / (nh as f64 + 1.0);
            let hi = (nw as f64 + 1.0) / (nh as f64 - 1.0).max(0.5);
            assert!(original >= lo && original <= hi, "{w}x{h} -> {nw}x{nh}");
        }
    }

    #[test]
    fn upscales_small_frames() {
        let canvas = CanvasSize::new(40, 40);
        assert_eq!(calculate_fit_dimensions(10, 20, canvas), (20, 40));
    }

    #[test]
    fn fitted_frame_is_centered_on_transparency() {
        let frame = RgbaImage::from_pixel(20, 10, Rgba([200, 10, 10, 255]));
        let out = fit_to_canvas(&frame, CanvasSize::new(20, 20)).unwrap();
        assert_eq!(out.dimensions(), (20, 20));
        // 10 rows of padding split 5 / 5
        assert_eq!(out.get_pixel(10, 2)[3], 0);
        assert_eq!(out.get_pixel(10, 17)[3], 0);
        assert_eq!(*out.get_pixel(10, 10), Rgba([200, 10, 10, 255]));
    }

    #[test]
    fn same_size_resize_is_a_copy() {
        let frame = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 4]));
        let out = resize_rgba_image(&frame, 3, 3).unwrap();
        assert_eq!(out, frame);
    }
}
