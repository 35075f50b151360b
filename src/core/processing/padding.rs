use image::{RgbaImage, imageops};
use tracing::debug;

use crate::types::CanvasSize;

/// Leftover margin before the image on one axis; an odd remainder puts the
/// extra pixel after the image.
pub fn centered_offset(canvas: u32, size: u32) -> u32 {
    canvas.saturating_sub(size) / 2
}

/// Center `image` on a transparent canvas. Images larger than the canvas are
/// clipped around their center.
pub fn center_on_canvas(image: &RgbaImage, canvas: CanvasSize) -> RgbaImage {
    let (cols, rows) = image.dimensions();
    let pad_cols = centered_offset(canvas.width, cols) as i64;
    let pad_rows = centered_offset(canvas.height, rows) as i64;
    let shift_cols = (cols.saturating_sub(canvas.width) / 2) as i64;
    let shift_rows = (rows.saturating_sub(canvas.height) / 2) as i64;

    debug!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );

    let mut padded = RgbaImage::new(canvas.width, canvas.height);
    imageops::replace(
        &mut padded,
        image,
        pad_cols - shift_cols,
        pad_rows - shift_rows,
    );
    padded
}

/// Put `image` at the top-left of a transparent canvas of the given size,
/// clipping or padding to the right and bottom.
pub fn pad_to_size(image: &RgbaImage, cols: u32, rows: u32) -> RgbaImage {
    if image.dimensions() == (cols, rows) {
        return image.clone();
    }
    let mut padded = RgbaImage::new(cols, rows);
    imageops::replace(&mut padded, image, 0, 0);
    padded
}
