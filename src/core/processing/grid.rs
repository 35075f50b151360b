//! Row-major sprite sheet layout and composition.
use image::{RgbaImage, imageops};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::SheetParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl SheetLayout {
    /// Layout for `frame_count` cells of `cell_width` x `cell_height`.
    /// `rows = ceil(frame_count / columns)`; the column count is either the
    /// configured one or `min(frame_count, columns)` for compact sheets.
    pub fn new(frame_count: usize, cell_width: u32, cell_height: u32, params: &SheetParams) -> Self {
        let per_row = params.columns.max(1) as usize;
        let rows = frame_count.div_ceil(per_row) as u32;
        let columns = if params.fill_columns {
            per_row as u32
        } else {
            frame_count.min(per_row) as u32
        };
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
        }
    }

    pub fn sheet_width(&self) -> u32 {
        self.cell_width * self.columns
    }

    pub fn sheet_height(&self) -> u32 {
        self.cell_height * self.rows
    }

    /// Grid position `(row, col)` of frame `index`.
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let per_row = self.columns.max(1) as usize;
        ((index / per_row) as u32, (index % per_row) as u32)
    }

    /// Pixel origin of frame `index` on the sheet.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let (row, col) = self.cell(index);
        (col * self.cell_width, row * self.cell_height)
    }
}

/// Paste every frame at its row-major cell on a transparent sheet. Pixels are
/// replaced, not blended; frames larger than a cell spill into (and are
/// overwritten by) later cells, matching a plain paste.
pub fn compose_sheet<'a, I>(frames: I, layout: &SheetLayout) -> RgbaImage
where
    I: IntoIterator<Item = &'a RgbaImage>,
{
    let mut sheet = RgbaImage::new(layout.sheet_width(), layout.sheet_height());
    for (idx, frame) in frames.into_iter().enumerate() {
        let (x, y) = layout.cell_origin(idx);
        imageops::replace(&mut sheet, frame, x as i64, y as i64);
    }
    info!(
        "Composed {}x{} sheet ({} columns x {} rows of {}x{})",
        sheet.width(),
        sheet.height(),
        layout.columns,
        layout.rows,
        layout.cell_width,
        layout.cell_height
    );
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn compact_layout_shrinks_to_frame_count() {
        let layout = SheetLayout::new(3, 10, 20, &SheetParams::compact());
        assert_eq!((layout.columns, layout.rows), (3, 1));
        assert_eq!((layout.sheet_width(), layout.sheet_height()), (30, 20));

        let layout = SheetLayout::new(17, 10, 20, &SheetParams::compact());
        assert_eq!((layout.columns, layout.rows), (8, 3));
    }

    #[test]
    fn full_layout_keeps_every_column() {
        let layout = SheetLayout::new(3, 100, 100, &SheetParams::default());
        assert_eq!((layout.sheet_width(), layout.sheet_height()), (800, 100));
    }

    #[test]
    fn frames_land_row_major() {
        let layout = SheetLayout::new(20, 4, 3, &SheetParams::default());
        assert_eq!(layout.cell(0), (0, 0));
        assert_eq!(layout.cell(7), (0, 7));
        assert_eq!(layout.cell(8), (1, 0));
        assert_eq!(layout.cell(19), (2, 3));
        assert_eq!(layout.cell_origin(9), (4, 3));
    }

    #[test]
    fn zero_columns_behaves_like_one() {
        let params = SheetParams {
            columns: 0,
            fill_columns: true,
        };
        let layout = SheetLayout::new(2, 1, 1, &params);
        assert_eq!((layout.columns, layout.rows), (1, 2));
    }

    #[test]
    fn compose_places_each_frame_in_its_cell() {
        let frames: Vec<RgbaImage> = (0..10u8)
            .map(|i| RgbaImage::from_pixel(2, 2, Rgba([i, 0, 0, 255])))
            .collect();
        let layout = SheetLayout::new(frames.len(), 2, 2, &SheetParams::compact());
        let sheet = compose_sheet(&frames, &layout);
        assert_eq!(sheet.dimensions(), (16, 4));
        for i in 0..10usize {
            let (x, y) = layout.cell_origin(i);
            assert_eq!(sheet.get_pixel(x + 1, y + 1)[0], i as u8);
        }
        // cells past the last frame stay transparent
        assert_eq!(sheet.get_pixel(15, 3)[3], 0);
    }
}
