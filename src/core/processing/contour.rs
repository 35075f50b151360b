//! Reference silhouettes: binarize a reference image, keep its largest external
//! contour, and use that contour to crop and mask other frames.
use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage, imageops};
use imageproc::contours::{BorderType, find_contours};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Axis-aligned bounding box of a point set; width and height count pixels,
/// so a single point has size 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn of_points(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            x: min_x.max(0) as u32,
            y: min_y.max(0) as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }
}

/// Single-channel mask of a reference image: its alpha channel when the
/// decoded image carries one, otherwise its luminance.
pub fn reference_mask(image: &DynamicImage) -> GrayImage {
    if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            Luma([rgba.get_pixel(x, y)[3]])
        })
    } else {
        image.to_luma8()
    }
}

/// 255 where the mask is strictly above `threshold`, else 0.
pub fn binarize(mask: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        if mask.get_pixel(x, y)[0] > threshold {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Enclosed area of a closed polygon (shoelace formula).
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    twice_area.abs() as f64 / 2.0
}

/// Outermost borders of the binary image; holes and nested shapes are ignored.
pub fn external_contours(binary: &GrayImage) -> Vec<Vec<Point<i32>>> {
    find_contours::<i32>(binary)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .map(|c| c.points)
        .collect()
}

/// The external contour enclosing the largest area. Ties keep the first found.
pub fn largest_external_contour(binary: &GrayImage) -> Option<Vec<Point<i32>>> {
    let mut best: Option<(f64, Vec<Point<i32>>)> = None;
    for contour in external_contours(binary) {
        let area = polygon_area(&contour);
        match &best {
            Some((best_area, _)) if *best_area >= area => {}
            _ => best = Some((area, contour)),
        }
    }
    best.map(|(area, contour)| {
        debug!(
            "Selected reference contour: {} points, area {:.1}",
            contour.len(),
            area
        );
        contour
    })
}

/// Filled silhouette of `contour` in a `bbox`-sized mask, with the contour
/// translated into the box's local coordinates. Boundary pixels are inside.
pub fn fill_mask(contour: &[Point<i32>], bbox: &BoundingBox) -> GrayImage {
    let mut mask = GrayImage::new(bbox.width, bbox.height);
    let mut local: Vec<Point<i32>> = contour
        .iter()
        .map(|p| Point::new(p.x - bbox.x as i32, p.y - bbox.y as i32))
        .collect();
    local.dedup();
    while local.len() > 1 && local.first() == local.last() {
        local.pop();
    }

    if local.len() < 3 {
        for p in &local {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < bbox.width && (p.y as u32) < bbox.height {
                mask.put_pixel(p.x as u32, p.y as u32, Luma([255]));
            }
        }
        return mask;
    }

    draw_polygon_mut(&mut mask, &local, Luma([255u8]));
    mask
}

/// Crop `bbox` out of `image`; parts of the box beyond the image stay
/// transparent black.
pub fn crop_box(image: &RgbaImage, bbox: &BoundingBox) -> RgbaImage {
    let mut out = RgbaImage::new(bbox.width, bbox.height);
    imageops::replace(&mut out, image, -(bbox.x as i64), -(bbox.y as i64));
    out
}

/// Crop `image` to `bbox`, keep its color channels and take alpha from `mask`.
pub fn apply_silhouette(image: &RgbaImage, bbox: &BoundingBox, mask: &GrayImage) -> RgbaImage {
    let crop = crop_box(image, bbox);
    RgbaImage::from_fn(bbox.width, bbox.height, |x, y| {
        let Rgba([r, g, b, _]) = *crop.get_pixel(x, y);
        Rgba([r, g, b, mask.get_pixel(x, y)[0]])
    })
}

/// Contour and bounding box derived once from a reference image and applied
/// to every frame.
#[derive(Debug, Clone)]
pub struct ReferenceSilhouette {
    pub contour: Vec<Point<i32>>,
    pub bbox: BoundingBox,
    pub mask: GrayImage,
}

impl ReferenceSilhouette {
    /// None when the binarized reference has no foreground.
    pub fn from_image(reference: &DynamicImage, threshold: u8) -> Option<Self> {
        let binary = binarize(&reference_mask(reference), threshold);
        let contour = largest_external_contour(&binary)?;
        let bbox = BoundingBox::of_points(&contour)?;
        let mask = fill_mask(&contour, &bbox);
        Some(Self {
            contour,
            bbox,
            mask,
        })
    }

    pub fn apply(&self, image: &RgbaImage) -> RgbaImage {
        apply_silhouette(image, &self.bbox, &self.mask)
    }
}
