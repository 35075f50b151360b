//! High-level, ergonomic library API: one entry point per batch tool plus the
//! recursive `2_frames` helpers that return a `BatchReport`. Prefer these over
//! the low-level processing modules when integrating framekit.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::core::params::{
    AnimationParams, BackgroundParams, ContourParams, GifSheetParams, SheetParams, TreeParams,
};
use crate::core::processing::background::remove_background;
use crate::core::processing::contour::ReferenceSilhouette;
use crate::core::processing::grid::{SheetLayout, compose_sheet};
use crate::core::processing::padding::pad_to_size;
use crate::core::processing::resize::fit_to_canvas;
use crate::error::{Error, Result};
use crate::io::discovery::{find_named_dirs, list_entry_names, list_pngs, parent_name, sibling_dir};
use crate::io::gif::read_gif_frames;
use crate::io::writers::animation::{write_apng, write_gif, write_webp};
use crate::io::writers::atlas::{Atlas, write_atlas_sidecar};
use crate::io::writers::png::write_rgba_png;
use crate::io::{open_image, open_rgba};
use crate::types::AnimationFormat;

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
}

impl BatchReport {
    fn absorb(&mut self, other: BatchReport) {
        self.processed += other.processed;
        self.skipped += other.skipped;
    }
}

/// Summary of a written sprite sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOutput {
    pub path: PathBuf,
    pub layout: SheetLayout,
    pub frame_count: usize,
    pub atlas: Option<PathBuf>,
}

fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Turn every `*.png` in `input_dir` (sorted by name) into one looping
/// animation at `output`. The container is `params.format` or, when unset,
/// follows the output extension; the first frame's size is the canvas and
/// other frames are padded or clipped to it.
pub fn animate_folder(input_dir: &Path, output: &Path, params: &AnimationParams) -> Result<usize> {
    info!("Looking for frames in: {:?}", input_dir);
    let frame_files = list_pngs(input_dir)?;
    if frame_files.is_empty() {
        for name in list_entry_names(input_dir)? {
            debug!("  - {}", name);
        }
        return Err(Error::NoImages {
            dir: input_dir.to_path_buf(),
        });
    }

    let format = params
        .format
        .or_else(|| AnimationFormat::from_path(output))
        .ok_or_else(|| Error::UnsupportedFormat {
            path: output.to_path_buf(),
        })?;

    let mut frames = Vec::with_capacity(frame_files.len());
    for path in &frame_files {
        frames.push(open_rgba(path)?);
    }
    let (cols, rows) = frames[0].dimensions();
    let frames: Vec<RgbaImage> = frames.iter().map(|f| pad_to_size(f, cols, rows)).collect();

    info!("Encoding {} frames as {}...", frames.len(), format);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    match format {
        AnimationFormat::Webp => write_webp(output, &frames, params)?,
        AnimationFormat::Apng => write_apng(output, &frames, params)?,
        AnimationFormat::Gif => write_gif(output, &frames, params)?,
    }

    info!("Animation saved to: {:?}", output);
    Ok(frames.len())
}

/// Name of the sheet produced from a GIF:
/// `<gif stem>_<frames>f_<width>x<height>_spritesheet.png`.
pub fn gif_sheet_file_name(gif_path: &Path, frame_count: usize, cols: u32, rows: u32) -> String {
    let stem = gif_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sprite".to_string());
    format!("{stem}_{frame_count}f_{cols}x{rows}_spritesheet.png")
}

/// Tile the frames of a GIF into a sprite sheet inside `output_dir`.
/// With `params.canvas` set, every frame is first scaled to fit and centered
/// on that canvas.
pub fn gif_to_spritesheet(
    gif_path: &Path,
    output_dir: &Path,
    params: &GifSheetParams,
) -> Result<SheetOutput> {
    if !gif_path.is_file() {
        return Err(Error::MissingInput {
            path: gif_path.to_path_buf(),
        });
    }

    let gif_frames = read_gif_frames(gif_path)?;
    if gif_frames.is_empty() {
        return Err(Error::NoImages {
            dir: gif_path.to_path_buf(),
        });
    }
    std::fs::create_dir_all(output_dir)?;

    let delays: Vec<u32> = gif_frames.iter().map(|f| f.delay_ms).collect();
    let frames: Vec<RgbaImage> = match params.canvas {
        Some(canvas) => {
            info!("Fitting {} frames onto a {} canvas", gif_frames.len(), canvas);
            gif_frames
                .iter()
                .map(|f| fit_to_canvas(&f.image, canvas))
                .collect::<Result<_>>()?
        }
        None => gif_frames.into_iter().map(|f| f.image).collect(),
    };

    let (cols, rows) = frames[0].dimensions();
    let layout = SheetLayout::new(frames.len(), cols, rows, &params.sheet);
    let sheet = compose_sheet(&frames, &layout);

    let path = output_dir.join(gif_sheet_file_name(gif_path, frames.len(), cols, rows));
    write_rgba_png(&path, &sheet)?;
    info!("Sprite sheet saved to: {:?}", path);
    info!("Frames: {}, frame size: {}x{}", frames.len(), cols, rows);

    let atlas = if params.atlas {
        let atlas = Atlas::new(&path, layout, frames.len(), &[], &delays);
        Some(write_atlas_sidecar(&path, &atlas)?)
    } else {
        None
    };

    Ok(SheetOutput {
        path,
        layout,
        frame_count: frames.len(),
        atlas,
    })
}

/// Tile the PNGs of one folder (sorted by name) into a sheet at `output`,
/// creating its parent folder. The first image sets the cell size; the others
/// are not checked against it.
pub fn sprite_sheet_from_folder(
    input_dir: &Path,
    output: &Path,
    params: &SheetParams,
    atlas: bool,
) -> Result<SheetOutput> {
    let png_files = list_pngs(input_dir)?;
    if png_files.is_empty() {
        return Err(Error::NoImages {
            dir: input_dir.to_path_buf(),
        });
    }

    let mut frames = Vec::with_capacity(png_files.len());
    for path in &png_files {
        frames.push(open_rgba(path)?);
    }
    let (cols, rows) = frames[0].dimensions();
    let layout = SheetLayout::new(frames.len(), cols, rows, params);
    let sheet = compose_sheet(&frames, &layout);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_rgba_png(output, &sheet)?;
    info!("Sprite sheet saved to: {:?}", output);

    let atlas = if atlas {
        let sources: Vec<String> = png_files.iter().map(|p| file_name_string(p)).collect();
        let atlas = Atlas::new(output, layout, frames.len(), &sources, &[]);
        Some(write_atlas_sidecar(output, &atlas)?)
    } else {
        None
    };

    Ok(SheetOutput {
        path: output.to_path_buf(),
        layout,
        frame_count: frames.len(),
        atlas,
    })
}

/// Build `<parent>/<output_name>/<parent>_sprite_sheet.png` for every folder
/// named `tree.match_name` under `root`. Empty folders are skipped with a
/// warning.
pub fn sprite_sheets_tree(
    root: &Path,
    tree: &TreeParams,
    params: &SheetParams,
    atlas: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for dir in find_named_dirs(root, &tree.match_name)? {
        info!("Processing folder: {:?}", dir);
        let output = sibling_dir(&dir, &tree.output_name)
            .join(format!("{}_sprite_sheet.png", parent_name(&dir)));

        match sprite_sheet_from_folder(&dir, &output, params, atlas) {
            Ok(_) => report.processed += 1,
            Err(Error::NoImages { .. }) => {
                warn!("No PNG files found in {:?}, skipping", dir);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Crop and mask every PNG in `folder` (except the reference itself) with the
/// silhouette of `folder/reference_name`, writing `extracted_<name>` files to
/// `output_dir`.
pub fn extract_by_reference(
    folder: &Path,
    reference_name: &str,
    output_dir: &Path,
    params: &ContourParams,
) -> Result<BatchReport> {
    if !folder.is_dir() {
        return Err(Error::MissingInput {
            path: folder.to_path_buf(),
        });
    }
    let reference_path = folder.join(reference_name);
    if !reference_path.is_file() {
        return Err(Error::MissingInput {
            path: reference_path,
        });
    }

    let reference = open_image(&reference_path)?;
    let silhouette = ReferenceSilhouette::from_image(&reference, params.threshold).ok_or_else(
        || Error::NoContour {
            path: reference_path.clone(),
        },
    )?;
    info!(
        "Reference silhouette: {} points, box {}x{} at ({}, {})",
        silhouette.contour.len(),
        silhouette.bbox.width,
        silhouette.bbox.height,
        silhouette.bbox.x,
        silhouette.bbox.y
    );

    std::fs::create_dir_all(output_dir)?;
    let mut report = BatchReport::default();
    for path in list_pngs(folder)? {
        let name = file_name_string(&path);
        if name == reference_name {
            report.skipped += 1;
            continue;
        }

        let frame = open_rgba(&path)?;
        let extracted = silhouette.apply(&frame);
        let output = output_dir.join(format!("extracted_{name}"));
        write_rgba_png(&output, &extracted)?;
        debug!("Extracted {:?} -> {:?}", path, output);
        report.processed += 1;
    }

    info!("Done. Extracted frames saved to {:?}", output_dir);
    Ok(report)
}

/// Remove the background of every PNG in `input_dir`, writing
/// `extracted_<name>` files to `output_dir`. A folder without PNGs is
/// `Error::NoImages` and `output_dir` is not created.
pub fn remove_background_dir(
    input_dir: &Path,
    output_dir: &Path,
    params: &BackgroundParams,
) -> Result<BatchReport> {
    let png_files = list_pngs(input_dir)?;
    if png_files.is_empty() {
        return Err(Error::NoImages {
            dir: input_dir.to_path_buf(),
        });
    }
    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();
    for path in png_files {
        let name = file_name_string(&path);
        info!("Processing: {}", name);
        let image = open_rgba(&path)?;
        let extracted = remove_background(&image, params);
        write_rgba_png(&output_dir.join(format!("extracted_{name}")), &extracted)?;
        report.processed += 1;
    }
    Ok(report)
}

/// Run `remove_background_dir` on every folder named `tree.match_name` under
/// `root`, writing into the sibling `tree.output_name` folder. Folders without
/// PNGs are skipped with a warning.
pub fn remove_background_tree(
    root: &Path,
    tree: &TreeParams,
    params: &BackgroundParams,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for dir in find_named_dirs(root, &tree.match_name)? {
        info!("Processing folder: {:?}", dir);
        let output_dir = sibling_dir(&dir, &tree.output_name);
        match remove_background_dir(&dir, &output_dir, params) {
            Ok(dir_report) => report.absorb(dir_report),
            Err(Error::NoImages { .. }) => {
                warn!("No PNG files found in {:?}, skipping", dir);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}
