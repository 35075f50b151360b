#![doc = r#"
framekit: small batch utilities for sprite and frame pipelines.

This crate bundles five independent one-shot image tools behind a typed API:

- turn a folder of PNG frames into a looping animation (WebP, APNG or GIF),
- tile the frames of a GIF into a sprite sheet, optionally fitting every frame
  onto a fixed transparent canvas first,
- crop and mask a batch of frames with the silhouette of a reference image,
- strip a near-white background from every frame of each `2_frames` folder,
- tile each `2_frames` folder into a sprite sheet.

Every tool is single-threaded and deterministic: listings are sorted by file
name, so rerunning on unchanged inputs reproduces byte-identical outputs.

Quick start: a sprite sheet from a GIF
--------------------------------------
```rust,no_run
use std::path::Path;
use framekit::{gif_to_spritesheet, CanvasSize, GifSheetParams};

fn main() -> framekit::Result<()> {
    let params = GifSheetParams {
        canvas: Some(CanvasSize::new(660, 793)),
        ..GifSheetParams::default()
    };
    let sheet = gif_to_spritesheet(Path::new("walk.gif"), Path::new("sprite_sheets"), &params)?;
    println!("{} frames -> {:?}", sheet.frame_count, sheet.path);
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use framekit::{remove_background_tree, sprite_sheets_tree, BackgroundParams, SheetParams, TreeParams};

fn main() -> framekit::Result<()> {
    let report = remove_background_tree(
        Path::new("assets"),
        &TreeParams::background(),
        &BackgroundParams::default(),
    )?;
    println!("processed={} skipped={}", report.processed, report.skipped);

    sprite_sheets_tree(Path::new("assets"), &TreeParams::sprite_sheets(), &SheetParams::default(), false)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `framekit::Result<T>`. A missing input path and an
input set without images are reported as `Error::MissingInput` and
`Error::NoImages`; `Error::is_checked` tells them apart from codec or I/O
failures.

```rust,no_run
use std::path::Path;
use framekit::{animate_folder, AnimationParams, Error};

fn main() {
    match animate_folder(Path::new("2_frames"), Path::new("animation.png"), &AnimationParams::default()) {
        Ok(n) => println!("{n} frames"),
        Err(Error::NoImages { dir }) => eprintln!("nothing to animate in {}", dir.display()),
        Err(other) => eprintln!("failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: parameters and pixel/geometry primitives (layout, fitting, masks, contours).
- [`io`]: frame discovery, GIF decoding and output writers.
- [`types`]: shared enums and small value types.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{
    AnimationParams, BackgroundParams, ContourParams, FRAMES_DIR_NAME, GifSheetParams,
    SheetParams, TreeParams,
};
pub use crate::core::processing::contour::{BoundingBox, ReferenceSilhouette};
pub use crate::core::processing::grid::SheetLayout;
pub use crate::error::{Error, Result};
pub use crate::types::{AnimationFormat, CanvasSize, HsvRange};

// High-level API re-exports
pub use crate::api::{
    BatchReport, SheetOutput, animate_folder, extract_by_reference, gif_to_spritesheet,
    remove_background_dir, remove_background_tree, sprite_sheet_from_folder, sprite_sheets_tree,
};
