use serde::{Deserialize, Serialize};

use crate::types::{AnimationFormat, CanvasSize, HsvRange};

/// Directory basename the recursive tools look for.
pub const FRAMES_DIR_NAME: &str = "2_frames";

/// Parameters for turning a folder of PNG frames into an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationParams {
    /// Display time of every frame in milliseconds
    pub frame_duration_ms: u16,
    /// Number of plays; 0 loops forever
    pub loop_count: u32,
    /// Container to write; None picks it from the output extension
    pub format: Option<AnimationFormat>,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            frame_duration_ms: 100,
            loop_count: 0,
            format: None,
        }
    }
}

/// Grid layout of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetParams {
    pub columns: u32,
    /// If true the sheet is always `columns` cells wide, even when there are
    /// fewer frames; otherwise it shrinks to `min(frames, columns)`.
    pub fill_columns: bool,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            columns: 8,
            fill_columns: true,
        }
    }
}

impl SheetParams {
    pub fn compact() -> Self {
        Self {
            fill_columns: false,
            ..Self::default()
        }
    }
}

/// GIF-to-spritesheet parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifSheetParams {
    pub sheet: SheetParams,
    /// Scale and center every frame onto this canvas; None keeps native size
    pub canvas: Option<CanvasSize>,
    /// Write a JSON atlas next to the sheet
    pub atlas: bool,
}

impl Default for GifSheetParams {
    fn default() -> Self {
        Self {
            sheet: SheetParams::compact(),
            canvas: None,
            atlas: false,
        }
    }
}

/// Reference-contour extraction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContourParams {
    /// Mask intensities strictly above this value are foreground
    pub threshold: u8,
}

impl Default for ContourParams {
    fn default() -> Self {
        Self { threshold: 10 }
    }
}

/// Background removal parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundParams {
    /// Colors inside this window are background
    pub range: HsvRange,
    /// Radius of the square closing element; 1 gives 3x3, 0 disables closing
    pub close_radius: u8,
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            range: HsvRange::default(),
            close_radius: 1,
        }
    }
}

/// Naming of the folders the recursive tools match and create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Exact basename of the directories to process
    pub match_name: String,
    /// Sibling directory (next to each match) receiving the outputs
    pub output_name: String,
}

impl TreeParams {
    pub fn new(output_name: impl Into<String>) -> Self {
        Self {
            match_name: FRAMES_DIR_NAME.to_string(),
            output_name: output_name.into(),
        }
    }

    pub fn background() -> Self {
        Self::new("extracted_robots")
    }

    pub fn sprite_sheets() -> Self {
        Self::new("sprite_sheets")
    }
}
