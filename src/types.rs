//! Shared types and enums used across framekit.
//! Includes `AnimationFormat`, `CanvasSize` and the 8-bit `HsvRange` window.
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum AnimationFormat {
    /// Animated WebP, lossless
    Webp,
    /// Animated PNG
    Apng,
    Gif,
}

impl AnimationFormat {
    /// Pick the container from the output file extension (case-insensitive).
    /// `.webp` maps to WebP, `.png` and `.apng` to APNG, `.gif` to GIF;
    /// anything else is rejected.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "webp" => Some(AnimationFormat::Webp),
            "png" | "apng" => Some(AnimationFormat::Apng),
            "gif" => Some(AnimationFormat::Gif),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnimationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimationFormat::Webp => write!(f, "WebP"),
            AnimationFormat::Apng => write!(f, "APNG"),
            AnimationFormat::Gif => write!(f, "GIF"),
        }
    }
}

/// Fixed target canvas used to normalize frames of varying size.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(660, 793)
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `660x793`.
impl FromStr for CanvasSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument {
            arg: "canvas",
            value: s.to_string(),
        };
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
        let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

/// Inclusive HSV window in the 8-bit convention: hue 0..=180 (degrees / 2),
/// saturation and value 0..=255.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| hsv[i] >= self.lower[i] && hsv[i] <= self.upper[i])
    }
}

/// Near-white background window.
impl Default for HsvRange {
    fn default() -> Self {
        Self {
            lower: [0, 0, 200],
            upper: [180, 30, 255],
        }
    }
}
