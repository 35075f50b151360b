use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::processing::grid::SheetLayout;
use crate::error::Result;

/// Placement of one frame on a sprite sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasFrame {
    pub index: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u32>,
}

/// JSON description of a sprite sheet written next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atlas {
    pub image: String,
    #[serde(flatten)]
    pub layout: SheetLayout,
    pub frames: Vec<AtlasFrame>,
}

impl Atlas {
    /// One entry per frame, in sheet order. `sources` and `delays` are
    /// matched by index; missing entries are left out.
    pub fn new(
        sheet_path: &Path,
        layout: SheetLayout,
        frame_count: usize,
        sources: &[String],
        delays: &[u32],
    ) -> Self {
        let frames = (0..frame_count)
            .map(|index| {
                let (x, y) = layout.cell_origin(index);
                AtlasFrame {
                    index,
                    x,
                    y,
                    width: layout.cell_width,
                    height: layout.cell_height,
                    source: sources.get(index).cloned(),
                    delay_ms: delays.get(index).copied(),
                }
            })
            .collect();
        Self {
            image: sheet_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            layout,
            frames,
        }
    }
}

pub fn atlas_path(sheet_path: &Path) -> PathBuf {
    sheet_path.with_extension("json")
}

/// Write `atlas` as pretty JSON next to the sheet and return the sidecar path.
pub fn write_atlas_sidecar(sheet_path: &Path, atlas: &Atlas) -> Result<PathBuf> {
    let sidecar_path = atlas_path(sheet_path);
    let json_string = serde_json::to_string_pretty(atlas)?;
    std::fs::write(&sidecar_path, json_string)?;
    info!("Created atlas sidecar: {:?}", sidecar_path);
    Ok(sidecar_path)
}
