use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use framekit::{AnimationFormat, FRAMES_DIR_NAME};

#[derive(Parser)]
#[command(name = "framekit", version, about = "framekit sprite and frame batch tools")]
pub struct CliArgs {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Turn a folder of PNG frames into a looping animation (.webp, .png/.apng or .gif)
    Animate(AnimateArgs),
    /// Tile the frames of a GIF into a sprite sheet
    GifSheet(GifSheetArgs),
    /// Crop and mask frames with the silhouette of a reference image
    ExtractRef(ExtractRefArgs),
    /// Make the near-white background of every frame in each frames folder transparent
    RemoveBg(RemoveBgArgs),
    /// Tile every frames folder under a root into a sprite sheet
    Sheet(SheetArgs),
}

#[derive(Args)]
pub struct AnimateArgs {
    /// Folder containing the PNG frames
    #[arg(short, long, default_value = FRAMES_DIR_NAME)]
    pub input: PathBuf,

    /// Output animation; the extension picks the container
    #[arg(short, long, default_value = "animation.webp")]
    pub output: PathBuf,

    /// Display time of every frame in milliseconds
    #[arg(short, long, default_value_t = 100)]
    pub duration: u16,

    /// Number of plays; 0 loops forever
    #[arg(long, default_value_t = 0)]
    pub loops: u32,

    /// Container to write, overriding the output extension
    #[arg(short, long, value_enum)]
    pub format: Option<AnimationFormat>,
}

#[derive(Args)]
pub struct GifSheetArgs {
    /// GIF file to split
    pub gif_path: PathBuf,

    /// Output folder
    #[arg(short, long, default_value = "sprite_sheets")]
    pub output: PathBuf,

    /// Scale and center every frame onto a fixed canvas
    #[arg(long, default_value_t = false)]
    pub fit: bool,

    /// Canvas used with --fit, as WIDTHxHEIGHT
    #[arg(long, default_value = "660x793")]
    pub canvas: String,

    /// Frames per row
    #[arg(long, default_value_t = 8)]
    pub columns: u32,

    /// Keep every column even when there are fewer frames
    #[arg(long, default_value_t = false)]
    pub full_row: bool,

    /// Write a JSON atlas next to the sheet
    #[arg(long, default_value_t = false)]
    pub atlas: bool,
}

#[derive(Args)]
pub struct ExtractRefArgs {
    /// Folder with the frames and the reference image
    #[arg(short, long, default_value = FRAMES_DIR_NAME)]
    pub input: PathBuf,

    /// File name of the reference image inside the folder
    #[arg(short, long, default_value = "standard.jpg")]
    pub standard: String,

    /// Output folder
    #[arg(short, long, default_value = "extracted_frames")]
    pub output: PathBuf,

    /// Mask values above this are foreground
    #[arg(long, default_value_t = 10)]
    pub threshold: u8,
}

#[derive(Args)]
pub struct RemoveBgArgs {
    /// Root searched recursively for frames folders
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Exact name of the folders to process
    #[arg(long, default_value = FRAMES_DIR_NAME)]
    pub dir_name: String,

    /// Sibling output folder name
    #[arg(long, default_value = "extracted_robots")]
    pub output_name: String,

    /// Lower HSV bound of the background, as H,S,V
    #[arg(long, default_value = "0,0,200")]
    pub lower: String,

    /// Upper HSV bound of the background, as H,S,V
    #[arg(long, default_value = "180,30,255")]
    pub upper: String,

    /// Radius of the closing element (1 = 3x3, 0 = none)
    #[arg(long, default_value_t = 1)]
    pub close_radius: u8,
}

#[derive(Args)]
pub struct SheetArgs {
    /// Root searched recursively for frames folders
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Exact name of the folders to process
    #[arg(long, default_value = FRAMES_DIR_NAME)]
    pub dir_name: String,

    /// Sibling output folder name
    #[arg(long, default_value = "sprite_sheets")]
    pub output_name: String,

    /// Images per row
    #[arg(long, default_value_t = 8)]
    pub columns: u32,

    /// Shrink the sheet width to the number of images when there are fewer than a row
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Write a JSON atlas next to each sheet
    #[arg(long, default_value_t = false)]
    pub atlas: bool,
}
