//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, directory walk and JSON errors, and provides
//! semantic variants for the checked batch failures (missing input, empty input set).
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input does not exist: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("No PNG images found in {}", dir.display())]
    NoImages { dir: PathBuf },

    #[error("No foreground contour found in reference image {}", path.display())]
    NoContour { path: PathBuf },

    #[error("Unsupported output format for {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Resize error: {0}")]
    Resize(String),
}

impl Error {
    /// True for the two failures a batch run reports and then skips:
    /// a missing input path and an input set with no images.
    pub fn is_checked(&self) -> bool {
        matches!(self, Error::MissingInput { .. } | Error::NoImages { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_errors_are_missing_input_and_no_images() {
        assert!(
            Error::MissingInput {
                path: PathBuf::from("nope")
            }
            .is_checked()
        );
        assert!(
            Error::NoImages {
                dir: PathBuf::from("empty")
            }
            .is_checked()
        );
        assert!(!Error::Encode("boom".into()).is_checked());
    }

    #[test]
    fn messages_name_the_path() {
        let e = Error::NoImages {
            dir: PathBuf::from("2_frames"),
        };
        assert_eq!(e.to_string(), "No PNG images found in 2_frames");
    }
}
