use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid canvas: {canvas}. Expected WIDTHxHEIGHT, e.g. 660x793")]
    InvalidCanvas { canvas: String },

    #[error("Invalid HSV bound: {value}. Expected H,S,V with H in 0..=180")]
    InvalidHsv { value: String },

    #[error("Columns must be greater than 0, got: {columns}")]
    ZeroColumns { columns: u32 },

    #[error(transparent)]
    Library(#[from] framekit::Error),
}
