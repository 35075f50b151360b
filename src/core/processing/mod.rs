//! Pixel and geometry transforms shared by the batch tools.
pub mod background;
pub mod contour;
pub mod grid;
pub mod padding;
pub mod resize;
