//! Core processing building blocks: sheet layout, canvas fitting/padding,
//! HSV background masks and reference contours. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
