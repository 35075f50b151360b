//! Output encoders: animated APNG/GIF, RGBA PNG, and JSON atlas sidecars.
pub mod animation;
pub mod atlas;
pub mod png;
