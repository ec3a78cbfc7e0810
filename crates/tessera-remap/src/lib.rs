//! CPU reference for the sampling stage that consumes displacement maps.
//!
//! Mirrors what the fragment shader does per output pixel: look up the map
//! with nearest filtering at the pixel's normalized coordinate, add the
//! displacement, and read the source image with nearest filtering and edge
//! clamping. Used to check shuffle/unshuffle round trips without a GPU.

pub mod error;
pub mod image;
pub mod sampler;

pub use error::RemapError;
pub use image::Image;
pub use sampler::{remap, RemapOptions};
