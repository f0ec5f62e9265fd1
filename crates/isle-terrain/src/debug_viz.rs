//! Heightmap debug images for inspecting a generated island.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{SEA_LEVEL, height_to_color, render_heightmap_debug};
