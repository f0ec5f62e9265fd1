//! Island heightfield synthesis: layered noise, radial coast falloff, and the
//! ocean floor beneath it.
//!
//! Every synthesizer fans out per grid column on the current rayon pool and
//! writes a disjoint slice of a pre-sized buffer, so results do not depend on
//! the number of worker threads.

mod error;
mod grid;
mod heightfield;
mod ocean_floor;
mod params;
mod range;
mod sampler;

pub mod debug_viz;

pub use error::TerrainError;
pub use grid::{HeightGrid, grid_index};
pub use heightfield::{LAND_FLOOR, apply_coast_falloff, falloff_factor, synthesize_land};
pub use ocean_floor::{OCEAN_DEPTH_MULTIPLIER, synthesize_ocean_floor};
pub use params::validate_params;
pub use range::ValueRange;
pub use sampler::{FbmNoise, NoisePrimitive, NoiseRequest};
