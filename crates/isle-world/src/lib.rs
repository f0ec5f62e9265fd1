//! Single-pass island generation: noise, heightfield, ocean floor, meshes,
//! collision, and placement, run on a dedicated worker pool.

mod error;
mod generator;
mod summary;

pub use error::GenerationError;
pub use generator::{GeneratedTerrain, PhaseTimings, TerrainGenerator, TerrainGrids};
pub use summary::TerrainSummary;
