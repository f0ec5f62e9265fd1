//! Pipeline error type.

use isle_mesh::MeshError;
use isle_terrain::TerrainError;

/// Any failure that aborts a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Terrain(#[from] TerrainError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The dedicated worker pool could not be started.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
