//! Terrain synthesis errors.

/// Reasons a generation run is rejected or aborted.
///
/// All variants are fatal: no partial terrain is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// Grid sides must both exceed one cell, and every cell must be
    /// addressable by a `u32` mesh index.
    #[error(
        "invalid grid dimensions {width}x{height}: sides must be greater than 1 \
         and width * height must fit a u32 index"
    )]
    InvalidDimension { width: u32, height: u32 },

    /// A grid handed to a synthesizer does not match the requested shape.
    #[error("grid shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A numeric generation parameter is out of its accepted range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The noise sampler failed or returned a grid of the wrong shape.
    #[error("noise primitive failed: {0}")]
    NoisePrimitiveFailure(String),
}
