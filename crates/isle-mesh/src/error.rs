//! Mesh construction errors.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// Land and ocean-floor grids must have the same shape.
    #[error("land grid is {land:?} but ocean floor grid is {ocean:?}")]
    GridMismatch {
        land: (usize, usize),
        ocean: (usize, usize),
    },

    /// Triangulation and texture mapping need at least two cells per side.
    #[error("cannot mesh a {width}x{height} grid")]
    DegenerateGrid { width: usize, height: usize },

    /// A vertex or attribute buffer has the wrong length.
    #[error("expected {expected} entries, got {actual}")]
    VertexCountMismatch { expected: usize, actual: usize },

    /// An index points past the end of the vertex buffer.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// The grid has more vertices than a `u32` index can address.
    #[error("{0} vertices exceed the u32 index range")]
    TooManyVertices(usize),
}
