//! Index topology shared by every grid mesh.

use isle_terrain::grid_index;

use crate::MeshError;

/// Triangles in a `width × height` grid mesh: `2 × (width − 1) × (height − 1)`.
pub fn triangle_count(width: usize, height: usize) -> usize {
    2 * width.saturating_sub(1) * height.saturating_sub(1)
}

/// Two triangles per cell, walking `x` then `z`.
///
/// For cell `(x, z)` with corners `tl = (x, z)`, `tr = (x + 1, z)`,
/// `bl = (x, z + 1)`, `br = (x + 1, z + 1)` the triangles are
/// `(tl, tr, bl)` and `(tr, br, bl)`. Land and water use the same winding.
pub fn grid_indices(width: usize, height: usize) -> Result<Vec<u32>, MeshError> {
    if width < 2 || height < 2 {
        return Err(MeshError::DegenerateGrid { width, height });
    }
    let vertex_count = width * height;
    if u32::try_from(vertex_count).is_err() {
        return Err(MeshError::TooManyVertices(vertex_count));
    }

    let mut indices = Vec::with_capacity(triangle_count(width, height) * 3);
    for x in 0..width - 1 {
        for z in 0..height - 1 {
            let top_left = grid_index(x, z, height) as u32;
            let top_right = grid_index(x + 1, z, height) as u32;
            let bottom_left = grid_index(x, z + 1, height) as u32;
            let bottom_right = grid_index(x + 1, z + 1, height) as u32;

            indices.extend_from_slice(&[top_left, top_right, bottom_left]);
            indices.extend_from_slice(&[top_right, bottom_right, bottom_left]);
        }
    }
    Ok(indices)
}
