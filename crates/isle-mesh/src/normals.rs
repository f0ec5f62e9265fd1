//! Per-vertex normal and tangent derivation for indexed triangle lists.
//!
//! Triangles are front-facing when their corners wind clockwise as seen from
//! the side the normal points to, so a flat grid triangulated by
//! [`crate::grid_indices`] faces `+Y`.

use glam::{Vec2, Vec3, Vec4};

use crate::MeshError;

const DEGENERATE_UV_EPSILON: f32 = 1e-12;

fn check_indices(indices: &[u32], vertex_count: usize) -> Result<(), MeshError> {
    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(MeshError::IndexOutOfRange {
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}

fn check_len(expected: usize, actual: usize) -> Result<(), MeshError> {
    if expected == actual {
        Ok(())
    } else {
        Err(MeshError::VertexCountMismatch { expected, actual })
    }
}

/// Area-weighted vertex normals.
///
/// Each triangle adds its unnormalized face normal (length proportional to
/// its area) to its three corners. Vertices with a zero-length sum get `+Y`.
pub fn derive_normals(positions: &[Vec3], indices: &[u32]) -> Result<Vec<Vec3>, MeshError> {
    check_indices(indices, positions.len())?;

    let mut accum = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face = (positions[c] - positions[a]).cross(positions[b] - positions[a]);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    Ok(accum
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
        .collect())
}

/// Per-vertex tangents from texture-coordinate gradients.
///
/// `xyz` is the direction of increasing `u`, Gram-Schmidt orthogonalized
/// against the normal. `w` is `±1`, the bitangent sign, such that
/// `bitangent = w * normal.cross(tangent)` points toward increasing `v`.
pub fn derive_tangents(
    positions: &[Vec3],
    uvs: &[Vec2],
    normals: &[Vec3],
    indices: &[u32],
) -> Result<Vec<Vec4>, MeshError> {
    check_len(positions.len(), uvs.len())?;
    check_len(positions.len(), normals.len())?;
    check_indices(indices, positions.len())?;

    let mut tan_u = vec![Vec3::ZERO; positions.len()];
    let mut tan_v = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let e1 = positions[b] - positions[a];
        let e2 = positions[c] - positions[a];
        let d1 = uvs[b] - uvs[a];
        let d2 = uvs[c] - uvs[a];

        let det = d1.x * d2.y - d2.x * d1.y;
        if det.abs() < DEGENERATE_UV_EPSILON {
            continue;
        }
        let r = 1.0 / det;
        let sdir = (e1 * d2.y - e2 * d1.y) * r;
        let tdir = (e2 * d1.x - e1 * d2.x) * r;

        for i in [a, b, c] {
            tan_u[i] += sdir;
            tan_v[i] += tdir;
        }
    }

    Ok(normals
        .iter()
        .zip(tan_u.iter().zip(&tan_v))
        .map(|(&n, (&t, &b))| {
            let tangent = (t - n * n.dot(t))
                .try_normalize()
                .unwrap_or_else(|| fallback_tangent(n));
            let w = if n.cross(tangent).dot(b) < 0.0 { -1.0 } else { 1.0 };
            tangent.extend(w)
        })
        .collect())
}

/// `+X` projected off the normal, or `+Z` when the normal is along `X`.
fn fallback_tangent(normal: Vec3) -> Vec3 {
    [Vec3::X, Vec3::Z]
        .into_iter()
        .find_map(|axis| (axis - normal * normal.dot(axis)).try_normalize())
        .unwrap_or(Vec3::X)
}
