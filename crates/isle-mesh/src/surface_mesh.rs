//! Indexed triangle meshes for the land and water surfaces.

use std::io::{self, Write};

use glam::{Vec2, Vec3, Vec4};

use crate::{MeshError, VertexRecord, derive_normals, derive_tangents, grid_indices};

/// A triangulated grid surface ready for rendering or collision.
///
/// Vertex `i` corresponds to grid cell `(i / height, i % height)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<VertexRecord>,
    /// Three entries per triangle.
    pub indices: Vec<u32>,
    pub normals: Vec<Vec3>,
    /// Tangent direction in `xyz`, bitangent sign in `w`.
    pub tangents: Vec<Vec4>,
}

impl MeshData {
    /// Triangulate a `width × height` vertex grid and derive its normals and tangents.
    pub fn build(
        vertices: Vec<VertexRecord>,
        width: usize,
        height: usize,
    ) -> Result<Self, MeshError> {
        if vertices.len() != width * height {
            return Err(MeshError::VertexCountMismatch {
                expected: width * height,
                actual: vertices.len(),
            });
        }
        let indices = grid_indices(width, height)?;

        let positions: Vec<Vec3> = vertices.iter().map(VertexRecord::position).collect();
        let uvs: Vec<Vec2> = vertices.iter().map(VertexRecord::uv).collect();
        let normals = derive_normals(&positions, &indices)?;
        let tangents = derive_tangents(&positions, &uvs, &normals, &indices)?;

        tracing::trace!(
            vertices = vertices.len(),
            triangles = indices.len() / 3,
            "surface mesh built"
        );
        Ok(Self {
            vertices,
            indices,
            normals,
            tangents,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex positions in index order.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(VertexRecord::position)
    }

    /// Corner positions of every triangle, in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize].position(),
                self.vertices[tri[1] as usize].position(),
                self.vertices[tri[2] as usize].position(),
            ]
        })
    }

    /// Raw vertex bytes, suitable for hashing or GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Write the mesh as Wavefront OBJ with positions, texcoords and normals.
    ///
    /// OBJ front faces wind counter-clockwise, so each triangle is written
    /// with its last two corners swapped.
    pub fn write_obj<W: Write>(&self, mut out: W) -> io::Result<()> {
        for v in &self.vertices {
            let [x, y, z] = v.position;
            writeln!(out, "v {x} {y} {z}")?;
        }
        for vertex in &self.vertices {
            let [u, v] = vertex.uv;
            writeln!(out, "vt {u} {v}")?;
        }
        for n in &self.normals {
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] + 1, tri[2] + 1, tri[1] + 1];
            writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_vertices(width: usize, height: usize) -> Vec<VertexRecord> {
        let mut vertices = Vec::new();
        for x in 0..width {
            for z in 0..height {
                vertices.push(VertexRecord::new(
                    Vec3::new(x as f32, 1.0, z as f32),
                    Vec2::new(
                        x as f32 / (width - 1) as f32,
                        z as f32 / (height - 1) as f32,
                    ),
                ));
            }
        }
        vertices
    }

    #[test]
    fn test_build_counts() {
        let mesh = MeshData::build(flat_vertices(4, 4), 4, 4).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 18);
        assert_eq!(mesh.indices.len(), 54);
        assert_eq!(mesh.normals.len(), 16);
        assert_eq!(mesh.tangents.len(), 16);
    }

    #[test]
    fn test_build_rejects_wrong_vertex_count() {
        let result = MeshData::build(flat_vertices(3, 3), 4, 3);
        assert_eq!(
            result,
            Err(MeshError::VertexCountMismatch {
                expected: 12,
                actual: 9
            })
        );
    }

    #[test]
    fn test_triangles_match_indices() {
        let mesh = MeshData::build(flat_vertices(2, 2), 2, 2).unwrap();
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(
            tris[0],
            [
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 1.0)
            ]
        );
    }

    #[test]
    fn test_vertex_bytes_length() {
        let mesh = MeshData::build(flat_vertices(3, 2), 3, 2).unwrap();
        assert_eq!(mesh.vertex_bytes().len(), 6 * 20);
    }

    #[test]
    fn test_write_obj() {
        let mesh = MeshData::build(flat_vertices(2, 2), 2, 2).unwrap();
        let mut buf = Vec::new();
        mesh.write_obj(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 4);
        let faces: Vec<_> = text.lines().filter(|l| l.starts_with("f ")).collect();
        // Indices (0, 2, 1) become 1-based and reversed: 1, 2, 3.
        assert_eq!(faces, ["f 1/1/1 2/2/2 3/3/3", "f 3/3/3 2/2/2 4/4/4"]);
        assert!(text.contains("vn 0 1 0"));
    }
}
