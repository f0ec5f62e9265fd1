//! Terrain surface meshes: grid-to-vertex mapping, triangulation, and
//! per-vertex normals and tangents.

mod error;
mod mapper;
mod normals;
mod surface_mesh;
mod topology;
mod vertex;

pub use error::MeshError;
pub use mapper::{SurfaceVertices, map_surfaces};
pub use normals::{derive_normals, derive_tangents};
pub use surface_mesh::MeshData;
pub use topology::{grid_indices, triangle_count};
pub use vertex::VertexRecord;
