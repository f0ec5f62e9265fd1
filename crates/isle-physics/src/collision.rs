//! Triangle-soup collision surfaces derived from a land mesh.

use glam::Vec3;
use isle_mesh::MeshData;

/// An axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Smallest box containing every point, or `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self { min: p, max: p },
                Some(b) => Self {
                    min: b.min.min(p),
                    max: b.max.max(p),
                },
            })
        })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full edge lengths along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Position-only triangle faces copied 1:1 from a land mesh.
///
/// Faces keep the mesh's index order and winding, with no transformation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollisionSurface {
    faces: Vec<[Vec3; 3]>,
}

impl CollisionSurface {
    pub fn from_mesh(mesh: &MeshData) -> Self {
        let faces: Vec<[Vec3; 3]> = mesh.triangles().collect();
        tracing::debug!(faces = faces.len(), "collision surface extracted");
        Self { faces }
    }

    pub fn faces(&self) -> &[[Vec3; 3]] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Bounds of every face corner, or `None` for an empty surface.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.faces.iter().flatten().copied())
    }

    /// Flattened corner list, three consecutive points per face.
    pub fn face_points(&self) -> Vec<Vec3> {
        self.faces.iter().flatten().copied().collect()
    }
}
