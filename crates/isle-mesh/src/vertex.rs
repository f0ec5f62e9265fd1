//! The per-cell vertex record shared by land and water surfaces.

use glam::{Vec2, Vec3};

/// One vertex per grid cell: local-space position plus texture coordinate.
///
/// `#[repr(C)]` and `Pod` so a vertex buffer can be uploaded or hashed as
/// raw bytes via [`bytemuck::cast_slice`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexRecord {
    pub position: [f32; 3],
    /// Each component in `[0, 1]`.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(VertexRecord, [u8; 20]);

impl VertexRecord {
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }
}
