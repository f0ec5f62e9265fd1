//! Serializable statistics for a generated terrain.

use isle_terrain::ValueRange;
use serde::Serialize;

use crate::{GeneratedTerrain, PhaseTimings};

/// Counts, height ranges and timings of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TerrainSummary {
    pub width: u32,
    pub height: u32,
    pub seed: i32,
    /// Per mesh; land and water share topology.
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub collision_faces: usize,
    /// `[min, max]` of the land grid before height scaling.
    pub land_range: Option<[f32; 2]>,
    pub ocean_floor_range: Option<[f32; 2]>,
    pub land_origin: [f32; 3],
    pub water_origin: [f32; 3],
    pub playable_radius: f32,
    pub timings: PhaseTimings,
}

fn pair(range: Option<ValueRange>) -> Option<[f32; 2]> {
    range.map(|r| [r.min, r.max])
}

impl GeneratedTerrain {
    pub fn summary(&self) -> TerrainSummary {
        TerrainSummary {
            width: self.params.width,
            height: self.params.height,
            seed: self.params.seed,
            vertex_count: self.land_mesh.vertex_count(),
            triangle_count: self.land_mesh.triangle_count(),
            collision_faces: self.collision.face_count(),
            land_range: pair(self.land_range),
            ocean_floor_range: pair(self.ocean_floor_range),
            land_origin: self.placement.land_origin.to_array(),
            water_origin: self.placement.water_origin.to_array(),
            playable_radius: self.playable_area.radius,
            timings: self.timings,
        }
    }
}
