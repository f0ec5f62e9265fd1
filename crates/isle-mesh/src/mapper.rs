//! Maps land and ocean-floor grids to land and water vertex buffers.

use glam::{Vec2, Vec3};
use isle_terrain::HeightGrid;
use rayon::prelude::*;

use crate::{MeshError, VertexRecord};

/// Land and water vertices, both laid out `x * height + z`.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceVertices {
    pub width: usize,
    pub height: usize,
    pub land: Vec<VertexRecord>,
    pub water: Vec<VertexRecord>,
}

/// Convert the two height grids into vertex records.
///
/// * land vertex: `(x, land * height_scale, z)`
/// * water vertex: `(x, water_baseline - ocean_floor, z)`
///
/// Both share `uv = (x / (width - 1), z / (height - 1))`. Columns are mapped
/// in parallel on the current rayon pool, each into its own slice of the
/// output buffers.
pub fn map_surfaces(
    land: &HeightGrid,
    ocean_floor: &HeightGrid,
    height_scale: f32,
    water_baseline: f32,
) -> Result<SurfaceVertices, MeshError> {
    if land.dimensions() != ocean_floor.dimensions() {
        return Err(MeshError::GridMismatch {
            land: land.dimensions(),
            ocean: ocean_floor.dimensions(),
        });
    }
    let (width, height) = land.dimensions();
    if width < 2 || height < 2 {
        return Err(MeshError::DegenerateGrid { width, height });
    }

    let mut land_verts = vec![VertexRecord::default(); width * height];
    let mut water_verts = vec![VertexRecord::default(); width * height];
    let u_span = (width - 1) as f32;
    let v_span = (height - 1) as f32;

    land_verts
        .par_chunks_mut(height)
        .zip(water_verts.par_chunks_mut(height))
        .zip(land.values().par_chunks(height))
        .zip(ocean_floor.values().par_chunks(height))
        .enumerate()
        .for_each(|(x, (((land_column, water_column), land_heights), floor_depths))| {
            let fx = x as f32;
            for z in 0..height {
                let fz = z as f32;
                let uv = Vec2::new(fx / u_span, fz / v_span);
                land_column[z] =
                    VertexRecord::new(Vec3::new(fx, land_heights[z] * height_scale, fz), uv);
                water_column[z] =
                    VertexRecord::new(Vec3::new(fx, water_baseline - floor_depths[z], fz), uv);
            }
        });

    Ok(SurfaceVertices {
        width,
        height,
        land: land_verts,
        water: water_verts,
    })
}
