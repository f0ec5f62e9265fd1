//! Underwater terrain blended with the inverse of the land falloff.

use isle_config::GenerationParams;

use crate::{HeightGrid, NoisePrimitive, NoiseRequest, TerrainError, validate_params};

/// Scale applied to ocean-floor noise after blending.
pub const OCEAN_DEPTH_MULTIPLIER: f32 = 5.0;

/// Produce the ocean-floor grid beneath the falloff-shaped `land` grid.
///
/// Each cell is `max(noise * (1 - land) * 5, 0)`, so the floor is deepest
/// where the land is lowest and vanishes under tall ground.
pub fn synthesize_ocean_floor<N>(
    land: &HeightGrid,
    params: &GenerationParams,
    noise: &N,
) -> Result<HeightGrid, TerrainError>
where
    N: NoisePrimitive + ?Sized,
{
    validate_params(params)?;

    let request = NoiseRequest::ocean_floor(params);
    let expected = (params.width as usize, params.height as usize);
    if land.dimensions() != expected {
        return Err(TerrainError::ShapeMismatch {
            expected,
            actual: land.dimensions(),
        });
    }

    let floor_noise = noise.sample_matrix(&request)?;
    request.check_shape(&floor_noise)?;

    let (width, height) = land.dimensions();
    let floor = HeightGrid::par_from_fn(width, height, |x, z| {
        let falloff_factor = 1.0 - land[(x, z)];
        (floor_noise[(x, z)] * falloff_factor * OCEAN_DEPTH_MULTIPLIER).max(0.0)
    });
    tracing::debug!(
        seed = request.seed,
        range = ?floor.range(),
        "ocean floor synthesized"
    );
    Ok(floor)
}
