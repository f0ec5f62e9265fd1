//! Base land heightfield with radial coastal falloff.

use isle_config::GenerationParams;

use crate::{HeightGrid, NoisePrimitive, NoiseRequest, TerrainError, validate_params};

/// Minimum land height after falloff.
pub const LAND_FLOOR: f32 = 0.1;

/// Coastal attenuation at cell `(x, z)`.
///
/// Distance from the grid center, normalized by the center-to-corner radius
/// and raised to `strength`. Zero at the center, one at the corners.
pub fn falloff_factor(x: usize, z: usize, width: usize, height: usize, strength: f32) -> f32 {
    let center_x = width as f32 / 2.0;
    let center_z = height as f32 / 2.0;
    let max_radius = (center_x * center_x + center_z * center_z).sqrt();

    let dx = x as f32 - center_x;
    let dz = z as f32 - center_z;
    let normalized = (dx * dx + dz * dz).sqrt() / max_radius;

    normalized.powf(strength)
}

/// Attenuate `base` toward the grid edges and clamp to [`LAND_FLOOR`].
pub fn apply_coast_falloff(base: &HeightGrid, strength: f32) -> HeightGrid {
    let (width, height) = base.dimensions();
    HeightGrid::par_from_fn(width, height, |x, z| {
        let falloff = falloff_factor(x, z, width, height, strength);
        (base[(x, z)] * (1.0 - falloff)).max(LAND_FLOOR)
    })
}

/// Produce the falloff-shaped land heightfield for `params`.
pub fn synthesize_land<N>(params: &GenerationParams, noise: &N) -> Result<HeightGrid, TerrainError>
where
    N: NoisePrimitive + ?Sized,
{
    validate_params(params)?;

    let request = NoiseRequest::land(params);
    let base = noise.sample_matrix(&request)?;
    request.check_shape(&base)?;

    let land = apply_coast_falloff(&base, params.coast_falloff_strength);
    tracing::debug!(
        width = params.width,
        height = params.height,
        range = ?land.range(),
        "land heightfield synthesized"
    );
    Ok(land)
}
