//! Up-front validation of generation parameters.

use isle_config::GenerationParams;

use crate::{TerrainError, ValueRange};

/// Accepted persistence values, excluding zero itself.
const PERSISTENCE_RANGE: ValueRange = ValueRange::new(0.0, 1.0);

/// Reject parameters that cannot produce a terrain.
///
/// Runs before any work is scheduled. Checks, in order: grid dimensions
/// (including a cell count addressable by `u32` mesh indices), finiteness
/// of every float, then the individual ranges.
pub fn validate_params(params: &GenerationParams) -> Result<(), TerrainError> {
    let cells = u64::from(params.width) * u64::from(params.height);
    if params.width <= 1 || params.height <= 1 || u32::try_from(cells).is_err() {
        return Err(TerrainError::InvalidDimension {
            width: params.width,
            height: params.height,
        });
    }

    let floats = [
        ("frequency", params.frequency),
        ("amplitude", params.amplitude),
        ("persistence", params.persistence),
        ("distribution_power", params.distribution_power),
        ("height_scale", params.height_scale),
        ("coast_falloff_strength", params.coast_falloff_strength),
    ];
    if let Some(&(name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
        return Err(invalid(name, value, "must be finite"));
    }

    if params.octaves == 0 {
        return Err(invalid("octaves", 0.0, "must be at least 1"));
    }
    if params.amplitude <= 0.0 {
        return Err(invalid("amplitude", params.amplitude, "must be positive"));
    }
    if params.frequency <= 0.0 {
        return Err(invalid("frequency", params.frequency, "must be positive"));
    }
    if params.persistence <= 0.0 || !PERSISTENCE_RANGE.fits(params.persistence) {
        return Err(invalid(
            "persistence",
            params.persistence,
            "must be in (0, 1]",
        ));
    }
    if params.distribution_power < 0.0 {
        return Err(invalid(
            "distribution_power",
            params.distribution_power,
            "must not be negative",
        ));
    }

    Ok(())
}

fn invalid(name: &'static str, value: f32, reason: &'static str) -> TerrainError {
    TerrainError::InvalidParameter {
        name,
        value: f64::from(value),
        reason,
    }
}
