//! The noise primitive: a deterministic multi-octave 2D noise matrix sampler.

use ::noise::{NoiseFn, Simplex};
use isle_config::GenerationParams;

use crate::{HeightGrid, TerrainError};

/// Seed offset separating the ocean-floor layer from the land layer.
const OCEAN_SEED_OFFSET: u32 = 1000;

/// Frequency multiplier between successive octaves.
const LACUNARITY: f64 = 2.0;

/// Reinterpret a signed seed as the unsigned key `Simplex` takes.
fn noise_seed(seed: i32) -> u32 {
    seed as u32
}

/// Everything a [`NoisePrimitive`] needs to fill one matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseRequest {
    pub width: u32,
    pub height: u32,
    pub frequency: f32,
    pub amplitude: f32,
    pub persistence: f32,
    pub octaves: u32,
    pub seed: u32,
    /// Exponent applied to the normalized sample. `1.0` leaves it unchanged.
    pub distribution_power: f32,
}

impl NoiseRequest {
    /// The base land layer, taken straight from the generation parameters.
    pub fn land(params: &GenerationParams) -> Self {
        Self {
            width: params.width,
            height: params.height,
            frequency: params.frequency,
            amplitude: params.amplitude,
            persistence: params.persistence,
            octaves: params.octaves,
            seed: noise_seed(params.seed),
            distribution_power: params.distribution_power,
        }
    }

    /// The ocean-floor layer: doubled frequency, amplitude tied to the
    /// height scale, and an offset seed so it decorrelates from the land.
    pub fn ocean_floor(params: &GenerationParams) -> Self {
        Self {
            width: params.width,
            height: params.height,
            frequency: params.frequency * 2.0,
            amplitude: params.height_scale * 0.5,
            persistence: params.persistence,
            octaves: params.octaves,
            seed: noise_seed(params.seed).wrapping_add(OCEAN_SEED_OFFSET),
            distribution_power: 1.0,
        }
    }

    /// Verify that `grid` has the shape this request asked for.
    pub fn check_shape(&self, grid: &HeightGrid) -> Result<(), TerrainError> {
        let expected = (self.width as usize, self.height as usize);
        if grid.dimensions() == expected {
            Ok(())
        } else {
            Err(TerrainError::NoisePrimitiveFailure(format!(
                "requested {}x{} matrix, got {}x{}",
                expected.0,
                expected.1,
                grid.width(),
                grid.height()
            )))
        }
    }
}

/// A deterministic 2D noise matrix source.
///
/// Implementations must be pure: the same request always yields the same
/// grid, bit for bit, regardless of the calling thread pool.
pub trait NoisePrimitive: Sync {
    fn sample_matrix(&self, request: &NoiseRequest) -> Result<HeightGrid, TerrainError>;
}

/// Fractal Brownian motion over simplex noise.
///
/// Octaves double in frequency and scale in amplitude by `persistence`. The
/// sum is normalized by the geometric series of octave amplitudes, remapped to
/// `[0, 1]`, raised to `distribution_power`, and finally scaled by
/// `amplitude`, so every sample lies in `[0, amplitude]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FbmNoise;

impl FbmNoise {
    fn sample(noise: &Simplex, request: &NoiseRequest, max_amplitude: f64, x: f64, z: f64) -> f32 {
        let mut total = 0.0;
        let mut frequency = f64::from(request.frequency);
        let mut amplitude = 1.0;

        for _ in 0..request.octaves {
            total += noise.get([x * frequency, z * frequency]) * amplitude;
            frequency *= LACUNARITY;
            amplitude *= f64::from(request.persistence);
        }

        let unit = ((total / max_amplitude + 1.0) * 0.5).clamp(0.0, 1.0);
        let shaped = unit.powf(f64::from(request.distribution_power));
        (shaped * f64::from(request.amplitude)) as f32
    }
}

impl NoisePrimitive for FbmNoise {
    fn sample_matrix(&self, request: &NoiseRequest) -> Result<HeightGrid, TerrainError> {
        if request.octaves == 0 {
            return Err(TerrainError::NoisePrimitiveFailure(
                "at least one octave is required".to_string(),
            ));
        }

        let noise = Simplex::new(request.seed);
        let persistence = f64::from(request.persistence);
        let max_amplitude: f64 = (0..request.octaves)
            .map(|i| persistence.powi(i as i32))
            .sum();

        Ok(HeightGrid::par_from_fn(
            request.width as usize,
            request.height as usize,
            |x, z| Self::sample(&noise, request, max_amplitude, x as f64, z as f64),
        ))
    }
}
