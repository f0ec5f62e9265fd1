//! The generation pipeline and its output.

use std::time::Instant;

use glam::Vec3;
use isle_config::{Config, GenerationParams, SurfaceConfig};
use isle_mesh::{MeshData, map_surfaces};
use isle_physics::{CollisionSurface, Placement, PlayableArea, place};
use isle_terrain::{
    FbmNoise, HeightGrid, NoisePrimitive, ValueRange, synthesize_land, synthesize_ocean_floor,
    validate_params,
};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::GenerationError;

/// Wall-clock time spent in each phase, in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PhaseTimings {
    pub land_ms: f64,
    pub ocean_floor_ms: f64,
    pub vertices_ms: f64,
    pub meshes_ms: f64,
    pub collision_ms: f64,
    pub total_ms: f64,
}

/// The two intermediate height grids, kept only on request.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGrids {
    pub land: HeightGrid,
    pub ocean_floor: HeightGrid,
}

/// Everything one run produces. The caller owns it outright.
#[derive(Clone, Debug)]
pub struct GeneratedTerrain {
    pub params: GenerationParams,
    pub land_mesh: MeshData,
    pub water_mesh: MeshData,
    pub collision: CollisionSurface,
    pub placement: Placement,
    pub playable_area: PlayableArea,
    /// Present only when the generator was asked to retain grids.
    pub grids: Option<TerrainGrids>,
    pub land_range: Option<ValueRange>,
    pub ocean_floor_range: Option<ValueRange>,
    pub timings: PhaseTimings,
}

impl GeneratedTerrain {
    /// Whether `position` (grid-local X/Z) lies in the playable circle.
    pub fn is_within_bounds(&self, position: Vec3) -> bool {
        self.playable_area.is_within_bounds(position)
    }
}

/// Runs the full pipeline for one set of parameters on its own thread pool.
pub struct TerrainGenerator<N = FbmNoise> {
    params: GenerationParams,
    surface: SurfaceConfig,
    noise: N,
    pool: rayon::ThreadPool,
    retain_grids: bool,
}

impl TerrainGenerator<FbmNoise> {
    /// A generator using the built-in fBm noise.
    pub fn new(config: &Config) -> Result<Self, GenerationError> {
        Self::with_noise(config, FbmNoise)
    }
}

impl<N: NoisePrimitive> TerrainGenerator<N> {
    /// A generator using a caller-supplied noise primitive.
    ///
    /// Parameters are validated here, before any thread is spawned.
    pub fn with_noise(config: &Config, noise: N) -> Result<Self, GenerationError> {
        validate_params(&config.terrain)?;

        let threads = match config.runtime.worker_threads {
            0 => num_cpus::get(),
            n => n,
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("isle-gen-{i}"))
            .build()?;

        Ok(Self {
            params: config.terrain.clone(),
            surface: config.surface.clone(),
            noise,
            pool,
            retain_grids: false,
        })
    }

    /// Keep the land and ocean-floor grids in the output.
    pub fn retain_grids(mut self, retain: bool) -> Self {
        self.retain_grids = retain;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn worker_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Generate the terrain. Output is identical for any worker count.
    pub fn generate(&self) -> Result<GeneratedTerrain, GenerationError> {
        let params = &self.params;
        let span = info_span!(
            "generate_terrain",
            width = params.width,
            height = params.height,
            seed = params.seed
        );
        let _entered = span.enter();
        let started = Instant::now();
        let mut timings = PhaseTimings::default();

        let (grids, land_mesh, water_mesh) = self.pool.install(|| -> Result<_, GenerationError> {
            let _entered = span.enter();

            let phase = Instant::now();
            let land = synthesize_land(params, &self.noise)?;
            timings.land_ms = elapsed_ms(phase);
            debug!(elapsed_ms = timings.land_ms, "land heightfield done");

            let phase = Instant::now();
            let ocean_floor = synthesize_ocean_floor(&land, params, &self.noise)?;
            timings.ocean_floor_ms = elapsed_ms(phase);
            debug!(elapsed_ms = timings.ocean_floor_ms, "ocean floor done");

            let phase = Instant::now();
            let surfaces = map_surfaces(
                &land,
                &ocean_floor,
                params.height_scale,
                self.surface.water_baseline,
            )?;
            timings.vertices_ms = elapsed_ms(phase);
            debug!(elapsed_ms = timings.vertices_ms, "surface vertices mapped");

            let phase = Instant::now();
            let (width, height) = (surfaces.width, surfaces.height);
            let (land_mesh, water_mesh) = rayon::join(
                || MeshData::build(surfaces.land, width, height),
                || MeshData::build(surfaces.water, width, height),
            );
            timings.meshes_ms = elapsed_ms(phase);
            debug!(elapsed_ms = timings.meshes_ms, "meshes built");

            let grids = TerrainGrids { land, ocean_floor };
            Ok((grids, land_mesh?, water_mesh?))
        })?;

        let phase = Instant::now();
        let collision = CollisionSurface::from_mesh(&land_mesh);
        timings.collision_ms = elapsed_ms(phase);

        let placement = place(params.width, params.height, &self.surface);
        let playable_area = PlayableArea::from_surface(params.width, params.height, &self.surface);
        timings.total_ms = elapsed_ms(started);

        info!(
            vertices = land_mesh.vertex_count(),
            triangles = land_mesh.triangle_count(),
            total_ms = timings.total_ms,
            "terrain generated"
        );

        Ok(GeneratedTerrain {
            params: params.clone(),
            land_range: grids.land.range(),
            ocean_floor_range: grids.ocean_floor.range(),
            grids: self.retain_grids.then_some(grids),
            land_mesh,
            water_mesh,
            collision,
            placement,
            playable_area,
            timings,
        })
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
