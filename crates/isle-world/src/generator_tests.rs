//! Tests for the generation pipeline.

use glam::Vec3;
use isle_config::{Config, GenerationParams};
use isle_terrain::{LAND_FLOOR, NoiseRequest, TerrainError};

use super::*;

fn config(width: u32, height: u32, seed: i32) -> Config {
    Config {
        terrain: GenerationParams {
            width,
            height,
            seed,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn generate(config: &Config) -> GeneratedTerrain {
    TerrainGenerator::new(config).unwrap().generate().unwrap()
}

struct FailingNoise;

impl NoisePrimitive for FailingNoise {
    fn sample_matrix(&self, _request: &NoiseRequest) -> Result<HeightGrid, TerrainError> {
        Err(TerrainError::NoisePrimitiveFailure("sampler offline".to_string()))
    }
}

#[test]
fn test_four_by_four_scenario() {
    let terrain = generate(&config(4, 4, 1));
    for mesh in [&terrain.land_mesh, &terrain.water_mesh] {
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 18);
        assert_eq!(mesh.indices.len(), 54);
    }
    assert_eq!(terrain.collision.face_count(), 18);
}

#[test]
fn test_width_one_rejected_before_work() {
    let result = TerrainGenerator::new(&config(1, 10, 1));
    assert!(matches!(
        result,
        Err(GenerationError::Terrain(TerrainError::InvalidDimension {
            width: 1,
            height: 10
        }))
    ));
}

#[test]
fn test_invalid_parameter_rejected() {
    let mut cfg = config(8, 8, 1);
    cfg.terrain.octaves = 0;
    assert!(matches!(
        TerrainGenerator::new(&cfg),
        Err(GenerationError::Terrain(TerrainError::InvalidParameter {
            name: "octaves",
            ..
        }))
    ));
}

#[test]
fn test_noise_failure_propagates_unchanged() {
    let generator = TerrainGenerator::with_noise(&config(8, 8, 1), FailingNoise).unwrap();
    match generator.generate() {
        Err(GenerationError::Terrain(TerrainError::NoisePrimitiveFailure(msg))) => {
            assert_eq!(msg, "sampler offline");
        }
        other => panic!("expected noise failure, got {other:?}"),
    }
}

#[test]
fn test_same_seed_gives_identical_vertex_bytes() {
    let a = generate(&config(32, 24, 42));
    let b = generate(&config(32, 24, 42));
    assert_eq!(a.land_mesh.vertex_bytes(), b.land_mesh.vertex_bytes());
    assert_eq!(a.water_mesh.vertex_bytes(), b.water_mesh.vertex_bytes());
    assert_eq!(a.land_mesh, b.land_mesh);
    assert_eq!(a.water_mesh, b.water_mesh);
}

#[test]
fn test_different_seeds_differ() {
    let a = generate(&config(16, 16, 1));
    let b = generate(&config(16, 16, 2));
    assert_ne!(a.land_mesh.vertices, b.land_mesh.vertices);
}

#[test]
fn test_output_independent_of_worker_count() {
    let mut single = config(40, 28, 9);
    single.runtime.worker_threads = 1;
    let mut many = single.clone();
    many.runtime.worker_threads = 4;

    let one = TerrainGenerator::new(&single).unwrap();
    let four = TerrainGenerator::new(&many).unwrap();
    assert_eq!(one.worker_threads(), 1);
    assert_eq!(four.worker_threads(), 4);

    let a = one.retain_grids(true).generate().unwrap();
    let b = four.retain_grids(true).generate().unwrap();
    assert_eq!(a.grids, b.grids);
    assert_eq!(a.land_mesh, b.land_mesh);
    assert_eq!(a.water_mesh, b.water_mesh);
    assert_eq!(a.collision, b.collision);
}

#[test]
fn test_index_and_count_invariants() {
    for (w, h) in [(2, 2), (3, 7), (10, 5)] {
        let terrain = generate(&config(w, h, 3));
        let (w, h) = (w as usize, h as usize);
        for mesh in [&terrain.land_mesh, &terrain.water_mesh] {
            assert_eq!(mesh.vertex_count(), w * h);
            assert_eq!(mesh.indices.len(), 6 * (w - 1) * (h - 1));
            assert!(mesh.indices.iter().all(|&i| (i as usize) < w * h));
        }
        assert_eq!(terrain.land_mesh.indices, terrain.water_mesh.indices);
    }
}

#[test]
fn test_grids_dropped_unless_retained() {
    let cfg = config(12, 12, 5);
    let dropped = generate(&cfg);
    assert!(dropped.grids.is_none());
    assert!(dropped.land_range.is_some());

    let kept = TerrainGenerator::new(&cfg)
        .unwrap()
        .retain_grids(true)
        .generate()
        .unwrap();
    let grids = kept.grids.unwrap();
    assert_eq!(grids.land.dimensions(), (12, 12));
    assert!(grids.land.values().iter().all(|&h| h >= LAND_FLOOR));
    assert!(grids.ocean_floor.values().iter().all(|&h| h >= 0.0));
}

#[test]
fn test_vertices_follow_grids() {
    let cfg = config(6, 5, 11);
    let terrain = TerrainGenerator::new(&cfg)
        .unwrap()
        .retain_grids(true)
        .generate()
        .unwrap();
    let grids = terrain.grids.as_ref().unwrap();
    let scale = cfg.terrain.height_scale;
    let baseline = cfg.surface.water_baseline;

    for (i, (land, water)) in terrain
        .land_mesh
        .vertices
        .iter()
        .zip(&terrain.water_mesh.vertices)
        .enumerate()
    {
        let (x, z) = (i / 5, i % 5);
        assert_eq!(land.position, [x as f32, grids.land[(x, z)] * scale, z as f32]);
        assert_eq!(
            water.position,
            [x as f32, baseline - grids.ocean_floor[(x, z)], z as f32]
        );
    }
}

#[test]
fn test_collision_mirrors_land_mesh() {
    let terrain = generate(&config(7, 6, 2));
    let faces: Vec<_> = terrain.land_mesh.triangles().collect();
    assert_eq!(terrain.collision.faces(), faces.as_slice());
}

#[test]
fn test_placement_and_bounds() {
    let terrain = generate(&config(100, 100, 12345));
    assert_eq!(terrain.placement.land_origin, Vec3::new(-50.0, 0.0, -50.0));
    assert_eq!(terrain.placement.water_origin, Vec3::new(-50.0, -10.0, -50.0));

    assert!(terrain.is_within_bounds(Vec3::new(50.0, 0.0, 50.0)));
    assert!(!terrain.is_within_bounds(Vec3::new(0.0, 0.0, 0.0)));
    assert!(terrain.is_within_bounds(Vec3::new(80.0, 0.0, 50.0)));
}

#[test]
fn test_summary_serializes() {
    let terrain = generate(&config(4, 4, 1));
    let summary = terrain.summary();
    assert_eq!(summary.vertex_count, 16);
    assert_eq!(summary.triangle_count, 18);
    assert_eq!(summary.collision_faces, 18);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["width"], 4);
    assert_eq!(json["seed"], 1);
    assert!(json["timings"]["total_ms"].as_f64().unwrap() >= 0.0);
    assert_eq!(json["land_origin"], serde_json::json!([-2.0, 0.0, -2.0]));
}
