//! Command-line island generator.
//!
//! Loads `config.ron` (creating it on first run), applies CLI overrides,
//! generates one island, and optionally exports meshes, a heightmap preview
//! and a JSON summary.
//!
//! Run with: `cargo run -p isle-gen -- --seed 42 --export out --summary`

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use isle_config::{CliArgs, Config, ConfigError, default_config_dir};
use isle_terrain::debug_viz::render_heightmap_debug;
use isle_world::{GeneratedTerrain, GenerationError, TerrainGenerator};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode heightmap: {0}")]
    Png(#[from] png::EncodingError),

    #[error("failed to serialize summary: {0}")]
    Summary(#[from] serde_json::Error),
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> AppError + '_ {
    move |source| AppError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn load_config(args: &CliArgs) -> Result<(Config, PathBuf), AppError> {
    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);
    Ok((config, config_dir))
}

fn export_meshes(terrain: &GeneratedTerrain, dir: &Path) -> Result<(), AppError> {
    std::fs::create_dir_all(dir).map_err(write_error(dir))?;
    for (name, mesh) in [("land.obj", &terrain.land_mesh), ("water.obj", &terrain.water_mesh)] {
        let path = dir.join(name);
        let file = File::create(&path).map_err(write_error(&path))?;
        mesh.write_obj(BufWriter::new(file))
            .map_err(write_error(&path))?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn export_heightmap(terrain: &GeneratedTerrain, dir: &Path) -> Result<(), AppError> {
    let Some(grids) = &terrain.grids else {
        return Ok(());
    };
    let png = render_heightmap_debug(&grids.land, &grids.ocean_floor).encode_png()?;
    std::fs::create_dir_all(dir).map_err(write_error(dir))?;
    let path = dir.join("heightmap.png");
    std::fs::write(&path, png).map_err(write_error(&path))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn run(args: &CliArgs, config: &Config) -> Result<(), AppError> {
    let params = &config.terrain;
    info!(
        "Generating {}x{} island (seed {}, {} octaves)",
        params.width, params.height, params.seed, params.octaves
    );

    let generator =
        TerrainGenerator::new(config)?.retain_grids(config.debug.export_heightmap);
    info!("Worker threads: {}", generator.worker_threads());
    let terrain = generator.generate()?;

    if let Some(dir) = &args.export {
        export_meshes(&terrain, dir)?;
    }
    if config.debug.export_heightmap {
        let dir = args.export.as_deref().unwrap_or(Path::new("."));
        export_heightmap(&terrain, dir)?;
    }
    if args.summary {
        println!("{}", serde_json::to_string_pretty(&terrain.summary())?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let loaded = load_config(&args);

    let log_dir = loaded.as_ref().ok().map(|(_, dir)| dir.join("logs"));
    isle_log::init_logging(
        log_dir.as_deref(),
        cfg!(debug_assertions),
        loaded.as_ref().ok().map(|(config, _)| config),
    );

    let result = loaded.and_then(|(config, config_dir)| {
        info!("Config directory: {}", config_dir.display());
        run(&args, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(dir: &Path, extra: &[&str]) -> CliArgs {
        let mut argv = vec!["isle-gen", "--config"];
        let dir = dir.to_str().unwrap();
        argv.push(dir);
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let temp = tempfile::tempdir().unwrap();
        let args = args_for(temp.path(), &["--width", "16", "--seed", "3"]);
        let (config, dir) = load_config(&args).unwrap();
        assert_eq!(dir, temp.path());
        assert_eq!(config.terrain.width, 16);
        assert_eq!(config.terrain.seed, 3);
        assert!(temp.path().join("config.ron").exists());
    }

    #[test]
    fn test_negative_seed_accepted() {
        let temp = tempfile::tempdir().unwrap();
        let args = args_for(temp.path(), &["--seed", "-5", "--width", "8", "--height", "8"]);
        let (config, _) = load_config(&args).unwrap();
        assert_eq!(config.terrain.seed, -5);
        run(&args, &config).unwrap();
    }

    #[test]
    fn test_run_exports_meshes_and_heightmap() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("out");
        let out_str = out.to_str().unwrap();
        let args = args_for(
            temp.path(),
            &["--width", "8", "--height", "6", "--threads", "2", "--export", out_str],
        );
        let (mut config, _) = load_config(&args).unwrap();
        config.debug.export_heightmap = true;

        run(&args, &config).unwrap();

        let land = std::fs::read_to_string(out.join("land.obj")).unwrap();
        assert_eq!(land.lines().filter(|l| l.starts_with("v ")).count(), 48);
        assert_eq!(land.lines().filter(|l| l.starts_with("f ")).count(), 70);
        assert!(out.join("water.obj").exists());
        let png = std::fs::read(out.join("heightmap.png")).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }

    #[test]
    fn test_invalid_dimension_surfaces_as_error() {
        let temp = tempfile::tempdir().unwrap();
        let args = args_for(temp.path(), &["--width", "1"]);
        let (config, _) = load_config(&args).unwrap();
        let err = run(&args, &config).unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
        assert!(err.to_string().contains("1x100"));
    }
}
