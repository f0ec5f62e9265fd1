//! Command-line argument parsing for the island generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Island generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "isle-gen", about = "Deterministic island terrain generator")]
pub struct CliArgs {
    /// Grid cells along X.
    #[arg(long)]
    pub width: Option<u32>,

    /// Grid cells along Z.
    #[arg(long)]
    pub height: Option<u32>,

    /// Base noise frequency.
    #[arg(long)]
    pub frequency: Option<f32>,

    /// Noise amplitude.
    #[arg(long)]
    pub amplitude: Option<f32>,

    /// Per-octave amplitude multiplier.
    #[arg(long)]
    pub persistence: Option<f32>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Generation seed. May be negative.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i32>,

    /// Height-curve exponent.
    #[arg(long)]
    pub distribution_power: Option<f32>,

    /// Vertical multiplier for land heights.
    #[arg(long)]
    pub height_scale: Option<f32>,

    /// Coastline steepness exponent.
    #[arg(long)]
    pub coast_falloff_strength: Option<f32>,

    /// Worker threads (0 = one per logical CPU).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write `land.obj` and `water.obj` into this directory.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print a JSON summary of the generated terrain to stdout.
    #[arg(long)]
    pub summary: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let terrain = &mut self.terrain;
        if let Some(w) = args.width {
            terrain.width = w;
        }
        if let Some(h) = args.height {
            terrain.height = h;
        }
        if let Some(f) = args.frequency {
            terrain.frequency = f;
        }
        if let Some(a) = args.amplitude {
            terrain.amplitude = a;
        }
        if let Some(p) = args.persistence {
            terrain.persistence = p;
        }
        if let Some(o) = args.octaves {
            terrain.octaves = o;
        }
        if let Some(seed) = args.seed {
            terrain.seed = seed;
        }
        if let Some(power) = args.distribution_power {
            terrain.distribution_power = power;
        }
        if let Some(scale) = args.height_scale {
            terrain.height_scale = scale;
        }
        if let Some(strength) = args.coast_falloff_strength {
            terrain.coast_falloff_strength = strength;
        }
        if let Some(threads) = args.threads {
            self.runtime.worker_threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(4),
            seed: Some(42),
            threads: Some(2),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.terrain.width, 4);
        assert_eq!(config.terrain.seed, 42);
        assert_eq!(config.runtime.worker_threads, 2);
        // Untouched fields keep their defaults
        assert_eq!(config.terrain.height, 100);
        assert_eq!(config.terrain.octaves, 6);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "isle-gen",
            "--width",
            "64",
            "--coast-falloff-strength",
            "1.5",
            "--summary",
        ])
        .unwrap();
        assert_eq!(args.width, Some(64));
        assert_eq!(args.coast_falloff_strength, Some(1.5));
        assert!(args.summary);
        assert!(args.export.is_none());
    }

    #[test]
    fn test_cli_rejects_negative_width() {
        let result = CliArgs::try_parse_from(["isle-gen", "--width", "-3"]);
        assert!(result.is_err());
    }
}
