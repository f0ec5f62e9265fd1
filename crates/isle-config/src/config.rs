//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration for one terrain instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Noise and shaping parameters for the heightfield.
    pub terrain: GenerationParams,
    /// Water and playable-area layout constants.
    pub surface: SurfaceConfig,
    /// Worker pool settings.
    pub runtime: RuntimeConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// The flat set of options that fully determines a generated terrain.
///
/// Two runs with equal `GenerationParams` produce bit-identical output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationParams {
    /// Number of grid cells along X.
    pub width: u32,
    /// Number of grid cells along Z.
    pub height: u32,
    /// Base noise frequency. Higher values give smaller, busier features.
    pub frequency: f32,
    /// Noise amplitude. Scales the raw noise before shaping.
    pub amplitude: f32,
    /// Per-octave amplitude multiplier, in `(0, 1]`.
    pub persistence: f32,
    /// Number of noise layers summed together.
    pub octaves: u32,
    /// Determinism key for every noise layer. Negative seeds are allowed.
    pub seed: i32,
    /// Exponent applied to normalized noise. Values above 1 flatten lowlands
    /// and emphasize peaks; values below 1 do the opposite.
    pub distribution_power: f32,
    /// Vertical multiplier from grid height to world units.
    pub height_scale: f32,
    /// Exponent on normalized distance from the grid center. Values below 1
    /// give steep coasts, values above 1 give gentle ones.
    pub coast_falloff_strength: f32,
}

/// Layout constants for the water surface and the playable region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Local Y of the water surface before the ocean floor is subtracted.
    pub water_baseline: f32,
    /// Vertical offset applied to the placed water surface.
    pub water_vertical_offset: f32,
    /// Distance the circular playable region is inset from the grid edge.
    pub bounds_inset: f32,
}

/// Worker pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Threads used for per-column generation. `0` means one per logical CPU.
    pub worker_threads: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write a color-banded `heightmap.png` next to exported meshes.
    pub export_heightmap: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            frequency: 0.05,
            amplitude: 1.0,
            persistence: 0.5,
            octaves: 6,
            seed: 12345,
            distribution_power: 1.0,
            height_scale: 10.0,
            coast_falloff_strength: 0.5,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            water_baseline: 20.0,
            water_vertical_offset: -10.0,
            bounds_inset: 20.0,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { worker_threads: 0 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            export_heightmap: false,
        }
    }
}

/// Per-user configuration directory (`<config_dir>/isle`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("isle"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
