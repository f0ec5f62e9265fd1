//! Configuration system for island terrain generation.
//!
//! Holds the flat set of generation parameters plus the surface, runtime and
//! debug settings around them. Settings persist to disk as RON, accept CLI
//! overrides via clap, and detect on-disk changes for hot-reload.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, GenerationParams, RuntimeConfig, SurfaceConfig, default_config_dir,
};
pub use error::ConfigError;
