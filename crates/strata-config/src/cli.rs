//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "strata", about = "Chunked voxel terrain generator")]
pub struct CliArgs {
    /// World seed for deterministic generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chunks along the X axis.
    #[arg(long)]
    pub chunks_x: Option<u32>,

    /// Chunks along the Y axis.
    #[arg(long)]
    pub chunks_y: Option<u32>,

    /// Chunks along the Z axis.
    #[arg(long)]
    pub chunks_z: Option<u32>,

    /// Chunk edge length in voxels.
    #[arg(long)]
    pub chunk_size: Option<u32>,

    /// Noise-space span of the height field.
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// Maximum terrain height in voxels.
    #[arg(long)]
    pub height_scale: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = Some(seed);
        }
        if let Some(x) = args.chunks_x {
            self.world.chunks_x = x;
        }
        if let Some(y) = args.chunks_y {
            self.world.chunks_y = y;
        }
        if let Some(z) = args.chunks_z {
            self.world.chunks_z = z;
        }
        if let Some(size) = args.chunk_size {
            self.world.chunk_size = size;
        }
        if let Some(scale) = args.noise_scale {
            self.world.noise_scale = scale;
        }
        if let Some(scale) = args.height_scale {
            self.world.height_scale = scale;
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
            seed: Some(7),
            chunks_x: Some(2),
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.world.chunks_x, 2);
        assert_eq!(config.debug.log_level, "trace");
        // Non-overridden fields retain defaults
        assert_eq!(config.world.chunks_y, 5);
        assert_eq!(config.world.chunk_size, 16);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }
}
