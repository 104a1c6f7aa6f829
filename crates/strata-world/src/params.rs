//! World generation parameters.

use serde::{Deserialize, Serialize};

/// Everything `World` generation needs. The world is rebuilt from these on
/// every generation; nothing else is persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    /// Chunks along the world X axis.
    pub chunks_x: u32,
    /// Chunks along the world Y axis.
    pub chunks_y: u32,
    /// Chunks along the world Z axis.
    pub chunks_z: u32,
    /// Edge length of every chunk, in voxels.
    pub chunk_size: u32,
    /// Seed for the height-field offset. `None` means a fresh random world
    /// per generation.
    pub seed: Option<u64>,
    /// Noise-space span of the height field.
    pub noise_scale: f64,
    /// Maximum terrain height in voxels.
    pub height_scale: f64,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            chunks_x: 5,
            chunks_y: 5,
            chunks_z: 5,
            chunk_size: 16,
            seed: None,
            noise_scale: 10.0,
            height_scale: 32.0,
        }
    }
}
