//! Voxel data model: terrain material types, per-cell voxel records, and the
//! cubic per-chunk grid with classification-on-init and bounds-checked mutation.

pub mod error;
pub mod grid;
pub mod voxel;

pub use error::VoxelError;
pub use grid::{VoxelGrid, floor_to_grid};
pub use voxel::{Voxel, VoxelType};
