//! Layered voxel classification against the surface height.

use strata_voxel::VoxelType;

/// Altitude above which buried solid voxels become snow.
pub const SNOW_LINE: f32 = 24.0;

/// Thickness of the grass layer below the surface.
pub const SURFACE_LAYER_DEPTH: f32 = 2.0;

/// Altitude at or below which non-surface voxels are water.
pub const SEA_LEVEL: f32 = 10.0;

/// Picks the material for a voxel at altitude `y` in a column whose surface
/// sits at `height`.
///
/// Rules apply top to bottom and the first match wins: the surface layer is
/// always grass, solid cells buried above the snow line are snow, everything
/// else at or below sea level is water, open cells above the surface are
/// air, and the remaining interior is stone.
pub fn classify_voxel(y: f32, height: f32) -> VoxelType {
    if y <= height && y > height - SURFACE_LAYER_DEPTH {
        VoxelType::Grass
    } else if y > SNOW_LINE && y <= height {
        VoxelType::Snow
    } else if y <= SEA_LEVEL {
        VoxelType::Water
    } else if y > height {
        VoxelType::Air
    } else {
        VoxelType::Stone
    }
}
