//! Terrain material types and the per-cell voxel record.

use serde::{Deserialize, Serialize};

/// Closed set of terrain materials.
///
/// `Air` is the universal "empty" sentinel: a voxel of type `Air` is never
/// active and never produces geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoxelType {
    /// Empty space.
    Air,
    /// Terrain at or below sea level.
    Water,
    /// The surface layer of the terrain.
    Grass,
    /// Terrain surface above the snow line.
    Snow,
    /// Everything beneath the surface layer.
    Stone,
}

impl VoxelType {
    /// All material types, `Air` first.
    pub const ALL: [VoxelType; 5] = [
        Self::Air,
        Self::Water,
        Self::Grass,
        Self::Snow,
        Self::Stone,
    ];

    /// Returns `true` for the empty sentinel.
    pub fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }
}

/// A single grid cell holding a material and its derived activity flag.
///
/// Invariant: `active == !voxel_type.is_air()`. The flag is re-derived on
/// every mutation and is never writable on its own; the only writers are
/// [`Voxel::new`] and [`Voxel::set_type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Voxel {
    voxel_type: VoxelType,
    active: bool,
}

impl Voxel {
    /// Creates a voxel of the given type with the activity flag derived.
    pub fn new(voxel_type: VoxelType) -> Self {
        Self {
            voxel_type,
            active: !voxel_type.is_air(),
        }
    }

    /// The material of this voxel.
    pub fn voxel_type(self) -> VoxelType {
        self.voxel_type
    }

    /// Whether this voxel occupies space (any type other than `Air`).
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Replaces the material and re-derives the activity flag.
    pub(crate) fn set_type(&mut self, voxel_type: VoxelType) {
        self.voxel_type = voxel_type;
        self.active = !voxel_type.is_air();
    }
}

impl Default for Voxel {
    fn default() -> Self {
        Self::new(VoxelType::Air)
    }
}
