//! Voxel access and mutation error types.

use glam::IVec3;

use crate::voxel::VoxelType;

/// Errors from grid queries and mutations.
///
/// Both variants are local and recoverable: the grid state is unchanged
/// whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VoxelError {
    /// A position lies outside `[0, size)` on at least one axis.
    #[error("position {pos} is outside chunk bounds [0, {size})")]
    OutOfRange {
        /// The rejected local position.
        pos: IVec3,
        /// Edge length of the grid that rejected it.
        size: i32,
    },

    /// A mutation would leave the voxel exactly as it is.
    #[error("voxel at {pos} is already {current:?}")]
    NoOpMutation {
        /// The targeted local position.
        pos: IVec3,
        /// The type the cell already holds.
        current: VoxelType,
    },
}
