//! World-level failures.
//!
//! All of these are local and recoverable. Nothing in the registry treats a
//! failed edit or an early height query as fatal; callers decide whether to
//! retry, ignore, or surface the failure.

use glam::Vec3;
use strata_voxel::VoxelError;
use thiserror::Error;

/// Errors produced by registry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    /// The world position falls inside no loaded chunk. Edits require a
    /// loaded chunk; neighbor queries during meshing deliberately do not go
    /// through this error and treat the position as inactive instead.
    #[error("no chunk loaded at world position {pos}")]
    ChunkNotLoaded {
        /// The queried world position.
        pos: Vec3,
    },

    /// Terrain height was queried before any world generation ran.
    #[error("height field queried before world generation")]
    UninitializedState,

    /// A per-voxel failure surfaced through a world-level edit.
    #[error(transparent)]
    Voxel(#[from] VoxelError),
}
