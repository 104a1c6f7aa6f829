//! A chunk: one cubic voxel grid plus its per-type mesh output.

use glam::IVec3;
use strata_mesh::{MeshGroups, NeighborLookup, build_mesh_groups};
use strata_voxel::{VoxelError, VoxelGrid, VoxelType};

/// A fixed-size cube of voxels at an aligned world origin, together with the
/// mesh groups produced by the last rebuild.
///
/// Mesh groups are replaced wholesale on every rebuild. A group exists for a
/// voxel type exactly when the last rebuild emitted at least one face of that
/// type, so consumers never see stale or empty groups.
pub struct Chunk {
    origin: IVec3,
    grid: VoxelGrid,
    meshes: MeshGroups,
}

impl Chunk {
    /// Builds the chunk's grid by classifying every cell from its world
    /// position. The mesh starts empty; call [`Chunk::reload`] (or let the
    /// registry run its mesh pass) once neighbors are in place.
    pub fn generate(
        size: u32,
        origin: IVec3,
        classify: impl FnMut(IVec3) -> VoxelType,
    ) -> Self {
        Self {
            origin,
            grid: VoxelGrid::generate(size, origin, classify),
            meshes: MeshGroups::default(),
        }
    }

    /// World-space origin. Always a multiple of the chunk size per axis when
    /// the chunk lives in a registry.
    pub fn origin(&self) -> IVec3 {
        self.origin
    }

    /// Edge length in voxels.
    pub fn size(&self) -> i32 {
        self.grid.size()
    }

    /// The underlying voxel grid.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Mesh groups from the last rebuild, keyed by voxel type.
    pub fn meshes(&self) -> &MeshGroups {
        &self.meshes
    }

    /// Discards and rebuilds all mesh groups from the current grid state.
    pub fn reload(&mut self, neighbors: &dyn NeighborLookup) {
        self.meshes = build_mesh_groups(&self.grid, self.origin, neighbors);
    }

    /// Replaces the mesh groups with externally built ones. The registry uses
    /// this to rebuild against itself without holding the chunk mutably
    /// during the neighbor queries.
    pub(crate) fn set_meshes(&mut self, meshes: MeshGroups) {
        self.meshes = meshes;
    }

    /// Replaces the whole grid, reclassifying every cell. Used by world
    /// regeneration; the mesh is stale afterward until the next rebuild.
    pub(crate) fn reclassify(&mut self, classify: impl FnMut(IVec3) -> VoxelType) {
        self.grid = VoxelGrid::generate(self.grid.size() as u32, self.origin, classify);
    }

    /// Sets the voxel at a local position to `voxel_type`.
    ///
    /// # Errors
    ///
    /// [`VoxelError::OutOfRange`] outside the grid; [`VoxelError::NoOpMutation`]
    /// if the cell already holds `voxel_type`. The mesh is untouched either
    /// way; the caller triggers the rebuild.
    pub fn create_voxel(&mut self, local: IVec3, voxel_type: VoxelType) -> Result<(), VoxelError> {
        self.grid.set_type(local, voxel_type)
    }

    /// Sets the voxel at a local position to `Air`.
    ///
    /// # Errors
    ///
    /// [`VoxelError::OutOfRange`] outside the grid; [`VoxelError::NoOpMutation`]
    /// if the cell is already air.
    pub fn destroy_voxel(&mut self, local: IVec3) -> Result<(), VoxelError> {
        self.grid.set_type(local, VoxelType::Air)
    }

    /// Activity of the voxel at a local position; out-of-range is inactive.
    pub fn is_voxel_active(&self, local: IVec3) -> bool {
        self.grid.is_active(local)
    }

    /// Clears every voxel to air, returning how many were solid. The mesh is
    /// stale afterward until the next rebuild.
    pub fn destroy(&mut self) -> usize {
        self.grid.clear_to_air()
    }
}
