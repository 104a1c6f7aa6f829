//! Chunk registry and world-level operations.
//!
//! The [`World`] owns every loaded chunk, keyed by chunk-aligned origin. All
//! edits go through it so that the remesh a mutation requires is complete
//! before the call returns, and so cross-chunk neighbor queries during
//! meshing resolve against the same registry the edit ran against.

use glam::{IVec3, Vec3};
use rustc_hash::FxHashMap;
use tracing::{debug, error, info, warn};

use strata_mesh::{FaceDirection, NeighborLookup, build_mesh_groups};
use strata_terrain::{HeightField, HeightFieldParams, classify_voxel};
use strata_voxel::{VoxelType, floor_to_grid};

use crate::chunk::Chunk;
use crate::error::WorldError;
use crate::params::WorldParams;

/// Maps an integer world position to the aligned origin of its owning chunk.
///
/// Each axis floors toward negative infinity, so positions with negative
/// coordinates still land in the chunk below them rather than rounding
/// toward zero.
fn align(pos: IVec3, size: i32) -> IVec3 {
    pos.div_euclid(IVec3::splat(size)) * size
}

/// The chunk registry.
///
/// Construct with [`World::new`], then call [`World::generate`] to sample the
/// height field and build the chunk grid. Until generation runs the world is
/// empty and height queries fail with
/// [`UninitializedState`](WorldError::UninitializedState).
pub struct World {
    params: WorldParams,
    chunk_size: i32,
    chunks: FxHashMap<IVec3, Chunk>,
    height_field: Option<HeightField>,
}

impl World {
    /// Creates an empty, ungenerated world.
    pub fn new(params: WorldParams) -> Self {
        Self {
            chunk_size: params.chunk_size as i32,
            params,
            chunks: FxHashMap::default(),
            height_field: None,
        }
    }

    /// The parameters this world was built from.
    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    /// Edge length of every chunk in this world.
    pub fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    /// Number of loaded chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates all loaded chunks.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Discards any existing chunks, samples a fresh height field, and builds
    /// the full chunk grid at aligned origins `(i*D, j*D, k*D)`.
    ///
    /// Generation is blocking and runs to completion: grids are classified
    /// first, then a single mesh pass rebuilds every chunk against its now
    /// loaded neighbors, so no boundary wall is meshed against a chunk that
    /// does not exist yet.
    pub fn generate(&mut self) {
        let field = HeightField::generate(&self.height_params());
        self.chunks.clear();

        let d = self.chunk_size;
        for i in 0..self.params.chunks_x as i32 {
            for j in 0..self.params.chunks_y as i32 {
                for k in 0..self.params.chunks_z as i32 {
                    let origin = IVec3::new(i, j, k) * d;
                    let chunk = Chunk::generate(d as u32, origin, |p| {
                        classify_voxel(p.y as f32, field.get(p.x, p.z))
                    });
                    self.chunks.insert(origin, chunk);
                }
            }
        }

        self.height_field = Some(field);
        self.remesh_all();
        info!(chunks = self.chunks.len(), chunk_size = d, "world generated");
    }

    /// Resamples the height field and reclassifies every loaded chunk in
    /// place, then remeshes them all. Chunk origins are untouched.
    pub fn regenerate(&mut self) {
        let field = HeightField::generate(&self.height_params());

        for chunk in self.chunks.values_mut() {
            chunk.reclassify(|p| classify_voxel(p.y as f32, field.get(p.x, p.z)));
        }

        self.height_field = Some(field);
        self.remesh_all();
        info!(chunks = self.chunks.len(), "world regenerated");
    }

    /// Precomputed surface height for the column at `(x, z)`.
    ///
    /// Querying before generation logs the failure and returns `0.0` so
    /// callers degrade to flat terrain instead of crashing; use
    /// [`World::try_get_height`] to observe the error.
    pub fn get_height(&self, x: i32, z: i32) -> f32 {
        match self.try_get_height(x, z) {
            Ok(h) => h,
            Err(err) => {
                error!(%err, x, z, "returning sentinel height");
                0.0
            }
        }
    }

    /// Fallible variant of [`World::get_height`].
    ///
    /// # Errors
    ///
    /// [`WorldError::UninitializedState`] before the first generation.
    pub fn try_get_height(&self, x: i32, z: i32) -> Result<f32, WorldError> {
        self.height_field
            .as_ref()
            .map(|field| field.get(x, z))
            .ok_or(WorldError::UninitializedState)
    }

    /// The aligned origin of the chunk that would own `pos`.
    pub fn aligned_origin(&self, pos: Vec3) -> IVec3 {
        align(floor_to_grid(pos), self.chunk_size)
    }

    /// The chunk owning a world position, if loaded. Absence is not an
    /// error; unloaded space is simply empty.
    pub fn get_chunk_at(&self, pos: Vec3) -> Option<&Chunk> {
        self.chunks.get(&self.aligned_origin(pos))
    }

    /// Activity of the voxel containing a world position. Unloaded space is
    /// inactive.
    pub fn is_voxel_active_at(&self, pos: Vec3) -> bool {
        let origin = self.aligned_origin(pos);
        match self.chunks.get(&origin) {
            Some(chunk) => chunk.is_voxel_active(floor_to_grid(pos) - origin),
            None => false,
        }
    }

    /// Sets the voxel containing `pos` to `voxel_type` and remeshes its
    /// chunk before returning.
    ///
    /// # Errors
    ///
    /// [`WorldError::ChunkNotLoaded`] outside the loaded world;
    /// [`VoxelError::NoOpMutation`](strata_voxel::VoxelError::NoOpMutation)
    /// if the cell already holds `voxel_type`. A failed call changes nothing
    /// and triggers no remesh.
    pub fn create_voxel_at(&mut self, pos: Vec3, voxel_type: VoxelType) -> Result<(), WorldError> {
        let origin = self.aligned_origin(pos);
        let local = floor_to_grid(pos) - origin;

        let Some(chunk) = self.chunks.get_mut(&origin) else {
            warn!(%pos, "voxel creation outside loaded world");
            return Err(WorldError::ChunkNotLoaded { pos });
        };
        if let Err(err) = chunk.create_voxel(local, voxel_type) {
            warn!(%err, %pos, "voxel creation rejected");
            return Err(err.into());
        }

        self.reload_chunk_at(origin);
        debug!(%pos, ?voxel_type, "voxel created");
        Ok(())
    }

    /// Sets the voxel containing `pos` to air and remeshes its chunk.
    ///
    /// When the edited cell sits on a chunk boundary layer (local coordinate
    /// `< 1` or `>= D - 1` on an axis) the face-adjacent neighbor chunk on
    /// that side is remeshed too, so its now exposed wall becomes visible.
    /// Absent neighbors are skipped silently.
    ///
    /// # Errors
    ///
    /// [`WorldError::ChunkNotLoaded`] outside the loaded world;
    /// [`VoxelError::NoOpMutation`](strata_voxel::VoxelError::NoOpMutation)
    /// if the cell is already air.
    pub fn destroy_voxel_at(&mut self, pos: Vec3) -> Result<(), WorldError> {
        let origin = self.aligned_origin(pos);
        let local = floor_to_grid(pos) - origin;
        let d = self.chunk_size;

        let Some(chunk) = self.chunks.get_mut(&origin) else {
            warn!(%pos, "voxel destruction outside loaded world");
            return Err(WorldError::ChunkNotLoaded { pos });
        };
        if let Err(err) = chunk.destroy_voxel(local) {
            warn!(%err, %pos, "voxel destruction rejected");
            return Err(err.into());
        }

        self.reload_chunk_at(origin);
        for dir in FaceDirection::ALL {
            let c = local[dir.axis()];
            let on_boundary = if dir.is_positive() { c >= d - 1 } else { c < 1 };
            if on_boundary {
                self.reload_chunk_at(origin + dir.unit() * d);
            }
        }
        debug!(%pos, "voxel destroyed");
        Ok(())
    }

    /// Clears every voxel of the chunk owning `pos` to air and remeshes it
    /// once. Returns how many voxels were solid.
    ///
    /// # Errors
    ///
    /// [`WorldError::ChunkNotLoaded`] if no chunk owns `pos`.
    pub fn destroy_chunk_at(&mut self, pos: Vec3) -> Result<usize, WorldError> {
        let origin = self.aligned_origin(pos);
        let Some(chunk) = self.chunks.get_mut(&origin) else {
            return Err(WorldError::ChunkNotLoaded { pos });
        };
        let cleared = chunk.destroy();
        self.reload_chunk_at(origin);
        debug!(%origin, cleared, "chunk destroyed");
        Ok(cleared)
    }

    /// Removes the chunk owning `pos` from the registry, releasing its grid
    /// and meshes.
    ///
    /// # Errors
    ///
    /// [`WorldError::ChunkNotLoaded`] if no chunk owns `pos`.
    pub fn delete_chunk_at(&mut self, pos: Vec3) -> Result<(), WorldError> {
        let origin = self.aligned_origin(pos);
        if self.chunks.remove(&origin).is_none() {
            return Err(WorldError::ChunkNotLoaded { pos });
        }
        debug!(%origin, "chunk deleted");
        Ok(())
    }

    /// Rebuilds the mesh of the chunk at an aligned origin against the
    /// current registry. Returns `false` if no chunk is loaded there.
    pub fn reload_chunk_at(&mut self, origin: IVec3) -> bool {
        // Build against an immutable view of the registry first, then swap
        // the finished groups in. Consumers never observe a partial mesh.
        let groups = match self.chunks.get(&origin) {
            Some(chunk) => build_mesh_groups(chunk.grid(), chunk.origin(), &self.neighbors()),
            None => return false,
        };
        if let Some(chunk) = self.chunks.get_mut(&origin) {
            chunk.set_meshes(groups);
        }
        true
    }

    /// Neighbor-resolution view over this registry for the mesher.
    pub fn neighbors(&self) -> WorldNeighbors<'_> {
        WorldNeighbors { world: self }
    }

    fn remesh_all(&mut self) {
        let origins: Vec<IVec3> = self.chunks.keys().copied().collect();
        for origin in origins {
            self.reload_chunk_at(origin);
        }
    }

    fn height_params(&self) -> HeightFieldParams {
        HeightFieldParams {
            seed: self.params.seed,
            noise_scale: self.params.noise_scale,
            height_scale: self.params.height_scale,
        }
    }
}

/// Resolves out-of-chunk neighbor queries against the registry.
///
/// Positions in unloaded space report inactive, so the boundary faces of the
/// loaded world are always emitted.
pub struct WorldNeighbors<'a> {
    world: &'a World,
}

impl NeighborLookup for WorldNeighbors<'_> {
    fn is_active(&self, world_pos: IVec3) -> bool {
        let origin = align(world_pos, self.world.chunk_size);
        match self.world.chunks.get(&origin) {
            Some(chunk) => chunk.is_voxel_active(world_pos - origin),
            None => false,
        }
    }
}
