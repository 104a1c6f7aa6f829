//! Face-culling mesh construction over a voxel grid.
//!
//! For every active voxel the mesher probes the six neighbor cells. Neighbors
//! inside the grid are answered by the grid itself; neighbors outside it are
//! resolved through a [`NeighborLookup`] so adjacent chunks can suppress the
//! shared wall. A face is emitted exactly when the neighbor is inactive.

use glam::IVec3;
use rustc_hash::FxHashMap;
use strata_voxel::{VoxelGrid, VoxelType};

use crate::face_direction::FaceDirection;
use crate::mesh_group::MeshGroup;

/// Mesh output, one group per voxel type present in the chunk.
///
/// Types with no visible faces get no entry, so iterating the map only ever
/// yields non-empty groups.
pub type MeshGroups = FxHashMap<VoxelType, MeshGroup>;

/// Resolves activity of voxels outside the grid being meshed.
///
/// Implementations answer in world coordinates. Positions nobody can answer
/// for (an unloaded chunk, the edge of the world) must report inactive, which
/// makes the boundary face visible rather than leaving a hole.
pub trait NeighborLookup {
    /// Returns `true` if the voxel at `world_pos` is active.
    fn is_active(&self, world_pos: IVec3) -> bool;
}

/// A lookup with no neighbors at all: every outside position is inactive.
///
/// Meshing a chunk against this emits every boundary face, which is the right
/// behavior for an isolated chunk and convenient in tests.
pub struct NoNeighbors;

impl NeighborLookup for NoNeighbors {
    fn is_active(&self, _world_pos: IVec3) -> bool {
        false
    }
}

/// Builds per-type mesh groups for `grid`, which occupies world space starting
/// at `origin`.
///
/// Visibility is decided purely by the activity flag: a face between two
/// active voxels is culled even when their types differ. Inactive voxels emit
/// nothing.
pub fn build_mesh_groups(
    grid: &VoxelGrid,
    origin: IVec3,
    neighbors: &dyn NeighborLookup,
) -> MeshGroups {
    let mut groups = MeshGroups::default();

    for (local, voxel) in grid.iter() {
        if !voxel.is_active() {
            continue;
        }

        for dir in FaceDirection::ALL {
            let next = dir.offset(local);
            let hidden = if grid.in_bounds(next) {
                grid.is_active(next)
            } else {
                neighbors.is_active(origin + next)
            };

            if !hidden {
                groups
                    .entry(voxel.voxel_type())
                    .or_default()
                    .push_face(local, dir);
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_faces(groups: &MeshGroups) -> usize {
        groups.values().map(MeshGroup::face_count).sum()
    }

    /// Treats everything below y = 0 as solid ground.
    struct SolidFloor;

    impl NeighborLookup for SolidFloor {
        fn is_active(&self, world_pos: IVec3) -> bool {
            world_pos.y < 0
        }
    }

    #[test]
    fn test_single_voxel_emits_six_faces() {
        let grid = VoxelGrid::generate(4, IVec3::ZERO, |p| {
            if p == IVec3::new(1, 1, 1) {
                VoxelType::Stone
            } else {
                VoxelType::Air
            }
        });

        let groups = build_mesh_groups(&grid, IVec3::ZERO, &NoNeighbors);
        assert_eq!(groups.len(), 1);
        let stone = &groups[&VoxelType::Stone];
        assert_eq!(stone.face_count(), 6);
        assert_eq!(stone.vertex_count(), 24);
        assert_eq!(stone.indices.len(), 36);
    }

    #[test]
    fn test_adjacent_voxels_cull_shared_faces() {
        // Two stone voxels side by side along x: 12 faces minus the 2 they
        // hide from each other.
        let grid = VoxelGrid::generate(4, IVec3::ZERO, |p| {
            if p.y == 1 && p.z == 1 && (p.x == 1 || p.x == 2) {
                VoxelType::Stone
            } else {
                VoxelType::Air
            }
        });

        let groups = build_mesh_groups(&grid, IVec3::ZERO, &NoNeighbors);
        assert_eq!(total_faces(&groups), 10);
    }

    #[test]
    fn test_culling_ignores_type_mismatch() {
        // Grass next to stone: the shared wall is still culled because
        // visibility is decided by activity, not material.
        let grid = VoxelGrid::generate(4, IVec3::ZERO, |p| match (p.x, p.y, p.z) {
            (1, 1, 1) => VoxelType::Grass,
            (2, 1, 1) => VoxelType::Stone,
            _ => VoxelType::Air,
        });

        let groups = build_mesh_groups(&grid, IVec3::ZERO, &NoNeighbors);
        assert_eq!(groups[&VoxelType::Grass].face_count(), 5);
        assert_eq!(groups[&VoxelType::Stone].face_count(), 5);
    }

    #[test]
    fn test_inactive_voxels_emit_nothing() {
        let grid = VoxelGrid::filled(4, VoxelType::Air);
        let groups = build_mesh_groups(&grid, IVec3::ZERO, &NoNeighbors);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_solid_cube_shows_only_its_surface() {
        // A fully solid 4-cube has 6 sides of 16 cells each.
        let grid = VoxelGrid::filled(4, VoxelType::Stone);
        let groups = build_mesh_groups(&grid, IVec3::ZERO, &NoNeighbors);
        assert_eq!(total_faces(&groups), 96);
    }

    #[test]
    fn test_boundary_neighbor_suppresses_face() {
        // One voxel in the corner at y = 0. With no neighbors its bottom face
        // shows; with solid ground below it does not.
        let grid = VoxelGrid::generate(2, IVec3::ZERO, |p| {
            if p == IVec3::ZERO {
                VoxelType::Stone
            } else {
                VoxelType::Air
            }
        });

        let isolated = build_mesh_groups(&grid, IVec3::ZERO, &NoNeighbors);
        assert_eq!(total_faces(&isolated), 6);

        let grounded = build_mesh_groups(&grid, IVec3::ZERO, &SolidFloor);
        assert_eq!(total_faces(&grounded), 5);
    }

    #[test]
    fn test_neighbor_lookup_receives_world_coordinates() {
        // The chunk sits at world y = 32, so its floor is far above the
        // y < 0 ground and every boundary face stays visible.
        let origin = IVec3::new(0, 32, 0);
        let grid = VoxelGrid::generate(2, origin, |p| {
            if p == origin {
                VoxelType::Stone
            } else {
                VoxelType::Air
            }
        });

        let groups = build_mesh_groups(&grid, origin, &SolidFloor);
        assert_eq!(total_faces(&groups), 6);
    }

    #[test]
    fn test_flat_terrain_slab() {
        // Height-2 slab filling a 4-grid: 16 top, 16 bottom, 4 sides of 8.
        let grid = VoxelGrid::generate(4, IVec3::ZERO, |p| {
            if p.y < 2 {
                VoxelType::Grass
            } else {
                VoxelType::Air
            }
        });

        let groups = build_mesh_groups(&grid, IVec3::ZERO, &NoNeighbors);
        let grass = &groups[&VoxelType::Grass];
        assert_eq!(grass.face_count(), 64);

        // Exactly 16 quads lie flat in the top surface plane y = 2.
        let top_quads = grass
            .vertices
            .chunks(4)
            .filter(|quad| quad.iter().all(|v| v[1] == 2.0))
            .count();
        assert_eq!(top_quads, 16);

        // Solid ground below culls the 16 bottom quads.
        let grounded = build_mesh_groups(&grid, IVec3::ZERO, &SolidFloor);
        assert_eq!(grounded[&VoxelType::Grass].face_count(), 48);
    }
}
