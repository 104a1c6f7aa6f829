//! Face meshing: converts a chunk's active voxels into per-material geometry
//! buffers by culling faces hidden behind neighboring solid voxels.

pub mod face_direction;
pub mod mesh_group;
pub mod mesher;

pub use face_direction::FaceDirection;
pub use mesh_group::{MeshGroup, MeshVertex};
pub use mesher::{MeshGroups, NeighborLookup, NoNeighbors, build_mesh_groups};
