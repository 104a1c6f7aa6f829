//! The world registry: owns every loaded chunk, maps arbitrary world
//! positions to their owning chunk, and orchestrates generation, voxel
//! edits, and the remeshing they trigger.

pub mod chunk;
pub mod error;
pub mod params;
pub mod world;

pub use chunk::Chunk;
pub use error::WorldError;
pub use params::WorldParams;
pub use world::{World, WorldNeighbors};
