//! Terrain generation: a Perlin height field plus the layered rules that
//! classify each voxel from its world position and the surface height above
//! its column.

pub mod classify;
pub mod height_field;

pub use classify::{SEA_LEVEL, SNOW_LINE, SURFACE_LAYER_DEPTH, classify_voxel};
pub use height_field::{FIELD_SIZE, HeightField, HeightFieldParams};
