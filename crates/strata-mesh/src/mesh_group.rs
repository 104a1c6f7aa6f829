//! Geometry buffers for all faces of one voxel type within one chunk.

use bytemuck::{Pod, Zeroable};
use glam::IVec3;

use crate::face_direction::FaceDirection;

/// One interleaved vertex, laid out for direct upload by a mesh consumer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in chunk-local coordinates.
    pub position: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

/// Vertex, UV, and triangle-index buffers for one voxel type.
///
/// A group accumulates quads during a mesh rebuild; every quad contributes
/// exactly 4 vertices and 2 triangles. Groups are value types: a rebuild
/// replaces the whole set atomically rather than patching in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshGroup {
    /// Quad corner positions in chunk-local coordinates.
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates, paired index-for-index with `vertices`.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices into `vertices`, 3 per triangle.
    pub indices: Vec<u32>,
}

impl MeshGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad for the face of the voxel at `local` pointing in
    /// `direction`.
    ///
    /// The four corners come from the fixed per-direction table; the two
    /// triangles always reference the last four appended vertices as
    /// `(n-4, n-3, n-2)` and `(n-4, n-2, n-1)`.
    pub fn push_face(&mut self, local: IVec3, direction: FaceDirection) {
        let base = local.as_vec3();
        for corner in direction.corners() {
            self.vertices.push([
                base.x + corner[0],
                base.y + corner[1],
                base.z + corner[2],
            ]);
        }
        self.uvs.extend_from_slice(direction.uvs());

        let n = self.vertices.len() as u32;
        self.indices
            .extend_from_slice(&[n - 4, n - 3, n - 2, n - 4, n - 2, n - 1]);
    }

    /// Number of quads in the group.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Number of vertices in the group.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no face has been emitted into this group.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Builds the interleaved vertex buffer for GPU upload.
    pub fn interleaved(&self) -> Vec<MeshVertex> {
        self.vertices
            .iter()
            .zip(&self.uvs)
            .map(|(&position, &uv)| MeshVertex { position, uv })
            .collect()
    }
}
