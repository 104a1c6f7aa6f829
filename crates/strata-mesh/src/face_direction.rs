//! The six axis-aligned face directions and their fixed geometry tables.

use glam::IVec3;

/// One of the six directions a voxel face can point.
///
/// The discriminant is the face-enumeration order used everywhere in the
/// mesher: +X, −X, +Y, −Y, +Z, −Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceDirection {
    /// +X direction.
    PosX = 0,
    /// −X direction.
    NegX = 1,
    /// +Y direction.
    PosY = 2,
    /// −Y direction.
    NegY = 3,
    /// +Z direction.
    PosZ = 4,
    /// −Z direction.
    NegZ = 5,
}

/// Corner offsets per direction, relative to the voxel's minimum corner.
///
/// Appended in order, the four corners of each quad wind so the face points
/// outward; triangle splitting is handled by
/// [`MeshGroup::push_face`](crate::MeshGroup::push_face). This table is
/// defined once and reused verbatim for every emitted face.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // +X
    [
        [1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
    ],
    // -X
    [
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [0.0, 1.0, 0.0],
    ],
    // +Y
    [
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 1.0, 0.0],
    ],
    // -Y
    [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
    ],
    // +Z
    [
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ],
    // -Z
    [
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
    ],
];

/// Texture coordinates per direction, paired index-for-index with
/// [`FACE_CORNERS`].
const FACE_UVS: [[[f32; 2]; 4]; 6] = [
    // +X
    [[1.0, 0.0], [1.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
    // -X
    [[0.0, 0.0], [0.0, 0.0], [0.0, 1.0], [0.0, 1.0]],
    // +Y
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    // -Y
    [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]],
    // +Z
    [[0.0, 1.0], [0.0, 1.0], [1.0, 1.0], [1.0, 1.0]],
    // -Z
    [[0.0, 0.0], [1.0, 0.0], [1.0, 0.0], [0.0, 0.0]],
];

impl FaceDirection {
    /// All six directions in the fixed enumeration order.
    pub const ALL: [FaceDirection; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// The unit step toward the neighbor this face looks at.
    pub fn unit(self) -> IVec3 {
        match self {
            Self::PosX => IVec3::X,
            Self::NegX => IVec3::NEG_X,
            Self::PosY => IVec3::Y,
            Self::NegY => IVec3::NEG_Y,
            Self::PosZ => IVec3::Z,
            Self::NegZ => IVec3::NEG_Z,
        }
    }

    /// The neighbor coordinate one step in this direction.
    pub fn offset(self, pos: IVec3) -> IVec3 {
        pos + self.unit()
    }

    /// The axis this direction varies along (0 = X, 1 = Y, 2 = Z).
    pub fn axis(self) -> usize {
        match self {
            Self::PosX | Self::NegX => 0,
            Self::PosY | Self::NegY => 1,
            Self::PosZ | Self::NegZ => 2,
        }
    }

    /// Whether this direction points toward positive axis values.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::PosX | Self::PosY | Self::PosZ)
    }

    /// The direction index (0–5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The four quad corner offsets for this direction.
    pub fn corners(self) -> &'static [[f32; 3]; 4] {
        &FACE_CORNERS[self.index()]
    }

    /// The four texture coordinates for this direction.
    pub fn uvs(self) -> &'static [[f32; 2]; 4] {
        &FACE_UVS[self.index()]
    }
}
