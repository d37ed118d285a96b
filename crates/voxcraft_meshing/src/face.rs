//! # Cube Faces
//!
//! The six faces of a unit cube centred on its block position, each with a
//! fixed neighbor offset, four corner offsets and the shared UV quad. All
//! geometry comes from one static table indexed by the face discriminant.

use std::fmt;

/// One face of a block.
///
/// Declaration order is emission order: `Left, Right, Top, Bottom, Front, Back`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    /// -X
    Left = 0,
    /// +X
    Right = 1,
    /// +Y
    Top = 2,
    /// -Y
    Bottom = 3,
    /// +Z
    Front = 4,
    /// -Z
    Back = 5,
}

/// Neighbor offset and quad corners of one face.
struct FaceGeometry {
    offset: [i32; 3],
    corners: [[f32; 3]; 4],
}

static FACE_TABLE: [FaceGeometry; 6] = [
    // Left
    FaceGeometry {
        offset: [-1, 0, 0],
        corners: [[-0.5, 0.5, -0.5], [-0.5, 0.5, 0.5], [-0.5, -0.5, 0.5], [-0.5, -0.5, -0.5]],
    },
    // Right
    FaceGeometry {
        offset: [1, 0, 0],
        corners: [[0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5]],
    },
    // Top
    FaceGeometry {
        offset: [0, 1, 0],
        corners: [[-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
    },
    // Bottom
    FaceGeometry {
        offset: [0, -1, 0],
        corners: [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [-0.5, -0.5, -0.5]],
    },
    // Front
    FaceGeometry {
        offset: [0, 0, 1],
        corners: [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
    },
    // Back
    FaceGeometry {
        offset: [0, 0, -1],
        corners: [[0.5, 0.5, -0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5]],
    },
];

impl Face {
    /// Every face, in emission order.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::Front,
        Self::Back,
    ];

    /// Texture coordinates of the four corners, identical for every face.
    pub const UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    /// Local triangle list for one quad: `(0, 1, 2)` and `(2, 3, 0)`.
    pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

    #[inline]
    fn geometry(self) -> &'static FaceGeometry {
        &FACE_TABLE[self as usize]
    }

    /// Unit offset to the neighbor this face looks at.
    #[inline]
    #[must_use]
    pub fn offset(self) -> [i32; 3] {
        self.geometry().offset
    }

    /// Corner offsets relative to the block position.
    #[inline]
    #[must_use]
    pub fn corners(self) -> [[f32; 3]; 4] {
        self.geometry().corners
    }

    /// Bit used by [`FaceSet`].
    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Front => "front",
            Self::Back => "back",
        };
        f.write_str(name)
    }
}

/// A set of faces. Iterates in emission order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    /// No faces.
    pub const EMPTY: Self = Self(0);
    /// All six faces.
    pub const ALL: Self = Self(0b11_1111);

    /// Adds a face.
    #[inline]
    pub fn insert(&mut self, face: Face) {
        self.0 |= face.bit();
    }

    /// True if `face` is in the set.
    #[inline]
    #[must_use]
    pub const fn contains(self, face: Face) -> bool {
        self.0 & face.bit() != 0
    }

    /// Number of faces in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no face is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Faces in emission order.
    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |&face| self.contains(face))
    }
}

impl FromIterator<Face> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for face in iter {
            set.insert(face);
        }
        set
    }
}

impl fmt::Debug for FaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
