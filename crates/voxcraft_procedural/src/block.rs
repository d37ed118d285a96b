//! Block types and positioned blocks.

/// Material of a single cell.
///
/// `Air` is the only empty variant; every other variant is solid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockType {
    /// Empty space.
    #[default]
    Air = 0,
    /// Indestructible floor, always at layer 0.
    Bedrock = 1,
    /// Subsurface fill below the grass layer.
    Dirt = 2,
    /// Top solid layer of a column.
    Grass = 3,
}

impl BlockType {
    /// Returns true if this is an air block.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Returns true if this block occupies its cell.
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        !self.is_air()
    }
}

/// Integer cell coordinates local to a chunk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalPos {
    /// X (0..size).
    pub x: u32,
    /// Y (0..height).
    pub y: u32,
    /// Z (0..size).
    pub z: u32,
}

impl LocalPos {
    /// Creates a local position.
    #[inline]
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Applies a unit offset, returning `None` if any axis would go below zero.
    ///
    /// Upper bounds are the grid's business.
    #[inline]
    #[must_use]
    pub fn offset(self, [dx, dy, dz]: [i32; 3]) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
            z: self.z.checked_add_signed(dz)?,
        })
    }

    /// Position as float coordinates, for vertex emission.
    #[inline]
    #[must_use]
    pub fn to_f32(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

/// A positioned block. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    position: LocalPos,
    kind: BlockType,
}

impl Block {
    /// Creates a block at a local position.
    #[inline]
    #[must_use]
    pub const fn new(position: LocalPos, kind: BlockType) -> Self {
        Self { position, kind }
    }

    /// Local position within the owning chunk.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> LocalPos {
        self.position
    }

    /// Block material.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> BlockType {
        self.kind
    }

    /// Shorthand for `self.kind().is_air()`.
    #[inline]
    #[must_use]
    pub const fn is_air(&self) -> bool {
        self.kind.is_air()
    }
}
