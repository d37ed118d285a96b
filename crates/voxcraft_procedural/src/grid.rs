//! # Voxel Grid
//!
//! Dense `size × height × size` array of blocks for one chunk.
//!
//! Storage is one flat buffer. The linear index is produced by an
//! `ndshape` shape over `[y, z, x]`, so `y` varies fastest and the buffer
//! order is exactly the canonical traversal order (`x` outer, `z` middle,
//! `y` inner). A column is therefore a contiguous slice.

use ndshape::{RuntimeShape, Shape};

use crate::block::{Block, BlockType, LocalPos};
use crate::heightmap::Heightmap;

/// Block type for layer `y` of a column with `column_height` solid layers.
///
/// Bedrock wins at layer 0 regardless of the column height, so even an
/// empty column (`column_height <= 0`) keeps a bedrock floor.
#[inline]
#[must_use]
pub fn classify_layer(y: u32, column_height: i32) -> BlockType {
    let surface = i64::from(column_height) - 1;
    let y = i64::from(y);
    if y == 0 {
        BlockType::Bedrock
    } else if y == surface {
        BlockType::Grass
    } else if y < surface {
        BlockType::Dirt
    } else {
        BlockType::Air
    }
}

/// Every cell of one chunk. All cells exist, air included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    size: u32,
    height: u32,
    blocks: Vec<Block>,
}

impl VoxelGrid {
    /// Classifies a heightmap into a grid `height` cells tall.
    ///
    /// The grid is `heightmap.size()` cells wide and deep. Each column gets
    /// `trunc(heightmap[x, z] / divisor)` solid layers, see [`classify_layer`].
    #[must_use]
    pub fn classify(heightmap: &Heightmap, height: u32, divisor: f32) -> Self {
        let size = heightmap.size();
        let mut blocks = Vec::with_capacity(size as usize * size as usize * height as usize);

        for x in 0..size {
            for z in 0..size {
                let column_height = heightmap.column_height(x, z, divisor).unwrap_or(0);
                for y in 0..height {
                    let kind = classify_layer(y, column_height);
                    blocks.push(Block::new(LocalPos::new(x, y, z), kind));
                }
            }
        }

        Self { size, height, blocks }
    }

    /// X/Z extent.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Y extent.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Extents as `[x, y, z]`.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> [u32; 3] {
        [self.size, self.height, self.size]
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True for a grid with a zero extent.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True if `pos` lies inside the grid.
    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: LocalPos) -> bool {
        pos.x < self.size && pos.y < self.height && pos.z < self.size
    }

    /// Block at `pos`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: LocalPos) -> Option<&Block> {
        if !self.contains(pos) {
            return None;
        }
        self.blocks.get(self.index(pos))
    }

    /// Block at `(x, y, z)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn block_at(&self, x: u32, y: u32, z: u32) -> Option<&Block> {
        self.get(LocalPos::new(x, y, z))
    }

    /// Block one unit `offset` away from `pos`, or `None` past any edge.
    #[inline]
    #[must_use]
    pub fn neighbor(&self, pos: LocalPos, offset: [i32; 3]) -> Option<&Block> {
        self.get(pos.offset(offset)?)
    }

    /// The `height` blocks of column `(x, z)`, bottom first.
    #[must_use]
    pub fn column(&self, x: u32, z: u32) -> Option<&[Block]> {
        if x >= self.size || z >= self.size {
            return None;
        }
        let start = self.index(LocalPos::new(x, 0, z));
        self.blocks.get(start..start + self.height as usize)
    }

    /// All blocks in traversal order: `x` outer, `z` middle, `y` inner.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Number of non-air cells.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|block| !block.is_air()).count()
    }

    #[inline]
    fn index(&self, pos: LocalPos) -> usize {
        let shape = RuntimeShape::<u32, 3>::new([self.height, self.size, self.size]);
        shape.linearize([pos.y, pos.z, pos.x]) as usize
    }
}

impl<'a> IntoIterator for &'a VoxelGrid {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
