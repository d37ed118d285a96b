//! Face culling.
//!
//! A face of a solid block is visible when the neighbor it looks at is air
//! or lies outside the chunk. Chunk edges always count as open air; this
//! crate never looks into neighboring chunks.

use voxcraft_procedural::{Block, VoxelGrid};

use crate::face::{Face, FaceSet};

/// Faces of `block` that border air or the grid edge.
///
/// Air blocks have no faces.
#[must_use]
pub fn visible_faces(grid: &VoxelGrid, block: &Block) -> FaceSet {
    if block.is_air() {
        return FaceSet::EMPTY;
    }

    let position = block.position();
    let mut faces = FaceSet::EMPTY;
    for face in Face::ALL {
        let open = match grid.neighbor(position, face.offset()) {
            Some(neighbor) => neighbor.is_air(),
            None => true,
        };
        if open {
            faces.insert(face);
        }
    }
    faces
}

/// Total number of visible faces in a grid.
#[must_use]
pub fn count_visible_faces(grid: &VoxelGrid) -> usize {
    grid.iter().map(|block| visible_faces(grid, block).len()).sum()
}
