//! # Mesh Building
//!
//! One quad per visible face: 4 positions, 4 UVs, 6 indices. The builder
//! owns the running vertex counter, so index blocks always refer to the
//! vertices emitted for the same cell.

use bytemuck::{Pod, Zeroable};
use voxcraft_procedural::Block;

use crate::face::{Face, FaceSet};

/// Interleaved vertex for renderers that want a single vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ChunkVertex {
    /// Chunk-local position.
    pub position: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

/// Finished mesh data for a chunk.
///
/// Invariants:
/// - `positions.len() == uvs.len()`, a multiple of 4
/// - `indices.len()` is a multiple of 6, one block of 6 per quad
/// - every index is `< positions.len()`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Vertex positions, 4 per face.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Texture coordinates, parallel to [`MeshBuffers::positions`].
    #[inline]
    #[must_use]
    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// Triangle-list indices, 6 per face.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Check if mesh is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of emitted faces (quads).
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position buffer as raw bytes, for vertex buffer upload.
    #[inline]
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// UV buffer as raw bytes.
    #[inline]
    #[must_use]
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as raw bytes (`u32` elements).
    #[inline]
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Positions and UVs zipped into one vertex stream.
    #[must_use]
    pub fn interleaved(&self) -> Vec<ChunkVertex> {
        self.positions
            .iter()
            .zip(&self.uvs)
            .map(|(&position, &uv)| ChunkVertex { position, uv })
            .collect()
    }

    /// Checks every buffer invariant.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let vertices = self.positions.len();
        vertices == self.uvs.len()
            && vertices % 4 == 0
            && self.indices.len() % 6 == 0
            && self.indices.len() / 6 == vertices / 4
            && self.indices.iter().all(|&i| (i as usize) < vertices)
    }

    /// Splits into `(positions, uvs, indices)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<[f32; 3]>, Vec<[f32; 2]>, Vec<u32>) {
        (self.positions, self.uvs, self.indices)
    }
}

/// Appends face quads and their index blocks.
///
/// Faces are emitted with [`MeshBuilder::emit_face`], then the cell's
/// index block with [`MeshBuilder::emit_indices`]. [`MeshBuilder::emit_block`]
/// does both in one step and is what the chunk pipeline uses.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    buffers: MeshBuffers,
    /// Base vertex of the next index block. Never reset.
    index_count: u32,
    /// Vertices emitted since the last index block.
    pending_vertices: usize,
}

impl MeshBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `faces` quads.
    #[must_use]
    pub fn with_capacity(faces: usize) -> Self {
        Self {
            buffers: MeshBuffers {
                positions: Vec::with_capacity(faces * 4),
                uvs: Vec::with_capacity(faces * 4),
                indices: Vec::with_capacity(faces * 6),
            },
            ..Self::default()
        }
    }

    /// Appends the 4 corners and 4 UVs of `face` around `block`.
    pub fn emit_face(&mut self, face: Face, block: &Block) {
        let [bx, by, bz] = block.position().to_f32();
        for [cx, cy, cz] in face.corners() {
            self.buffers.positions.push([bx + cx, by + cy, bz + cz]);
        }
        self.buffers.uvs.extend_from_slice(&Face::UVS);
        self.pending_vertices += 4;
    }

    /// Appends the index block for the `count` faces just emitted.
    ///
    /// Each face gets `[base, base+1, base+2, base+2, base+3, base]`, then
    /// the base advances by 4.
    ///
    /// # Panics
    ///
    /// In debug builds, if exactly `4 * count` vertices were not emitted
    /// since the previous index block.
    pub fn emit_indices(&mut self, count: usize) {
        debug_assert_eq!(
            self.pending_vertices,
            count * 4,
            "emit_indices({count}) after {} new vertices",
            self.pending_vertices
        );

        for _ in 0..count {
            let base = self.index_count;
            self.buffers
                .indices
                .extend(Face::QUAD_INDICES.iter().map(|&i| base + i));
            self.index_count += 4;
        }
        self.pending_vertices = 0;
    }

    /// Emits every face in `faces` for `block`, then its index block.
    ///
    /// Returns the number of faces emitted. An empty set emits nothing.
    pub fn emit_block(&mut self, block: &Block, faces: FaceSet) -> usize {
        if faces.is_empty() {
            return 0;
        }
        for face in faces.iter() {
            self.emit_face(face, block);
        }
        let count = faces.len();
        self.emit_indices(count);
        count
    }

    /// Number of faces emitted so far.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.buffers.face_count()
    }

    /// Finishes the mesh.
    #[must_use]
    pub fn finish(self) -> MeshBuffers {
        debug_assert_eq!(self.pending_vertices, 0, "faces emitted without indices");
        self.buffers
    }
}
