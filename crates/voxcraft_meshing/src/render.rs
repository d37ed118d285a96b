//! # Renderer Hand-off
//!
//! Chunks are drawn by an external renderer. This module packages a chunk
//! mesh as raw byte buffers plus the draw parameters and hands them to any
//! [`ChunkRenderer`]. No GPU backend lives in this crate.

use crate::chunk::Chunk;

/// How the index buffer is assembled into primitives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrimitiveTopology {
    /// Every 3 indices form one triangle.
    #[default]
    TriangleList,
}

/// Everything a renderer needs to draw one chunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawSubmission<'a> {
    /// Vertex positions, tightly packed `[f32; 3]`.
    pub positions: &'a [u8],
    /// Texture coordinates, tightly packed `[f32; 2]`.
    pub uvs: &'a [u8],
    /// Indices, `u32` each.
    pub indices: &'a [u8],
    /// Number of indices to draw.
    pub element_count: usize,
    /// Primitive assembly mode.
    pub topology: PrimitiveTopology,
    /// Texture atlas to bind.
    pub texture_atlas: &'a str,
    /// World-space origin of the chunk.
    pub position: [f32; 3],
}

/// Rendering collaborator.
///
/// Implemented by the application's GPU layer.
pub trait ChunkRenderer {
    /// Handle to the uploaded mesh.
    type Handle;
    /// Upload failure.
    type Error;

    /// Uploads one chunk mesh.
    ///
    /// # Errors
    ///
    /// Implementation defined.
    fn upload(&mut self, submission: &DrawSubmission<'_>) -> Result<Self::Handle, Self::Error>;
}

impl Chunk {
    /// Packages this chunk's mesh for a renderer.
    #[must_use]
    pub fn submission(&self) -> DrawSubmission<'_> {
        let mesh = self.mesh();
        DrawSubmission {
            positions: mesh.position_bytes(),
            uvs: mesh.uv_bytes(),
            indices: mesh.index_bytes(),
            element_count: mesh.indices().len(),
            topology: PrimitiveTopology::TriangleList,
            texture_atlas: self.texture_atlas(),
            position: self.position(),
        }
    }

    /// Uploads this chunk to `renderer`.
    ///
    /// # Errors
    ///
    /// Whatever `renderer` returns.
    pub fn upload_to<R: ChunkRenderer>(&self, renderer: &mut R) -> Result<R::Handle, R::Error> {
        renderer.upload(&self.submission())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxcraft_procedural::WorldSeed;

    /// Records submissions instead of drawing them.
    #[derive(Default)]
    struct RecordingRenderer {
        uploads: Vec<(usize, usize, String, [f32; 3])>,
        reject: bool,
    }

    impl ChunkRenderer for RecordingRenderer {
        type Handle = usize;
        type Error = String;

        fn upload(&mut self, submission: &DrawSubmission<'_>) -> Result<usize, String> {
            if self.reject {
                return Err("device lost".to_string());
            }
            self.uploads.push((
                submission.positions.len(),
                submission.element_count,
                submission.texture_atlas.to_string(),
                submission.position,
            ));
            Ok(self.uploads.len() - 1)
        }
    }

    #[test]
    fn test_submission_matches_mesh() {
        let chunk = Chunk::new([16.0, 0.0, -16.0], WorldSeed::new(11));
        let submission = chunk.submission();
        let mesh = chunk.mesh();

        assert_eq!(submission.positions.len(), mesh.vertex_count() * 12);
        assert_eq!(submission.uvs.len(), mesh.vertex_count() * 8);
        assert_eq!(submission.indices.len(), mesh.indices().len() * 4);
        assert_eq!(submission.element_count, mesh.indices().len());
        assert_eq!(submission.topology, PrimitiveTopology::TriangleList);
        assert_eq!(submission.texture_atlas, "atlas.png");
        assert_eq!(submission.position, [16.0, 0.0, -16.0]);
    }

    #[test]
    fn test_upload_forwards_to_renderer() {
        let mut renderer = RecordingRenderer::default();
        let a = Chunk::new([0.0; 3], WorldSeed::new(1));
        let b = Chunk::new([16.0, 0.0, 0.0], WorldSeed::new(1));

        assert_eq!(a.upload_to(&mut renderer), Ok(0));
        assert_eq!(b.upload_to(&mut renderer), Ok(1));

        let (bytes, elements, atlas, position) = &renderer.uploads[1];
        assert_eq!(*bytes, b.mesh().position_bytes().len());
        assert_eq!(*elements, b.mesh().indices().len());
        assert_eq!(atlas, "atlas.png");
        assert_eq!(*position, [16.0, 0.0, 0.0]);
    }

    #[test]
    fn test_upload_error_propagates() {
        let mut renderer = RecordingRenderer {
            reject: true,
            ..RecordingRenderer::default()
        };
        let chunk = Chunk::new([0.0; 3], WorldSeed::new(1));
        assert_eq!(chunk.upload_to(&mut renderer), Err("device lost".to_string()));
        assert!(renderer.uploads.is_empty());
    }
}
