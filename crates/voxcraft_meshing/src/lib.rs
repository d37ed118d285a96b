//! # VOXCRAFT Meshing
//!
//! Turns classified voxel grids into face-culled triangle meshes.
//!
//! ## Pipeline
//!
//! 1. [`ChunkGenerator`] samples a heightmap and classifies a grid
//!    (see `voxcraft_procedural`).
//! 2. [`visible_faces`] keeps only faces that border air or the chunk edge.
//! 3. [`MeshBuilder`] appends 4 vertices and 6 indices per visible face.
//! 4. [`Chunk::submission`] exposes the buffers to a [`ChunkRenderer`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use voxcraft_meshing::Chunk;
//! use voxcraft_procedural::WorldSeed;
//!
//! let chunk = Chunk::new([0.0, 0.0, 0.0], WorldSeed::new(12345));
//! let mesh = chunk.mesh();
//! assert_eq!(mesh.positions().len(), mesh.uvs().len());
//! assert_eq!(mesh.indices().len() / 6, mesh.positions().len() / 4);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod chunk;
pub mod culling;
pub mod face;
pub mod mesh;
pub mod render;

pub use chunk::{mesh_grid, Chunk, ChunkGenerator};
pub use culling::{count_visible_faces, visible_faces};
pub use face::{Face, FaceSet};
pub use mesh::{ChunkVertex, MeshBuffers, MeshBuilder};
pub use render::{ChunkRenderer, DrawSubmission, PrimitiveTopology};
