//! # VOXCRAFT Procedural Generation
//!
//! Deterministic terrain for fixed-size voxel chunks.
//!
//! ## Pipeline
//!
//! 1. A [`HeightSource`] (normally a seeded [`NoiseField`]) yields one
//!    height per column.
//! 2. [`Heightmap::sample`] collects those heights for a whole chunk.
//! 3. [`VoxelGrid::classify`] turns each column into bedrock, dirt, grass
//!    and air layers.
//!
//! Meshing lives in `voxcraft_meshing`; this crate has no rendering code.
//!
//! ## Example
//!
//! ```rust,ignore
//! use voxcraft_procedural::{Heightmap, NoiseField, VoxelGrid, WorldSeed};
//!
//! let field = NoiseField::new(WorldSeed::new(12345));
//! let heightmap = Heightmap::sample(&field, 16);
//! let grid = VoxelGrid::classify(&heightmap, 32, 10.0);
//!
//! // Layer 0 is always bedrock
//! assert!(!grid.block_at(0, 0, 0).unwrap().is_air());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod block;
pub mod config;
pub mod error;
pub mod grid;
pub mod heightmap;
pub mod noise;

pub use block::{Block, BlockType, LocalPos};
pub use config::{ChunkDimensions, GeneratorConfig};
pub use error::{ConfigError, ConfigResult};
pub use grid::{classify_layer, VoxelGrid};
pub use heightmap::{FlatField, HeightSource, Heightmap, NoiseField};
pub use noise::{SimplexNoise, WorldSeed};
