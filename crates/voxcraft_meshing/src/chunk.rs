//! # Chunk Generation
//!
//! Runs the whole pipeline for one chunk:
//!
//! ```text
//! HeightSource -> Heightmap -> VoxelGrid -> visible faces -> MeshBuffers
//! ```
//!
//! A chunk is generated once and never mutated afterward.

use voxcraft_procedural::{
    ChunkDimensions, ConfigResult, GeneratorConfig, HeightSource, Heightmap, NoiseField,
    VoxelGrid, WorldSeed,
};

use crate::culling::{count_visible_faces, visible_faces};
use crate::mesh::{MeshBuffers, MeshBuilder};

/// Meshes a classified grid.
///
/// Cells are visited in traversal order (`x` outer, `z` middle, `y` inner)
/// and each cell's visible faces are emitted together with its index block.
#[must_use]
pub fn mesh_grid(grid: &VoxelGrid) -> MeshBuffers {
    let mut builder = MeshBuilder::with_capacity(count_visible_faces(grid));
    for block in grid {
        builder.emit_block(block, visible_faces(grid, block));
    }
    builder.finish()
}

/// One generated chunk: heightmap, grid and mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    position: [f32; 3],
    heightmap: Heightmap,
    grid: VoxelGrid,
    mesh: MeshBuffers,
    texture_atlas: String,
}

impl Chunk {
    /// Generates a default-sized chunk from `seed`.
    ///
    /// Uses the default dimensions, noise scale, height divisor and atlas.
    #[must_use]
    pub fn new(position: [f32; 3], seed: WorldSeed) -> Self {
        ChunkGenerator::with_seed(seed).generate(position)
    }

    /// World-space origin.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> [f32; 3] {
        self.position
    }

    /// The heightmap this chunk was classified from.
    #[inline]
    #[must_use]
    pub const fn heightmap(&self) -> &Heightmap {
        &self.heightmap
    }

    /// The voxel grid.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// The face-culled mesh.
    #[inline]
    #[must_use]
    pub const fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    /// Texture atlas the mesh UVs refer to.
    #[inline]
    #[must_use]
    pub fn texture_atlas(&self) -> &str {
        &self.texture_atlas
    }
}

/// Chunk generator holding a validated configuration and a seeded noise field.
#[derive(Clone, Debug)]
pub struct ChunkGenerator {
    dimensions: ChunkDimensions,
    height_divisor: f32,
    texture_atlas: String,
    field: NoiseField,
}

impl ChunkGenerator {
    /// Creates a generator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error of `config`.
    pub fn new(config: &GeneratorConfig) -> ConfigResult<Self> {
        config.validate()?;
        let dimensions = config.dimensions()?;
        let seed = config.world_seed();

        tracing::info!(
            "Chunk generator ready: {}x{}x{} cells, seed {}, scale {}, divisor {}",
            dimensions.size(),
            dimensions.height(),
            dimensions.size(),
            seed.value(),
            config.noise_scale,
            config.height_divisor
        );

        Ok(Self {
            dimensions,
            height_divisor: config.height_divisor,
            texture_atlas: config.texture_atlas.clone(),
            field: NoiseField::with_scale(seed, config.noise_scale),
        })
    }

    /// Default generator with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: WorldSeed) -> Self {
        Self {
            dimensions: ChunkDimensions::default(),
            height_divisor: GeneratorConfig::DEFAULT_HEIGHT_DIVISOR,
            texture_atlas: GeneratorConfig::DEFAULT_TEXTURE_ATLAS.to_string(),
            field: NoiseField::new(seed),
        }
    }

    /// Seed of the noise field.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.field.seed()
    }

    /// Chunk extent.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> ChunkDimensions {
        self.dimensions
    }

    /// Generates a chunk from the seeded noise field.
    #[must_use]
    pub fn generate(&self, position: [f32; 3]) -> Chunk {
        self.generate_from(&self.field, position)
    }

    /// Generates a chunk from any height source.
    #[must_use]
    pub fn generate_from(&self, source: &impl HeightSource, position: [f32; 3]) -> Chunk {
        let heightmap = Heightmap::sample(source, self.dimensions.size());
        let grid = VoxelGrid::classify(&heightmap, self.dimensions.height(), self.height_divisor);
        let mesh = mesh_grid(&grid);

        tracing::debug!(
            "Generated chunk at {:?}: {} solid cells, {} faces, {} vertices, {} indices",
            position,
            grid.solid_count(),
            mesh.face_count(),
            mesh.vertex_count(),
            mesh.indices().len()
        );

        Chunk {
            position,
            heightmap,
            grid,
            mesh,
            texture_atlas: self.texture_atlas.clone(),
        }
    }
}
