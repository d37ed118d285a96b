//! # Generator Configuration
//!
//! Chunk dimensions and generation constants, loaded once from TOML.
//!
//! ```toml
//! size = 16
//! height = 32
//! noise_scale = 0.1
//! height_divisor = 10.0
//! seed = 1234
//! texture_atlas = "atlas.png"
//! ```
//!
//! Every key is optional. Omitting `seed` selects a wall-clock seed, which
//! makes the generated chunks non-reproducible.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::noise::WorldSeed;

/// Extent of a chunk: `size × height × size` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkDimensions {
    size: u32,
    height: u32,
}

impl ChunkDimensions {
    /// Default x/z extent.
    pub const DEFAULT_SIZE: u32 = 16;
    /// Default y extent.
    pub const DEFAULT_HEIGHT: u32 = 32;

    /// Largest cell count whose worst-case mesh (6 faces × 6 indices per
    /// cell) can still be addressed with `u32` indices.
    pub const MAX_VOLUME: u64 = u32::MAX as u64 / 36;

    /// Validates and creates chunk dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] if either extent is zero and
    /// [`ConfigError::TooLarge`] if the volume exceeds [`Self::MAX_VOLUME`].
    pub fn new(size: u32, height: u32) -> ConfigResult<Self> {
        if size == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { size, height });
        }
        let volume = u64::from(size) * u64::from(size) * u64::from(height);
        if volume > Self::MAX_VOLUME {
            return Err(ConfigError::TooLarge { size, height });
        }
        Ok(Self { size, height })
    }

    /// X/Z extent in cells.
    #[inline]
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Y extent in cells.
    #[inline]
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Number of (x, z) columns.
    #[inline]
    #[must_use]
    pub const fn columns(self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub const fn volume(self) -> usize {
        self.columns() * self.height as usize
    }
}

impl Default for ChunkDimensions {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// Configuration for a chunk generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// X/Z extent of a chunk in cells.
    pub size: u32,
    /// Y extent of a chunk in cells.
    pub height: u32,
    /// Scale applied to column coordinates before sampling noise.
    pub noise_scale: f64,
    /// Heightmap values are divided by this before truncation to a layer count.
    pub height_divisor: f32,
    /// Explicit world seed. `None` means a wall-clock seed.
    pub seed: Option<u64>,
    /// Texture atlas the renderer should pair chunk meshes with.
    pub texture_atlas: String,
}

impl GeneratorConfig {
    /// Default noise coordinate scale.
    pub const DEFAULT_NOISE_SCALE: f64 = 0.1;
    /// Default heightmap divisor.
    pub const DEFAULT_HEIGHT_DIVISOR: f32 = 10.0;
    /// Default texture atlas identifier.
    pub const DEFAULT_TEXTURE_ATLAS: &'static str = "atlas.png";

    /// Default configuration with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: WorldSeed) -> Self {
        Self {
            seed: Some(seed.value()),
            ..Self::default()
        }
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys, or
    /// any validation error from [`GeneratorConfig::validate`].
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`GeneratorConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded generator config from {}", path.display());
        Ok(config)
    }

    /// Checks every constant the generator depends on.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> ConfigResult<()> {
        self.dimensions()?;
        if !self.noise_scale.is_finite() || self.noise_scale == 0.0 {
            return Err(ConfigError::InvalidScale(self.noise_scale));
        }
        if !self.height_divisor.is_finite() || self.height_divisor == 0.0 {
            return Err(ConfigError::InvalidDivisor(self.height_divisor));
        }
        if self.texture_atlas.trim().is_empty() {
            return Err(ConfigError::EmptyTextureAtlas);
        }
        Ok(())
    }

    /// Validated chunk dimensions.
    ///
    /// # Errors
    ///
    /// See [`ChunkDimensions::new`].
    pub fn dimensions(&self) -> ConfigResult<ChunkDimensions> {
        ChunkDimensions::new(self.size, self.height)
    }

    /// The seed to generate with.
    ///
    /// Falls back to [`WorldSeed::from_clock`] when no seed is configured.
    #[must_use]
    pub fn world_seed(&self) -> WorldSeed {
        if let Some(seed) = self.seed {
            return WorldSeed::new(seed);
        }
        let seed = WorldSeed::from_clock();
        tracing::warn!(
            "No seed configured, using clock seed {} (chunks will not be reproducible)",
            seed.value()
        );
        seed
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: ChunkDimensions::DEFAULT_SIZE,
            height: ChunkDimensions::DEFAULT_HEIGHT,
            noise_scale: Self::DEFAULT_NOISE_SCALE,
            height_divisor: Self::DEFAULT_HEIGHT_DIVISOR,
            seed: None,
            texture_atlas: Self::DEFAULT_TEXTURE_ATLAS.to_string(),
        }
    }
}
