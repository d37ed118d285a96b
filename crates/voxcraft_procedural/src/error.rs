//! # Generation Error Types
//!
//! Everything that can go wrong happens while a generator is being
//! configured. Once a configuration validates, generation is total.

use thiserror::Error;

/// Errors raised while building or loading a generator configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A chunk dimension was zero.
    #[error("chunk dimensions must be non-zero: size {size}, height {height}")]
    ZeroDimension {
        /// Requested x/z extent.
        size: u32,
        /// Requested y extent.
        height: u32,
    },

    /// The worst-case mesh of a chunk this large would overflow `u32` indices.
    #[error("chunk of {size}x{height}x{size} cells exceeds the u32 index range")]
    TooLarge {
        /// Requested x/z extent.
        size: u32,
        /// Requested y extent.
        height: u32,
    },

    /// Noise scale was zero, negative infinity, NaN, etc.
    #[error("noise scale must be finite and non-zero, got {0}")]
    InvalidScale(f64),

    /// Height divisor was zero or not finite.
    #[error("height divisor must be finite and non-zero, got {0}")]
    InvalidDivisor(f32),

    /// The texture atlas identifier was empty.
    #[error("texture atlas identifier must not be empty")]
    EmptyTextureAtlas,

    /// A precomputed heightmap did not have `size * size` entries.
    #[error("heightmap of size {size} needs {expected} values, got {actual}")]
    HeightmapSize {
        /// Column extent of the heightmap.
        size: u32,
        /// Number of values required.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// The configuration text was not valid TOML for this schema.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {reason}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
