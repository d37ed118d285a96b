//! # Heightmaps
//!
//! One scalar per (x, z) column of a chunk. A [`HeightSource`] produces the
//! values; [`Heightmap::sample`] visits every column exactly once, `x`
//! outer and `z` inner.

use ndshape::{RuntimeShape, Shape};

use crate::error::{ConfigError, ConfigResult};
use crate::noise::{SimplexNoise, WorldSeed};

/// Anything that can produce a height for a local column.
pub trait HeightSource {
    /// Height value for column `(x, z)`.
    fn height_at(&self, x: i32, z: i32) -> f32;
}

/// Simplex-noise height field.
///
/// Samples noise at `(x * scale, z * scale)` and maps the raw `[-1, 1]`
/// value into the `[0, 256]` pixel range (`noise * 128 + 128`).
#[derive(Clone, Debug)]
pub struct NoiseField {
    noise: SimplexNoise,
    scale: f64,
}

impl NoiseField {
    /// Default coordinate scale.
    pub const DEFAULT_SCALE: f64 = 0.1;

    /// Creates a field with the default scale.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self::with_scale(seed, Self::DEFAULT_SCALE)
    }

    /// Creates a field with a custom coordinate scale.
    #[must_use]
    pub fn with_scale(seed: WorldSeed, scale: f64) -> Self {
        Self {
            noise: SimplexNoise::new(seed),
            scale,
        }
    }

    /// Seed the field was built from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.noise.seed()
    }

    /// Coordinate scale.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Height for column `(x, z)`, in `[0, 256]`.
    #[must_use]
    pub fn sample(&self, x: i32, z: i32) -> f32 {
        let raw = self
            .noise
            .sample(f64::from(x) * self.scale, f64::from(z) * self.scale);
        (raw * 128.0 + 128.0) as f32
    }
}

impl HeightSource for NoiseField {
    #[inline]
    fn height_at(&self, x: i32, z: i32) -> f32 {
        self.sample(x, z)
    }
}

/// Uniform height everywhere. Produces superflat chunks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatField(pub f32);

impl HeightSource for FlatField {
    #[inline]
    fn height_at(&self, _x: i32, _z: i32) -> f32 {
        self.0
    }
}

/// `size × size` column heights for one chunk.
#[derive(Clone, Debug, PartialEq)]
pub struct Heightmap {
    size: u32,
    /// Indexed by `[z, x]` linearization, i.e. `x * size + z`.
    values: Vec<f32>,
}

impl Heightmap {
    /// Samples every column of a `size × size` chunk, `x` outer, `z` inner.
    #[must_use]
    pub fn sample(source: &impl HeightSource, size: u32) -> Self {
        let mut values = Vec::with_capacity(size as usize * size as usize);
        for x in 0..size {
            for z in 0..size {
                values.push(source.height_at(x as i32, z as i32));
            }
        }
        tracing::trace!("Sampled {size}x{size} heightmap");
        Self { size, values }
    }

    /// Wraps precomputed heights, given in `x` outer, `z` inner order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HeightmapSize`] if `values.len() != size * size`.
    pub fn from_values(size: u32, values: Vec<f32>) -> ConfigResult<Self> {
        let expected = size as usize * size as usize;
        if values.len() != expected {
            return Err(ConfigError::HeightmapSize {
                size,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { size, values })
    }

    /// Column extent.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Raw height of column `(x, z)`, or `None` outside the map.
    #[must_use]
    pub fn get(&self, x: u32, z: u32) -> Option<f32> {
        if x >= self.size || z >= self.size {
            return None;
        }
        let index = self.shape().linearize([z, x]) as usize;
        self.values.get(index).copied()
    }

    /// Solid layer count of column `(x, z)`: `height / divisor`, truncated
    /// toward zero. May be zero or negative.
    #[must_use]
    pub fn column_height(&self, x: u32, z: u32, divisor: f32) -> Option<i32> {
        self.get(x, z).map(|height| (height / divisor) as i32)
    }

    /// All heights in sampling order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    fn shape(&self) -> RuntimeShape<u32, 2> {
        RuntimeShape::<u32, 2>::new([self.size, self.size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the order columns are visited in.
    struct Recorder(std::cell::RefCell<Vec<(i32, i32)>>);

    impl HeightSource for Recorder {
        fn height_at(&self, x: i32, z: i32) -> f32 {
            self.0.borrow_mut().push((x, z));
            (x * 100 + z) as f32
        }
    }

    #[test]
    fn test_sampling_order_x_outer_z_inner() {
        let recorder = Recorder(std::cell::RefCell::new(Vec::new()));
        let map = Heightmap::sample(&recorder, 3);

        let visited = recorder.0.into_inner();
        assert_eq!(visited.len(), 9, "Every column sampled exactly once");
        assert_eq!(&visited[..4], &[(0, 0), (0, 1), (0, 2), (1, 0)]);

        assert_eq!(map.get(2, 1), Some(201.0));
        assert_eq!(map.get(1, 2), Some(102.0));
        assert_eq!(map.get(3, 0), None);
    }

    #[test]
    fn test_column_height_truncates() {
        let map = Heightmap::from_values(2, vec![20.0, 29.9, 9.9, -5.0]).unwrap();
        assert_eq!(map.column_height(0, 0, 10.0), Some(2));
        assert_eq!(map.column_height(0, 1, 10.0), Some(2));
        assert_eq!(map.column_height(1, 0, 10.0), Some(0));
        assert_eq!(map.column_height(1, 1, 10.0), Some(0));
    }

    #[test]
    fn test_from_values_size_mismatch() {
        let err = Heightmap::from_values(2, vec![1.0; 3]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::HeightmapSize { size: 2, expected: 4, actual: 3 }
        );
    }

    #[test]
    fn test_noise_field_pixel_range() {
        let field = NoiseField::new(WorldSeed::new(42));
        for x in -50..50 {
            for z in -50..50 {
                let h = field.sample(x, z);
                assert!((0.0..=256.0).contains(&h), "Height {h} out of pixel range");
            }
        }
    }

    #[test]
    fn test_noise_field_deterministic() {
        let a = Heightmap::sample(&NoiseField::new(WorldSeed::new(9)), 16);
        let b = Heightmap::sample(&NoiseField::new(WorldSeed::new(9)), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_flat_field() {
        let map = Heightmap::sample(&FlatField(20.0), 4);
        assert!(map.values().iter().all(|&h| h == 20.0));
        assert_eq!(map.size(), 4);
    }
}
