//! # Simplex Noise
//!
//! Seeded 2D simplex noise used to drive chunk heightmaps.
//!
//! ## Determinism Guarantee
//!
//! The permutation table is shuffled with ChaCha8 seeded from the
//! `WorldSeed`, so a given seed produces **exactly** the same values on
//! any platform. The only non-reproducible entry point is
//! [`WorldSeed::from_clock`].

use std::time::{SystemTime, UNIX_EPOCH};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// World seed for deterministic generation.
///
/// All procedural generation derives from this seed. It is passed in
/// explicitly; nothing in the workspace reads a global seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a seed from the wall clock.
    ///
    /// Chunks generated from this seed are **not reproducible**: two runs
    /// will almost never agree. Use it only when the caller explicitly
    /// asked for a random world.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self(nanos)
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(0xDEAD_BEEF_CAFE_BABE)
    }
}

impl From<u64> for WorldSeed {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}

/// 12 gradient directions for 2D simplex corners.
const GRADIENTS: [[i8; 2]; 12] = [
    [1, 0], [1, 1], [0, 1], [-1, 1],
    [-1, 0], [-1, -1], [0, -1], [1, -1],
    [1, 0], [0, 1], [-1, 0], [0, -1],
];

/// Seeded permutation table, doubled so lookups never wrap.
#[derive(Clone)]
struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    fn new(seed: WorldSeed) -> Self {
        let mut base: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
        base.shuffle(&mut rng);

        Self {
            perm: std::array::from_fn(|i| base[i & 255]),
        }
    }

    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    #[inline]
    fn gradient(hash: u8) -> [i8; 2] {
        GRADIENTS[usize::from(hash % 12)]
    }
}

/// 2D simplex noise generator.
///
/// Produces smooth, continuous values in the range [-1, 1].
///
/// ```rust,ignore
/// let noise = SimplexNoise::new(WorldSeed::new(42));
/// let value = noise.sample(1.5, 0.3);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
#[derive(Clone)]
pub struct SimplexNoise {
    seed: WorldSeed,
    table: PermutationTable,
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise").field("seed", &self.seed).finish_non_exhaustive()
    }
}

impl SimplexNoise {
    /// Skewing factor for 2D simplex grid, (sqrt(3) - 1) / 2.
    const F2: f64 = 0.366_025_403_784_439;
    /// Unskewing factor for 2D simplex grid, (3 - sqrt(3)) / 6.
    const G2: f64 = 0.211_324_865_405_187;

    /// Creates a new simplex noise generator from a seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self {
            seed,
            table: PermutationTable::new(seed),
        }
    }

    /// Seed this generator was built from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// Samples 2D simplex noise at the given coordinates.
    ///
    /// # Returns
    ///
    /// A value in the range [-1, 1].
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Skew input space onto the simplex grid
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        let unskew = f64::from(i + j) * Self::G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Upper or lower triangle of the skewed cell
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let i1 = i1 as usize;
        let j1 = j1 as usize;

        let gi0 = self.table.get(ii + self.table.get(jj) as usize);
        let gi1 = self.table.get(ii + i1 + self.table.get(jj + j1) as usize);
        let gi2 = self.table.get(ii + 1 + self.table.get(jj + 1) as usize);

        let n0 = corner(x0, y0, gi0);
        let n1 = corner(x1, y1, gi1);
        let n2 = corner(x2, y2, gi2);

        // 70.0 normalizes the sum into [-1, 1]
        70.0 * (n0 + n1 + n2)
    }
}

/// Contribution of one simplex corner.
#[inline]
fn corner(x: f64, y: f64, hash: u8) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let grad = PermutationTable::gradient(hash);
    let t2 = t * t;
    t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
}

#[inline]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) { xi - 1 } else { xi }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let seed = WorldSeed::new(12345);
        let noise1 = SimplexNoise::new(seed);
        let noise2 = SimplexNoise::new(seed);

        for i in 0..100 {
            let x = f64::from(i) * 0.1;
            let y = f64::from(i) * 0.17;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y), "Noise should be deterministic");
        }
    }

    #[test]
    fn test_different_seeds_different_fields() {
        let noise1 = SimplexNoise::new(WorldSeed::new(1));
        let noise2 = SimplexNoise::new(WorldSeed::new(2));

        // A single point can coincide by chance; a row of them cannot.
        let differs = (0..64).any(|i| {
            let x = f64::from(i) * 0.37 + 0.11;
            noise1.sample(x, x * 0.5) != noise2.sample(x, x * 0.5)
        });
        assert!(differs, "Different seeds should produce different noise");
    }

    #[test]
    fn test_range() {
        let noise = SimplexNoise::new(WorldSeed::new(42));

        for i in 0..10_000 {
            let x = f64::from(i) * 0.1 - 500.0;
            let y = f64::from(i) * 0.13 - 650.0;
            let value = noise.sample(x, y);
            assert!((-1.0..=1.0).contains(&value), "Value {value} out of range at ({x}, {y})");
        }
    }

    #[test]
    fn test_continuity() {
        let noise = SimplexNoise::new(WorldSeed::new(42));
        let delta = 0.001;

        let v1 = noise.sample(100.0, 100.0);
        let v2 = noise.sample(100.0 + delta, 100.0);
        let v3 = noise.sample(100.0, 100.0 + delta);

        assert!((v1 - v2).abs() < 0.01, "Noise should be continuous along x");
        assert!((v1 - v3).abs() < 0.01, "Noise should be continuous along y");
    }

    #[test]
    fn test_lattice_origin_is_zero() {
        // The origin is a simplex vertex, where the field is always zero.
        let noise = SimplexNoise::new(WorldSeed::new(7));
        assert_eq!(noise.sample(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_permutation_is_a_permutation() {
        let table = PermutationTable::new(WorldSeed::new(99));
        let mut seen = [false; 256];
        for i in 0..256 {
            seen[table.get(i) as usize] = true;
            assert_eq!(table.get(i), table.get(i + 256), "Table must be doubled");
        }
        assert!(seen.iter().all(|&s| s), "Every byte must appear exactly once");
    }

    #[test]
    fn test_seed_roundtrip() {
        let seed = WorldSeed::from(42);
        assert_eq!(seed.value(), 42);
        assert_eq!(SimplexNoise::new(seed).seed(), seed);
    }
}
