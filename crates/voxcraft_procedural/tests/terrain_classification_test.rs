//! # Terrain Classification Tests
//!
//! Noise-driven heightmaps classified into full voxel grids.

use voxcraft_procedural::{
    BlockType, GeneratorConfig, Heightmap, NoiseField, VoxelGrid, WorldSeed,
};

/// Test: layer 0 is bedrock in every column, for many seeds.
#[test]
fn test_bedrock_floor_everywhere() {
    for seed in 0..20 {
        let map = Heightmap::sample(&NoiseField::new(WorldSeed::new(seed)), 16);
        let grid = VoxelGrid::classify(&map, 32, 10.0);

        for x in 0..16 {
            for z in 0..16 {
                let floor = grid.block_at(x, 0, z).unwrap();
                assert_eq!(floor.kind(), BlockType::Bedrock, "seed {seed}, column ({x}, {z})");
            }
        }
    }
}

/// Test: every column has exactly the layers its height asks for.
#[test]
fn test_columns_follow_heightmap() {
    let map = Heightmap::sample(&NoiseField::new(WorldSeed::new(42)), 16);
    let grid = VoxelGrid::classify(&map, 32, 10.0);

    for x in 0..16 {
        for z in 0..16 {
            let column_height = map.column_height(x, z, 10.0).unwrap();
            let column = grid.column(x, z).unwrap();

            let grass: Vec<u32> = column
                .iter()
                .filter(|b| b.kind() == BlockType::Grass)
                .map(|b| b.position().y)
                .collect();

            if column_height >= 2 && column_height <= 32 {
                let surface = (column_height - 1) as u32;
                assert_eq!(grass, vec![surface], "column ({x}, {z})");
                assert!(column[1..surface as usize]
                    .iter()
                    .all(|b| b.kind() == BlockType::Dirt));
                assert!(column[surface as usize + 1..].iter().all(|b| b.is_air()));
            } else if column_height <= 1 {
                assert!(grass.is_empty(), "column ({x}, {z}) should be bedrock only");
                assert!(column[1..].iter().all(|b| b.is_air()));
            }
        }
    }
}

/// Test: pixel-range noise stays inside a 32-tall chunk with the default divisor.
#[test]
fn test_default_config_fits_default_height() {
    let config = GeneratorConfig::with_seed(WorldSeed::new(7));
    let dims = config.dimensions().unwrap();
    let field = NoiseField::with_scale(config.world_seed(), config.noise_scale);
    let map = Heightmap::sample(&field, dims.size());

    for x in 0..dims.size() {
        for z in 0..dims.size() {
            let h = map.column_height(x, z, config.height_divisor).unwrap();
            assert!((0..=25).contains(&h), "column height {h} outside 0..=25");
        }
    }
}

/// Test: same seed, same grid; different seed, different grid.
#[test]
fn test_grid_determinism() {
    let build = |seed| {
        let map = Heightmap::sample(&NoiseField::new(WorldSeed::new(seed)), 16);
        VoxelGrid::classify(&map, 32, 10.0)
    };

    assert_eq!(build(1234), build(1234));
    assert_ne!(build(1234), build(4321));
}
