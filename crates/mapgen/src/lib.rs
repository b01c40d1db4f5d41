//! Seeded procedural tile-map generation.
//!
//! [`generate_map`] turns a [`GenerationConfig`] into a [`Map`] using either the layered ring
//! strategy (grass, ocean, beach, mountains) or the noise-driven island strategy.

pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod random;

mod generator;
mod seed;

pub use config::{
    GenerationConfig, GenerationConfigBuilder, IslandParams, LayeredParams, MAX_DIMENSION,
    MAX_FRACTAL_GENERATIONS, MountainParams, RingLayeringParams, Strategy,
};
pub use error::GenError;
pub use generator::MapGenerator;
pub use generator::fractal::{Direction, draw_directions, generate_fractal};
pub use grid::{Coord, Grid};
pub use model::{CellType, Layer, Map, MapCell, MetaData};
pub use random::{ChaChaRandom, NoiseSource, PerlinNoise, RandomSource};
pub use seed::generate_runtime_seed;

pub fn generate_map(config: GenerationConfig) -> Result<Map, GenError> {
    MapGenerator::new(config).generate()
}

#[cfg(test)]
mod tests {
    use super::{GenerationConfig, MapGenerator, generate_map};

    #[test]
    fn generate_map_matches_map_generator_output() {
        let config = GenerationConfig::builder()
            .width(Some(24))
            .height(Some(18))
            .seed(Some(123))
            .build()
            .expect("valid config");

        let from_helper = generate_map(config.clone()).expect("helper generates");
        let from_generator = MapGenerator::new(config).generate().expect("generator generates");

        assert_eq!(from_helper, from_generator);
    }
}
