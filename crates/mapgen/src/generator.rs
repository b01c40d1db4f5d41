//! High-level map generation that selects a strategy and materializes its grid into a [`Map`].

pub(crate) mod fractal;
mod island;
mod pipeline;
mod rings;

#[cfg(test)]
mod test_support;

use crate::config::{GenerationConfig, Strategy};
use crate::error::GenError;
use crate::model::{CellType, Layer, Map, MapCell, MetaData};
use crate::random::{ChaChaRandom, NoiseSource, PerlinNoise, RandomSource};

use island::build_island_grid;
use pipeline::build_layered_grid;

/// Generates maps for one configuration.
///
/// The generator owns its random stream for its whole lifetime. Calling [`MapGenerator::generate`]
/// again continues that stream, so only the first call of a fresh generator is reproducible from
/// the seed alone.
pub struct MapGenerator {
    config: GenerationConfig,
    random: Box<dyn RandomSource>,
    noise: Option<Box<dyn NoiseSource>>,
}

impl MapGenerator {
    /// Seeds a ChaCha stream from `config.seed`. Perlin noise is seeded from that stream on first
    /// use.
    pub fn new(config: GenerationConfig) -> Self {
        let random = Box::new(ChaChaRandom::new(config.seed));
        Self { config, random, noise: None }
    }

    /// Uses caller-supplied sources. Without `noise`, the island strategy seeds Perlin noise from
    /// one draw of `random`.
    pub fn with_sources(
        config: GenerationConfig,
        random: Box<dyn RandomSource>,
        noise: Option<Box<dyn NoiseSource>>,
    ) -> Self {
        Self { config, random, noise }
    }

    pub fn generate(&mut self) -> Result<Map, GenError> {
        let metadata = MetaData::from(&self.config);
        let GenerationConfig { width, height, seed, ref strategy } = self.config;
        tracing::debug!(strategy = strategy.name(), width, height, seed, "generating map");

        let grid = match strategy {
            Strategy::Layered(params) => {
                build_layered_grid(width, height, params, self.random.as_mut())?
            }
            Strategy::Island(params) => {
                let random = &mut self.random;
                let noise = self.noise.get_or_insert_with(|| default_noise(random.as_mut()));
                build_island_grid(width, height, params, &**noise)
            }
        };

        let cells = grid.fill_empty_with(MapCell::new(CellType::Empty)).into_rows()?;
        tracing::debug!(width, height, seed, "map generated");
        Ok(Map { metadata, map_grid: vec![Layer { cells }] })
    }
}

fn default_noise(random: &mut dyn RandomSource) -> Box<dyn NoiseSource> {
    Box::new(PerlinNoise::from_random(random))
}
