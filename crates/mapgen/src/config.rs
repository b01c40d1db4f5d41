//! Generation configuration and per-strategy tuning.
//!
//! Every field of [`GenerationConfig`] can be left out; [`GenerationConfigBuilder::build`] fills
//! the gaps from documented defaults once, at construction time.

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::generator::fractal::Direction;
use crate::seed::generate_runtime_seed;

pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 100;

/// Largest accepted side; coordinates are signed 32-bit.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Largest accepted mountain fractal depth. The walk has `axiom.len() * 2^generations` steps.
pub const MAX_FRACTAL_GENERATIONS: u32 = 24;

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub strategy: Strategy,
}

impl GenerationConfig {
    pub fn builder() -> GenerationConfigBuilder {
        GenerationConfigBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct GenerationConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    seed: Option<u64>,
    strategy: Option<Strategy>,
}

impl GenerationConfigBuilder {
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Option<usize>) -> Self {
        self.height = height;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn strategy(mut self, strategy: Option<Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Resolves defaults: 100x100, a fresh runtime seed, and the layered strategy.
    pub fn build(self) -> Result<GenerationConfig, GenError> {
        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        if width == 0 || height == 0 {
            return Err(GenError::InvalidDimensions { width, height });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION || width.checked_mul(height).is_none() {
            return Err(GenError::DimensionsTooLarge { width, height });
        }
        let strategy = self.strategy.unwrap_or_default();
        strategy.validate()?;
        Ok(GenerationConfig {
            width,
            height,
            seed: self.seed.unwrap_or_else(generate_runtime_seed),
            strategy,
        })
    }
}

/// Which generation pipeline a [`crate::MapGenerator`] runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Strategy {
    /// Grass base with ocean, beach, and mountain layers merged on top.
    Layered(LayeredParams),
    /// Single pass of noise sampling classified into sea and grass.
    Island(IslandParams),
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Layered(LayeredParams::default())
    }
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Layered(_) => "layered",
            Self::Island(_) => "island",
        }
    }

    fn validate(&self) -> Result<(), GenError> {
        match self {
            Self::Layered(LayeredParams { mountains: Some(mountains), .. })
                if mountains.generations > MAX_FRACTAL_GENERATIONS =>
            {
                Err(GenError::TooManyGenerations {
                    generations: mountains.generations,
                    max: MAX_FRACTAL_GENERATIONS,
                })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayeredParams {
    pub ocean: RingLayeringParams,
    pub beach: RingLayeringParams,
    /// `None` skips the mountain layer.
    pub mountains: Option<MountainParams>,
}

impl Default for LayeredParams {
    fn default() -> Self {
        Self {
            ocean: RingLayeringParams::new(2, vec![0.6, 0.3, 0.1]),
            beach: RingLayeringParams::new(1, vec![0.5, 0.2]),
            mountains: Some(MountainParams::default()),
        }
    }
}

/// Thickness of the guaranteed outer rings plus one placement probability per craggy ring inside
/// them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingLayeringParams {
    pub thickness: usize,
    pub extensions: Vec<f64>,
}

impl RingLayeringParams {
    pub fn new(thickness: usize, extensions: Vec<f64>) -> Self {
        Self { thickness, extensions }
    }

    pub fn ring_count(&self) -> usize {
        self.thickness + self.extensions.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountainParams {
    pub axiom: Vec<Direction>,
    pub generations: u32,
}

impl Default for MountainParams {
    fn default() -> Self {
        Self { axiom: vec![Direction::S], generations: 16 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IslandParams {
    /// Base sampling frequency; the second octave samples at `frequency * secondary_scale`.
    pub frequency: f64,
    pub secondary_scale: f64,
    /// Exponent of the sign-preserving power curve applied to the averaged sample.
    pub exponent: f64,
}

impl Default for IslandParams {
    fn default() -> Self {
        Self { frequency: 0.05, secondary_scale: 0.8, exponent: 0.8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_fall_back_to_defaults() {
        let config = GenerationConfig::builder().seed(Some(5)).build().expect("valid config");
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, 5);
        assert_eq!(config.strategy, Strategy::Layered(LayeredParams::default()));
    }

    #[test]
    fn none_leaves_a_field_defaulted() {
        let config = GenerationConfig::builder()
            .width(None)
            .height(Some(12))
            .seed(Some(1))
            .build()
            .expect("valid config");
        assert_eq!((config.width, config.height), (DEFAULT_WIDTH, 12));
    }

    #[test]
    fn missing_seed_is_generated_per_build() {
        let first = GenerationConfig::builder().build().expect("valid");
        let second = GenerationConfig::builder().build().expect("valid");
        assert_ne!(first.seed, second.seed);
    }

    #[test]
    fn zero_sized_maps_are_rejected() {
        assert_eq!(
            GenerationConfig::builder().width(Some(0)).seed(Some(1)).build(),
            Err(GenError::InvalidDimensions { width: 0, height: DEFAULT_HEIGHT })
        );
    }

    #[test]
    fn sides_past_the_coordinate_range_are_rejected() {
        let oversized = MAX_DIMENSION + 1;
        let build = |width| {
            GenerationConfig::builder().width(Some(width)).height(Some(1)).seed(Some(1)).build()
        };

        assert_eq!(
            build(oversized),
            Err(GenError::DimensionsTooLarge { width: oversized, height: 1 })
        );
        assert!(build(MAX_DIMENSION).is_ok());
    }

    #[test]
    fn fractal_depth_is_capped() {
        let layered = |generations| {
            Strategy::Layered(LayeredParams {
                mountains: Some(MountainParams { generations, ..MountainParams::default() }),
                ..LayeredParams::default()
            })
        };
        let build = |strategy| {
            GenerationConfig::builder().seed(Some(1)).strategy(Some(strategy)).build()
        };

        assert!(build(layered(MAX_FRACTAL_GENERATIONS)).is_ok());
        assert_eq!(
            build(layered(48)),
            Err(GenError::TooManyGenerations { generations: 48, max: MAX_FRACTAL_GENERATIONS })
        );
    }

    #[test]
    fn strategy_deserializes_from_tagged_json_with_partial_fields() {
        let strategy: Strategy =
            serde_json::from_str(r#"{ "kind": "island", "frequency": 0.1 }"#).expect("island");
        assert_eq!(
            strategy,
            Strategy::Island(IslandParams { frequency: 0.1, ..IslandParams::default() })
        );

        let strategy: Strategy = serde_json::from_str(
            r#"{ "kind": "layered", "ocean": { "thickness": 3 }, "mountains": null }"#,
        )
        .expect("layered");
        let Strategy::Layered(params) = strategy else {
            panic!("expected layered strategy");
        };
        assert_eq!(params.ocean, RingLayeringParams::new(3, Vec::new()));
        assert_eq!(params.beach, LayeredParams::default().beach);
        assert_eq!(params.mountains, None);
    }
}
