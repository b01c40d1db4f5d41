//! Injectable randomness: a uniform PRNG stream and a coherent 2D noise field.

use noise::{NoiseFn, Perlin};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Seeded stream of uniform values in `[0, 1)`.
///
/// Every draw advances the stream, so reproducing a map requires the same draws in the same order.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Seeded scalar field over the plane with values in `[-1, 1]`.
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}

pub struct ChaChaRandom {
    rng: ChaCha8Rng,
}

impl ChaChaRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for ChaChaRandom {
    fn next_f64(&mut self) -> f64 {
        // 53 high bits fill an f64 mantissa exactly.
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }
}

pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self { perlin: Perlin::new(seed) }
    }

    /// Seeds the field from a single draw of `random`.
    pub fn from_random(random: &mut dyn RandomSource) -> Self {
        Self::new((random.next_f64() * f64::from(u32::MAX)) as u32)
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.perlin.get([x, y]).clamp(-1.0, 1.0)
    }
}
