//! Shared test doubles for the generator test suites.
//! Scripted sources make the order and number of random draws observable.

use crate::random::{NoiseSource, RandomSource};

/// Replays `values` in a loop and counts every draw.
pub(super) struct ScriptedRandom {
    values: Vec<f64>,
    pub(super) draws: usize,
}

impl ScriptedRandom {
    pub(super) fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted random needs at least one value");
        Self { values, draws: 0 }
    }

    pub(super) fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;
        value
    }
}

/// Noise field defined by a plain function of the sample point.
pub(super) struct FnNoise<F>(pub(super) F);

impl<F: Fn(f64, f64) -> f64> NoiseSource for FnNoise<F> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        (self.0)(x, y)
    }
}
