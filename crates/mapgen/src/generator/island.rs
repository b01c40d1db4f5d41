//! Noise-driven island terrain: each cell is classified from two blended noise octaves.

use crate::config::IslandParams;
use crate::grid::{Coord, Grid};
use crate::model::{CellType, MapCell};
use crate::random::NoiseSource;

pub(super) fn build_island_grid(
    width: usize,
    height: usize,
    params: &IslandParams,
    noise: &dyn NoiseSource,
) -> Grid<MapCell> {
    Grid::from_fn(width, height, |coord| classify(height_at(coord, params, noise)))
}

/// Mean of two octaves at `coord`, bent by a sign-preserving power curve.
fn height_at(coord: Coord, params: &IslandParams, noise: &dyn NoiseSource) -> f64 {
    let (x, y) = (f64::from(coord.x), f64::from(coord.y));
    let primary = params.frequency;
    let secondary = params.frequency * params.secondary_scale;
    let blended = (noise.sample(x * primary, y * primary)
        + noise.sample(x * secondary, y * secondary))
        / 2.0;
    shape(blended, params.exponent)
}

fn shape(value: f64, exponent: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value.signum() * value.abs().powf(exponent) }
}

fn classify(depth: f64) -> MapCell {
    let kind = if depth < 0.0 { CellType::Sea } else { CellType::Grass };
    MapCell::with_depth(kind, depth)
}
