//! Layer composition for the layered strategy: ground, ocean, beach, then mountains on top.

use crate::config::{LayeredParams, MountainParams};
use crate::error::GenError;
use crate::grid::{Coord, Grid};
use crate::model::{CellType, MapCell};
use crate::random::RandomSource;

use super::fractal::{draw_directions, generate_fractal};
use super::rings::{build_beach_layer, build_ocean_layer};

pub(super) fn build_layered_grid(
    width: usize,
    height: usize,
    params: &LayeredParams,
    random: &mut dyn RandomSource,
) -> Result<Grid<MapCell>, GenError> {
    let ground = Grid::filled(width, height, MapCell::new(CellType::Grass));
    let (ocean, ocean_span) = build_ocean_layer(width, height, &params.ocean, random)?;
    let beach = build_beach_layer(&ocean, ocean_span, &params.beach, random)?;

    let mut layers = vec![ocean, beach];
    if let Some(mountains) = &params.mountains {
        layers.push(build_mountain_layer(width, height, mountains));
    }

    let merged = Grid::flatten(ground, &layers)?;
    Ok(merged.fill_empty_with(MapCell::new(CellType::Empty)))
}

/// Walks the fractal direction sequence from the grid center.
fn build_mountain_layer(width: usize, height: usize, params: &MountainParams) -> Grid<MapCell> {
    let mut mountains = Grid::empty(width, height);
    let start = Coord::new((height / 2) as i32, (width / 2) as i32);
    let directions = generate_fractal(&params.axiom, params.generations);
    draw_directions(&mut mountains, start, &MapCell::new(CellType::Mountain), &directions);
    mountains
}
