//! Concentric ring layers: guaranteed border rings followed by craggy, adjacency-gated rings.

use crate::config::RingLayeringParams;
use crate::error::GenError;
use crate::grid::{Coord, Grid};
use crate::model::{CellType, MapCell};
use crate::random::RandomSource;

/// Ring indices a layer reached. Craggy rings are `guaranteed_end..end`; `end` is the first ring
/// the layer did not touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RingSpan {
    pub(super) guaranteed_end: usize,
    pub(super) end: usize,
}

impl RingSpan {
    fn truncated_at(guaranteed_end: usize, ring: usize) -> Self {
        Self { guaranteed_end: guaranteed_end.min(ring), end: ring }
    }
}

/// Places `params.thickness` full rings of `tile` from `first_ring` inward, then one craggy ring
/// per extension probability.
///
/// Running past the innermost ring ends the layer early; the returned span records where.
pub(super) fn place_ring_layer<T: Clone + PartialEq>(
    grid: &mut Grid<T>,
    tile: &T,
    params: &RingLayeringParams,
    first_ring: usize,
    random: &mut dyn RandomSource,
) -> Result<RingSpan, GenError> {
    let guaranteed_end = first_ring + params.thickness;

    for ring in first_ring..guaranteed_end {
        let Some(coords) = probe_ring(grid, ring)? else {
            return Ok(RingSpan::truncated_at(guaranteed_end, ring));
        };
        for coord in coords {
            grid.set(coord, tile.clone());
        }
    }

    for (offset, &probability) in params.extensions.iter().enumerate() {
        let ring = guaranteed_end + offset;
        let Some(coords) = probe_ring(grid, ring)? else {
            return Ok(RingSpan::truncated_at(guaranteed_end, ring));
        };
        extend_ring(grid, tile, &coords, probability, random);
    }

    Ok(RingSpan { guaranteed_end, end: first_ring + params.ring_count() })
}

/// Ring coordinates, or `None` once `ring` lies past the innermost ring.
fn probe_ring<T>(grid: &Grid<T>, ring: usize) -> Result<Option<Vec<Coord>>, GenError> {
    match grid.ring_coordinates(ring) {
        Ok(coords) => Ok(Some(coords)),
        Err(GenError::RingOutOfRange { max_ring, .. }) => {
            tracing::trace!(ring, max_ring, "ring layer stopped at innermost ring");
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Draws once per coordinate, in ring order, and places `tile` where the draw is within
/// `probability` and a neighbour already holds `tile`.
fn extend_ring<T: Clone + PartialEq>(
    grid: &mut Grid<T>,
    tile: &T,
    coords: &[Coord],
    probability: f64,
    random: &mut dyn RandomSource,
) {
    let mut placed = 0_usize;
    for &coord in coords {
        let roll = random.next_f64();
        if roll <= probability
            && grid.adjacent_neighbours(coord).into_iter().any(|neighbour| neighbour == tile)
        {
            grid.set(coord, tile.clone());
            placed += 1;
        }
    }
    tracing::trace!(candidates = coords.len(), placed, probability, "craggy ring extended");
}

pub(super) fn build_ocean_layer(
    width: usize,
    height: usize,
    params: &RingLayeringParams,
    random: &mut dyn RandomSource,
) -> Result<(Grid<MapCell>, RingSpan), GenError> {
    let mut ocean = Grid::empty(width, height);
    let span = place_ring_layer(&mut ocean, &MapCell::new(CellType::Sea), params, 0, random)?;
    Ok((ocean, span))
}

/// Beach fills the gaps the ocean's craggy rings left, then lays its own rings inside the ocean.
pub(super) fn build_beach_layer(
    ocean: &Grid<MapCell>,
    ocean_span: RingSpan,
    params: &RingLayeringParams,
    random: &mut dyn RandomSource,
) -> Result<Grid<MapCell>, GenError> {
    let beach_tile = MapCell::new(CellType::Beach);
    let mut beach = Grid::empty(ocean.width(), ocean.height());

    for ring in ocean_span.guaranteed_end..ocean_span.end {
        for coord in ocean.ring_coordinates(ring)? {
            if !ocean.is_present(coord) {
                beach.set(coord, beach_tile);
            }
        }
    }

    place_ring_layer(&mut beach, &beach_tile, params, ocean_span.end, random)?;
    Ok(beach)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ScriptedRandom;
    use super::*;

    #[test]
    fn guaranteed_rings_ignore_randomness() {
        let mut grid = Grid::empty(6, 5);
        let mut random = ScriptedRandom::constant(0.0);
        let params = RingLayeringParams::new(1, Vec::new());
        let span = place_ring_layer(&mut grid, &1_u8, &params, 0, &mut random).expect("ring 0");

        assert_eq!(span, RingSpan { guaranteed_end: 1, end: 1 });
        assert_eq!(random.draws, 0);
        assert_eq!(grid.present_count(), 2 * (6 + 5) - 4);
    }

    #[test]
    fn craggy_ring_needs_a_same_type_neighbour() {
        let mut grid = Grid::empty(5, 5);
        grid.set(Coord::new(0, 2), 1_u8);
        let coords = grid.ring_coordinates(1).expect("ring 1");
        let mut random = ScriptedRandom::constant(0.0);

        extend_ring(&mut grid, &1, &coords, 1.0, &mut random);

        // (1,1) is visited first and has no placed neighbour yet; (1,2) touches the seed cell.
        assert!(!grid.is_present(Coord::new(1, 1)));
        assert!(grid.is_present(Coord::new(1, 2)));
        assert_eq!(random.draws, coords.len());
    }

    #[test]
    fn craggy_ring_without_any_neighbour_places_nothing() {
        let mut grid = Grid::empty(5, 5);
        grid.set(Coord::new(0, 2), 2_u8);
        let coords = grid.ring_coordinates(1).expect("ring 1");
        let mut random = ScriptedRandom::constant(0.0);

        extend_ring(&mut grid, &1, &coords, 1.0, &mut random);

        assert_eq!(grid.present_count(), 1);
    }

    #[test]
    fn every_candidate_consumes_a_draw_even_when_rejected() {
        let mut grid = Grid::empty(7, 7);
        let mut random = ScriptedRandom::constant(0.9);
        let params = RingLayeringParams::new(1, vec![0.5, 0.5]);

        let span = place_ring_layer(&mut grid, &1_u8, &params, 0, &mut random).expect("rings");

        assert_eq!(span.end, 3);
        assert_eq!(random.draws, 16 + 8);
        assert_eq!(grid.present_count(), 24);
    }

    #[test]
    fn layer_stops_quietly_past_the_innermost_ring() {
        let mut grid = Grid::empty(4, 4);
        let mut random = ScriptedRandom::constant(0.0);
        let params = RingLayeringParams::new(5, vec![1.0]);

        let span = place_ring_layer(&mut grid, &1_u8, &params, 0, &mut random).expect("no error");

        assert_eq!(span, RingSpan { guaranteed_end: 3, end: 3 });
        assert_eq!(grid.present_count(), 16);
        assert_eq!(random.draws, 0);
    }

    #[test]
    fn beach_inverse_fills_the_ocean_craggy_ring() {
        let mut random = ScriptedRandom::new(vec![0.0, 0.99]);
        let ocean_params = RingLayeringParams::new(1, vec![0.5]);
        let (ocean, span) = build_ocean_layer(6, 6, &ocean_params, &mut random).expect("ocean");
        let beach = build_beach_layer(&ocean, span, &RingLayeringParams::default(), &mut random)
            .expect("beach");

        for coord in ocean.ring_coordinates(1).expect("ring 1") {
            assert_ne!(
                ocean.is_present(coord),
                beach.is_present(coord),
                "{coord:?} must be exactly one of sea or beach"
            );
        }
        assert!(ocean.present_count() > 20, "alternating draws should place some sea");
        assert!(beach.present_count() > 0, "rejected draws should leave beach");
        assert_eq!(random.draws, 12);
    }

    #[test]
    fn beach_rings_continue_inside_the_ocean() {
        let mut random = ScriptedRandom::constant(0.0);
        let ocean_params = RingLayeringParams::new(2, Vec::new());
        let beach_params = RingLayeringParams::new(1, Vec::new());
        let (ocean, span) = build_ocean_layer(8, 8, &ocean_params, &mut random).expect("ocean");
        let beach = build_beach_layer(&ocean, span, &beach_params, &mut random).expect("beach");

        let ring_two = ocean.ring_coordinates(2).expect("ring 2");
        let beach_tile = MapCell::new(CellType::Beach);
        assert_eq!(beach.present_count(), ring_two.len());
        assert!(ring_two.iter().all(|&coord| beach.get(coord) == Some(&beach_tile)));
    }
}
