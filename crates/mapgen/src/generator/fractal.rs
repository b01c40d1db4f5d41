//! Rewriting-system direction walks used to draw mountain ranges.
//!
//! Every symbol of the sequence is replaced each generation:
//! `N -> E E`, `E -> S W`, `S -> W W`, `W -> N E`.

use serde::{Deserialize, Serialize};

use crate::grid::{Coord, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    S,
    E,
    W,
}

impl Direction {
    /// `(dy, dx)` of a single step; north is up.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::N => (-1, 0),
            Self::S => (1, 0),
            Self::E => (0, 1),
            Self::W => (0, -1),
        }
    }

    const fn production(self) -> [Direction; 2] {
        match self {
            Self::N => [Self::E, Self::E],
            Self::E => [Self::S, Self::W],
            Self::S => [Self::W, Self::W],
            Self::W => [Self::N, Self::E],
        }
    }
}

/// Expands `axiom` through `generations` rounds of the production rules.
///
/// The result has `axiom.len() * 2^generations` symbols; zero generations returns the axiom.
pub fn generate_fractal(axiom: &[Direction], generations: u32) -> Vec<Direction> {
    let mut sequence = axiom.to_vec();
    for generation in 1..=generations {
        sequence = sequence.iter().flat_map(|direction| direction.production()).collect();
        tracing::trace!(generation, len = sequence.len(), "expanded direction sequence");
    }
    sequence
}

/// Stamps `tile` at `start` and after every step of `directions`.
///
/// A step that leaves the grid is still taken; stamps are skipped until the walk comes back in
/// bounds, if it ever does.
pub fn draw_directions<T: Clone>(
    grid: &mut Grid<T>,
    start: Coord,
    tile: &T,
    directions: &[Direction],
) {
    let mut cursor = start;
    stamp(grid, cursor, tile);
    for direction in directions {
        let (dy, dx) = direction.offset();
        cursor = cursor.offset(dy, dx);
        stamp(grid, cursor, tile);
    }
}

fn stamp<T: Clone>(grid: &mut Grid<T>, coord: Coord, tile: &T) {
    if grid.in_bounds(coord) {
        grid.set(coord, tile.clone());
    }
}
