//! Errors raised by grid geometry, grid merging, and map materialization.

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenError {
    /// The requested ring lies past the innermost ring the grid allows.
    ///
    /// Ring-probing loops match on this variant to stop, it does not fail a generation on its own.
    RingOutOfRange { ring: usize, max_ring: usize },
    /// Two grids being merged have different `(width, height)`.
    DimensionMismatch { expected: (usize, usize), found: (usize, usize) },
    /// A grid was materialized while the cell at `(y, x)` was still absent.
    IncompleteGrid { y: usize, x: usize },
    /// A configuration asked for a zero-sized map.
    InvalidDimensions { width: usize, height: usize },
    /// A side exceeds the signed coordinate range, or the cell count overflows.
    DimensionsTooLarge { width: usize, height: usize },
    /// Mountain fractals double in length every generation.
    TooManyGenerations { generations: u32, max: u32 },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RingOutOfRange { ring, max_ring } => {
                write!(f, "ring {ring} is out of range (innermost valid ring is {max_ring})")
            }
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "grid dimensions differ: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::IncompleteGrid { y, x } => {
                write!(f, "trying to materialize a grid with an empty cell at (y={y}, x={x})")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "map dimensions must be positive, got {width}x{height}")
            }
            Self::DimensionsTooLarge { width, height } => {
                write!(f, "map dimensions {width}x{height} exceed the addressable grid size")
            }
            Self::TooManyGenerations { generations, max } => {
                write!(f, "fractal generations must be at most {max}, got {generations}")
            }
        }
    }
}

impl Error for GenError {}
