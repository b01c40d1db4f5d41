//! Sparse-then-dense grid primitives used by every layer generator.
//!
//! A [`Grid`] starts with every cell absent, is partially filled by a layer generator, merged with
//! other layers through [`Grid::flatten_onto`], and finally turned into dense rows once every cell
//! is present. The origin is the top-left corner; `y` grows downward and `x` grows rightward.

use serde::{Deserialize, Serialize};

use crate::error::GenError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub y: i32,
    pub x: i32,
}

impl Coord {
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    pub const fn offset(self, dy: i32, dx: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

/// Fixed-size `width` x `height` grid whose cells are either present or absent.
///
/// Absence is tracked per cell with `Option<T>`, so a legitimate "zero" value of `T` is still a
/// present cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    pub fn empty(width: usize, height: usize) -> Self {
        Self { width, height, cells: (0..width * height).map(|_| None).collect() }
    }

    /// Builds a fully present grid, asking `supplier` for each cell in row-major order.
    pub fn from_fn(width: usize, height: usize, mut supplier: impl FnMut(Coord) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Some(supplier(Coord::new(y as i32, x as i32))));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.cells[self.index(coord)].as_ref()
    }

    pub fn is_present(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    pub fn set(&mut self, coord: Coord, item: T) -> &mut Self {
        let index = self.index(coord);
        self.cells[index] = Some(item);
        self
    }

    pub fn clear(&mut self, coord: Coord) -> &mut Self {
        let index = self.index(coord);
        self.cells[index] = None;
        self
    }

    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn row(&self, y: usize) -> &[Option<T>] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn column(&self, x: usize) -> Vec<Option<&T>> {
        assert!(x < self.width, "column {x} is outside a grid of width {}", self.width);
        (0..self.height).map(|y| self.cells[y * self.width + x].as_ref()).collect()
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coord> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(y as i32, x as i32)))
    }

    /// Present values among the orthogonal neighbours of `coord` (north, south, east, west).
    ///
    /// Neighbours outside the grid or still absent are skipped, so this never fails, even for a
    /// coordinate that is itself out of bounds.
    pub fn adjacent_neighbours(&self, coord: Coord) -> Vec<&T> {
        [coord.offset(-1, 0), coord.offset(1, 0), coord.offset(0, 1), coord.offset(0, -1)]
            .into_iter()
            .filter(|&neighbour| self.in_bounds(neighbour))
            .filter_map(|neighbour| self.get(neighbour))
            .collect()
    }

    /// Innermost ring index accepted by [`Grid::ring_coordinates`].
    pub fn max_ring(&self) -> usize {
        let smallest = self.width.min(self.height);
        if smallest % 2 == 0 { smallest / 2 } else { smallest / 2 + 1 }
    }

    pub fn is_ring_valid(&self, ring: usize) -> bool {
        ring <= self.max_ring()
    }

    /// Coordinates of the square boundary inset `ring` cells from the grid edge, clockwise from
    /// its top-left corner. Ring 0 is the outer border.
    ///
    /// A valid ring whose rectangle has collapsed past the grid center yields an empty list.
    pub fn ring_coordinates(&self, ring: usize) -> Result<Vec<Coord>, GenError> {
        if !self.is_ring_valid(ring) {
            return Err(GenError::RingOutOfRange { ring, max_ring: self.max_ring() });
        }
        if ring * 2 >= self.height || ring * 2 >= self.width {
            return Ok(Vec::new());
        }

        let top = ring as i32;
        let left = ring as i32;
        let bottom = (self.height - 1 - ring) as i32;
        let right = (self.width - 1 - ring) as i32;

        let mut coords: Vec<Coord> = (left..=right).map(|x| Coord::new(top, x)).collect();
        if bottom > top {
            coords.extend((top + 1..=bottom).map(|y| Coord::new(y, right)));
            if right > left {
                coords.extend((left..right).rev().map(|x| Coord::new(bottom, x)));
                coords.extend((top + 1..bottom).rev().map(|y| Coord::new(y, left)));
            }
        }
        Ok(coords)
    }

    /// Overwrites this grid with every present cell of `top` and returns it.
    ///
    /// Chaining calls gives later grids precedence over earlier ones.
    pub fn flatten_onto(mut self, top: &Grid<T>) -> Result<Self, GenError>
    where
        T: Clone,
    {
        if top.dimensions() != self.dimensions() {
            return Err(GenError::DimensionMismatch {
                expected: self.dimensions(),
                found: top.dimensions(),
            });
        }
        for (cell, top_cell) in self.cells.iter_mut().zip(&top.cells) {
            if let Some(item) = top_cell {
                *cell = Some(item.clone());
            }
        }
        Ok(self)
    }

    /// Flattens `tops` onto `base` left to right; the last grid holding a cell wins.
    pub fn flatten(base: Grid<T>, tops: &[Grid<T>]) -> Result<Self, GenError>
    where
        T: Clone,
    {
        tops.iter().try_fold(base, |merged, top| merged.flatten_onto(top))
    }

    pub fn fill_empty_with(mut self, item: T) -> Self
    where
        T: Clone,
    {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            *cell = Some(item.clone());
        }
        self
    }

    /// Materializes the grid as dense rows, failing on the first absent cell in row-major order.
    pub fn into_rows(self) -> Result<Vec<Vec<T>>, GenError> {
        let width = self.width;
        let mut cells = self.cells.into_iter();
        let mut rows = Vec::with_capacity(self.height);
        for y in 0..self.height {
            let mut row = Vec::with_capacity(width);
            for x in 0..width {
                match cells.next().flatten() {
                    Some(item) => row.push(item),
                    None => return Err(GenError::IncompleteGrid { y, x }),
                }
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.in_bounds(coord),
            "coordinate (y={}, x={}) is outside the {}x{} grid",
            coord.y,
            coord.x,
            self.width,
            self.height
        );
        (coord.y as usize) * self.width + (coord.x as usize)
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, item: T) -> Self {
        Self { width, height, cells: vec![Some(item); width * height] }
    }
}
