//! The finished 64x64 mosaic.
//!
//! A [`MosaicGrid`] stores one [`ColorEntry`] per cell in row-major layout.
//! Row 0 is the lightest row, column 0 is hue 0°. Unlike the occupancy map
//! used during assignment, the stored grid is not toroidal: `(row, col)` must
//! be in range.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::color::{OkLch, Rgb8};
use crate::universe::{RawColor, UNIVERSE_SIZE};

/// Rows and columns of the grid.
pub const GRID_SIZE: usize = 64;

/// Total number of cells; equal to the number of colors in the universe.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Largest row or column index.
pub const MAX_INDEX: usize = GRID_SIZE - 1;

const _: () = assert!(CELL_COUNT == UNIVERSE_SIZE);

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major offset, or `None` if the cell lies outside the grid.
    pub fn offset(self) -> Option<usize> {
        (self.row < GRID_SIZE && self.col < GRID_SIZE).then_some(self.row * GRID_SIZE + self.col)
    }
}

/// A placed color: identity, perceptual coordinates and final cell.
///
/// Created by the assigner at the moment its cell is claimed and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub hex3: String,
    pub hex6: String,
    pub rgb: Rgb8,
    pub perceptual: OkLch,
    pub row: usize,
    pub col: usize,
}

impl ColorEntry {
    pub(crate) fn placed(color: RawColor, perceptual: OkLch, cell: Cell) -> Self {
        Self {
            hex3: color.hex3(),
            hex6: color.hex6(),
            rgb: color.rgb8(),
            perceptual,
            row: cell.row,
            col: cell.col,
        }
    }

    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

/// A fully populated 64x64 grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicGrid {
    cells: Vec<ColorEntry>,
}

impl MosaicGrid {
    /// Wraps an already validated, row-major, fully populated cell vector.
    pub(crate) fn from_cells(cells: Vec<ColorEntry>) -> Self {
        debug_assert_eq!(cells.len(), CELL_COUNT);
        Self { cells }
    }

    /// All entries in row-major order.
    pub fn entries(&self) -> &[ColorEntry] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&ColorEntry> {
        Cell::new(row, col).offset().map(|i| &self.cells[i])
    }

    /// One row of 64 entries, left (hue 0°) to right.
    pub fn row(&self, row: usize) -> Option<&[ColorEntry]> {
        (row < GRID_SIZE).then(|| &self.cells[row * GRID_SIZE..(row + 1) * GRID_SIZE])
    }

    /// Iterates rows top (lightest) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorEntry]> + '_ {
        self.cells.chunks(GRID_SIZE)
    }

    /// Builds the `hex3 -> entry` map.
    pub fn lookup(&self) -> HashMap<String, ColorEntry> {
        self.cells
            .iter()
            .map(|entry| (entry.hex3.clone(), entry.clone()))
            .collect()
    }
}
