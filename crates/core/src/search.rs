//! Occupancy bitmap and the nearest-open-cell ring search.
//!
//! Distances are anisotropic: moving one row (lightness) costs 1, moving one
//! column (hue) costs [`HUE_WEIGHT`]. Columns wrap because hue is circular,
//! rows do not.

use crate::grid::{Cell, CELL_COUNT, GRID_SIZE};

/// Cost of one column of hue displacement relative to one row of lightness.
pub const HUE_WEIGHT: f64 = 1.5;

/// Largest ring radius the search will scan.
pub const MAX_RADIUS: usize = GRID_SIZE;

const SIZE: i32 = GRID_SIZE as i32;

/// One bit per cell; each row is a `u64` with bit `col` set when taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    rows: [u64; GRID_SIZE],
    filled: usize,
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl Occupancy {
    pub fn new() -> Self {
        Self {
            rows: [0; GRID_SIZE],
            filled: 0,
        }
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.rows[cell.row] & (1u64 << cell.col) != 0
    }

    /// Marks `cell` taken. Returns `false` if it already was.
    pub fn occupy(&mut self, cell: Cell) -> bool {
        let bit = 1u64 << cell.col;
        if self.rows[cell.row] & bit != 0 {
            return false;
        }
        self.rows[cell.row] |= bit;
        self.filled += 1;
        true
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled == CELL_COUNT
    }

    /// Iterates free cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..GRID_SIZE).flat_map(move |row| {
            (0..GRID_SIZE)
                .map(move |col| Cell::new(row, col))
                .filter(move |&cell| !self.is_occupied(cell))
        })
    }
}

/// Wraps a signed column into `0..64`.
pub fn wrap_col(col: i32) -> usize {
    col.rem_euclid(SIZE) as usize
}

/// Shorter way around the hue axis for a column offset.
pub fn column_distance(dc: i32) -> i32 {
    let d = dc.rem_euclid(SIZE);
    d.min(SIZE - d)
}

/// `|dr| + 1.5 * min(|dc|, 64 - |dc|)`.
pub fn weighted_distance(dr: i32, dc: i32) -> f64 {
    f64::from(dr.abs()) + HUE_WEIGHT * f64::from(column_distance(dc))
}

/// Weighted distance between two cells.
pub fn cell_distance(from: Cell, to: Cell) -> f64 {
    weighted_distance(
        to.row as i32 - from.row as i32,
        to.col as i32 - from.col as i32,
    )
}

/// A free cell found by [`nearest_open_cell`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenCell {
    pub cell: Cell,
    pub distance: f64,
    /// Ring (Chebyshev radius) the cell was found on.
    pub radius: usize,
}

/// Finds the free cell with the smallest weighted distance from `target`,
/// excluding `target` itself.
///
/// Rings of increasing Chebyshev radius are scanned, `dr` ascending then `dc`
/// ascending; the first cell seen at the minimum distance wins. Scanning stops
/// once the best distance is below the next radius, since every cell first
/// reached on that ring is at least that far away.
pub fn nearest_open_cell(occupancy: &Occupancy, target: Cell) -> Option<OpenCell> {
    let mut best: Option<OpenCell> = None;
    let (target_row, target_col) = (target.row as i32, target.col as i32);

    for radius in 1..=MAX_RADIUS as i32 {
        if best.is_some_and(|b| b.distance < f64::from(radius)) {
            break;
        }
        for dr in -radius..=radius {
            let row = target_row + dr;
            if !(0..SIZE).contains(&row) {
                continue;
            }
            // Interior rows of the ring only touch its left and right edges.
            let step = if dr.abs() == radius { 1 } else { 2 * radius };
            for dc in (-radius..=radius).step_by(step as usize) {
                let cell = Cell::new(row as usize, wrap_col(target_col + dc));
                if occupancy.is_occupied(cell) {
                    continue;
                }
                let distance = weighted_distance(dr, dc);
                if best.map_or(true, |b| distance < b.distance) {
                    best = Some(OpenCell {
                        cell,
                        distance,
                        radius: radius as usize,
                    });
                }
            }
        }
    }
    best
}
