//! Greedy grid assignment.
//!
//! Candidates are consumed in priority order. Each one claims its target cell
//! if it is still free, otherwise the nearest free cell under the weighted
//! metric. A claim is final: later candidates never displace earlier ones.

use log::trace;

use crate::error::MosaicError;
use crate::grid::{Cell, ColorEntry, MosaicGrid, CELL_COUNT, MAX_INDEX};
use crate::planner::{PlacementCandidate, Tier};
use crate::search::{nearest_open_cell, wrap_col, Occupancy};
use crate::universe::RawColor;

/// Record of where one candidate wanted to go and where it ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub color: RawColor,
    pub tier: Tier,
    pub target: Cell,
    pub cell: Cell,
    /// Weighted distance from `target` to `cell`; 0 when the target was free.
    pub distance: f64,
    /// Search ring the cell was found on; 0 when the target was free.
    pub radius: usize,
}

impl Placement {
    pub fn is_exact(&self) -> bool {
        self.radius == 0
    }
}

/// The cell a candidate aims for: rounded ideal row clamped to the grid,
/// rounded ideal column wrapped around it.
pub fn target_cell(candidate: &PlacementCandidate) -> Cell {
    let row = candidate.ideal_row.round().clamp(0.0, MAX_INDEX as f64) as usize;
    let col = wrap_col(candidate.ideal_col.round() as i32);
    Cell::new(row, col)
}

/// Incremental assigner holding the occupancy bitmap and claimed entries.
#[derive(Debug, Clone)]
pub struct Assigner {
    occupancy: Occupancy,
    slots: Vec<Option<ColorEntry>>,
}

impl Default for Assigner {
    fn default() -> Self {
        Self::new()
    }
}

impl Assigner {
    pub fn new() -> Self {
        Self {
            occupancy: Occupancy::new(),
            slots: vec![None; CELL_COUNT],
        }
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Claims a cell for `candidate`.
    ///
    /// # Panics
    ///
    /// Panics if no free cell remains. With exactly one candidate per cell this
    /// cannot happen, so reaching it means the enumeration or planning is broken.
    pub fn place(&mut self, candidate: &PlacementCandidate) -> Placement {
        let target = target_cell(candidate);
        let (cell, distance, radius) = if self.occupancy.is_occupied(target) {
            match nearest_open_cell(&self.occupancy, target) {
                Some(open) => (open.cell, open.distance, open.radius),
                None => panic!(
                    "mosaic invariant violated: no free cell for {} (target row {}, col {}) \
                     with {} of {CELL_COUNT} cells filled",
                    candidate.color.color,
                    target.row,
                    target.col,
                    self.occupancy.filled(),
                ),
            }
        } else {
            (target, 0.0, 0)
        };

        self.occupancy.occupy(cell);
        let entry = ColorEntry::placed(candidate.color.color, candidate.color.perceptual, cell);
        if let Some(offset) = cell.offset() {
            self.slots[offset] = Some(entry);
        }

        if radius > 0 {
            trace!(
                "{} displaced from ({}, {}) to ({}, {}), distance {distance}",
                candidate.color.color,
                target.row,
                target.col,
                cell.row,
                cell.col
            );
        }

        Placement {
            color: candidate.color.color,
            tier: candidate.tier,
            target,
            cell,
            distance,
            radius,
        }
    }

    /// Converts the claimed cells into a grid.
    ///
    /// Returns `MosaicError::IncompleteGrid` unless every cell has been claimed.
    pub fn finish(self) -> Result<MosaicGrid, MosaicError> {
        let filled = self.occupancy.filled();
        if !self.occupancy.is_full() {
            return Err(MosaicError::IncompleteGrid {
                filled,
                expected: CELL_COUNT,
            });
        }
        let cells: Option<Vec<ColorEntry>> = self.slots.into_iter().collect();
        cells
            .map(MosaicGrid::from_cells)
            .ok_or(MosaicError::IncompleteGrid {
                filled,
                expected: CELL_COUNT,
            })
    }
}

/// Assigns a full candidate list, already in processing order.
///
/// Returns `MosaicError::CandidateCount` unless there is exactly one candidate
/// per cell. The placements are returned in processing order.
pub fn assign(
    candidates: &[PlacementCandidate],
) -> Result<(MosaicGrid, Vec<Placement>), MosaicError> {
    if candidates.len() != CELL_COUNT {
        return Err(MosaicError::CandidateCount {
            expected: CELL_COUNT,
            got: candidates.len(),
        });
    }
    let mut assigner = Assigner::new();
    let placements = candidates.iter().map(|c| assigner.place(c)).collect();
    Ok((assigner.finish()?, placements))
}
