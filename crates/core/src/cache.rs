//! Process-wide mosaic, built once on first access.
//!
//! The layout is a pure function of the fixed color universe, so there is no
//! invalidation: the first caller builds it inside a [`OnceLock`] and every
//! later caller (on any thread) reads the same value. Concurrent first callers
//! block until that single build finishes.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Instant;

use log::info;

use crate::assign::assign;
use crate::color::{OkLchAdapter, PerceptualAdapter};
use crate::error::MosaicError;
use crate::grid::{ColorEntry, MosaicGrid};
use crate::planner::plan;
use crate::stats::LayoutStats;
use crate::universe::{generate_universe, RawColor};

static MOSAIC: OnceLock<Mosaic> = OnceLock::new();

/// A finished grid with its `hex3` lookup and build statistics.
#[derive(Debug, Clone)]
pub struct Mosaic {
    grid: MosaicGrid,
    lookup: HashMap<String, ColorEntry>,
    stats: LayoutStats,
}

impl Mosaic {
    /// Runs the full pipeline: enumerate, plan, assign.
    ///
    /// This is uncached; two calls with the same adapter produce equal values.
    pub fn build<A: PerceptualAdapter + ?Sized>(adapter: &A) -> Result<Self, MosaicError> {
        let started = Instant::now();
        let candidates = plan(generate_universe(adapter));
        let (grid, placements) = assign(&candidates)?;
        let stats = LayoutStats::from_placements(&placements);
        info!(
            "built mosaic in {:?}: {} of {} colors on target, max displacement {}",
            started.elapsed(),
            stats.exact(),
            stats.total(),
            stats.max_distance()
        );
        let lookup = grid.lookup();
        Ok(Self {
            grid,
            lookup,
            stats,
        })
    }

    pub fn grid(&self) -> &MosaicGrid {
        &self.grid
    }

    pub fn lookup(&self) -> &HashMap<String, ColorEntry> {
        &self.lookup
    }

    pub fn stats(&self) -> &LayoutStats {
        &self.stats
    }

    /// Entry for a key; `None` for anything outside the generated domain.
    pub fn color(&self, hex3: &str) -> Option<&ColorEntry> {
        self.lookup.get(hex3)
    }
}

/// The cached mosaic, built with the OKLCh adapter on first use.
pub fn mosaic() -> &'static Mosaic {
    MOSAIC.get_or_init(|| {
        Mosaic::build(&OkLchAdapter)
            .unwrap_or_else(|e| panic!("mosaic invariant violated while building grid: {e}"))
    })
}

/// All 4096 entries in row-major order.
pub fn get_mosaic_grid() -> &'static [ColorEntry] {
    mosaic().grid().entries()
}

/// Map from `hex3` to its placed entry.
pub fn get_mosaic_lookup() -> &'static HashMap<String, ColorEntry> {
    mosaic().lookup()
}

/// The entry for `hex3`, or `None` if the key is not in the universe.
pub fn get_mosaic_color(hex3: &str) -> Option<&'static ColorEntry> {
    mosaic().color(hex3)
}

/// Like [`get_mosaic_color`] but rejects malformed keys.
///
/// Returns `MosaicError::InvalidColorFormat` unless `hex3` matches `[0-9a-f]{3}`.
pub fn try_mosaic_color(hex3: &str) -> Result<&'static ColorEntry, MosaicError> {
    let key = RawColor::from_hex3(hex3)?.hex3();
    mosaic()
        .color(&key)
        .ok_or_else(|| MosaicError::InvalidColorFormat(format!("{hex3:?} is not in the mosaic")))
}

/// Displacement statistics of the cached build.
pub fn get_mosaic_stats() -> &'static LayoutStats {
    mosaic().stats()
}
