#![deny(unsafe_code)]
//! Core of the 4096-color mosaic.
//!
//! Every 12-bit color (`000` to `fff`) is placed on a 64x64 grid with hue
//! across the columns and lightness down the rows. Vivid colors pick their
//! cells first; muted and gray colors take what is left, each landing on the
//! nearest free cell under a hue-weighted, column-wrapping metric.
//!
//! Pipeline: [`universe`] enumerates colors through a [`PerceptualAdapter`],
//! [`planner`] computes ideal cells and tiers, [`assign`] claims cells with
//! the [`search`] ring scan, and [`cache`] keeps the finished [`MosaicGrid`]
//! for the life of the process.

pub mod assign;
pub mod cache;
pub mod color;
pub mod error;
pub mod grid;
pub mod planner;
pub mod search;
pub mod stats;
pub mod universe;

pub use assign::{Assigner, Placement};
pub use cache::{
    get_mosaic_color, get_mosaic_grid, get_mosaic_lookup, get_mosaic_stats, try_mosaic_color,
    Mosaic,
};
pub use color::{OkLch, OkLchAdapter, PerceptualAdapter, Rgb8};
pub use error::MosaicError;
pub use grid::{Cell, ColorEntry, MosaicGrid, CELL_COUNT, GRID_SIZE};
pub use planner::{PlacementCandidate, Tier};
pub use stats::LayoutStats;
pub use universe::{RawColor, UniverseColor};
