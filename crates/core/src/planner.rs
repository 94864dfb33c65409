//! Placement planning: ideal grid coordinates and priority tiers.
//!
//! Hue maps linearly onto columns and lightness onto rows (light at the top).
//! The column axis is stored linearly even though hue is circular, so the
//! layout has a seam between column 63 and column 0; only the search metric
//! treats columns as wrapping.

use std::cmp::Ordering;

use log::debug;

use crate::color::OkLch;
use crate::grid::MAX_INDEX;
use crate::universe::UniverseColor;

/// Minimum chroma for the vivid tier.
pub const VIVID_MIN_CHROMA: f64 = 0.08;
/// Lightness band (inclusive) a vivid color must fall in.
pub const VIVID_LIGHTNESS: (f64, f64) = (0.15, 0.95);
/// Minimum chroma for the moderate tier; anything below is near-achromatic.
pub const MODERATE_MIN_CHROMA: f64 = 0.02;

/// Priority bucket. Variants are declared in processing order, so the derived
/// `Ord` sorts highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Vivid,
    Moderate,
    NearAchromatic,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Vivid, Tier::Moderate, Tier::NearAchromatic];

    /// Classifies a perceptual color by chroma and lightness.
    pub fn classify(color: OkLch) -> Tier {
        let (min_l, max_l) = VIVID_LIGHTNESS;
        if color.c >= VIVID_MIN_CHROMA && (min_l..=max_l).contains(&color.l) {
            Tier::Vivid
        } else if color.c >= MODERATE_MIN_CHROMA {
            Tier::Moderate
        } else {
            Tier::NearAchromatic
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Vivid => "vivid",
            Tier::Moderate => "moderate",
            Tier::NearAchromatic => "near-achromatic",
        }
    }
}

/// A color annotated with where it would like to go and how soon it gets to
/// choose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementCandidate {
    pub color: UniverseColor,
    pub ideal_row: f64,
    pub ideal_col: f64,
    pub tier: Tier,
}

impl PlacementCandidate {
    pub fn new(color: UniverseColor) -> Self {
        Self {
            color,
            ideal_row: ideal_row(color.perceptual.l),
            ideal_col: ideal_col(color.perceptual.h),
            tier: Tier::classify(color.perceptual),
        }
    }

    pub fn chroma(&self) -> f64 {
        self.color.perceptual.c
    }

    /// Processing order: tier first, then chroma descending.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| other.chroma().total_cmp(&self.chroma()))
    }
}

/// Fractional row for a lightness: L=1 is row 0, L=0 is row 63.
///
/// Lightness is clamped to [0, 1] first, so the result is always a valid row.
pub fn ideal_row(lightness: f64) -> f64 {
    let l = if lightness.is_nan() {
        0.0
    } else {
        lightness.clamp(0.0, 1.0)
    };
    (1.0 - l) * MAX_INDEX as f64
}

/// Fractional column for a hue in degrees: 0° is column 0, 360° would be 63.
pub fn ideal_col(hue: f64) -> f64 {
    let h = if hue.is_finite() {
        hue.rem_euclid(360.0)
    } else {
        0.0
    };
    h / 360.0 * MAX_INDEX as f64
}

/// Annotates every color and sorts into processing order.
///
/// The sort is stable, so colors with equal tier and chroma keep their
/// universe order and the result is fully deterministic.
pub fn plan(colors: impl IntoIterator<Item = UniverseColor>) -> Vec<PlacementCandidate> {
    let mut candidates: Vec<PlacementCandidate> =
        colors.into_iter().map(PlacementCandidate::new).collect();
    candidates.sort_by(PlacementCandidate::priority_cmp);

    for tier in Tier::ALL {
        let count = candidates.iter().filter(|c| c.tier == tier).count();
        debug!("planned {count} {} candidates", tier.name());
    }
    candidates
}
