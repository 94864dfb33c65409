//! Summary of how far colors were displaced from their targets.

use serde::Serialize;

use crate::assign::Placement;
use crate::planner::Tier;

/// Displacement summary for one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStats {
    pub tier: &'static str,
    pub count: usize,
    /// Colors that got their target cell.
    pub exact: usize,
    pub mean_distance: f64,
    pub max_distance: f64,
    pub max_radius: usize,
}

/// Displacement summary for a whole build, one row per tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutStats {
    pub tiers: Vec<TierStats>,
}

impl LayoutStats {
    pub fn from_placements(placements: &[Placement]) -> Self {
        let tiers = Tier::ALL
            .iter()
            .map(|&tier| {
                let in_tier: Vec<&Placement> =
                    placements.iter().filter(|p| p.tier == tier).collect();
                let count = in_tier.len();
                let total: f64 = in_tier.iter().map(|p| p.distance).sum();
                TierStats {
                    tier: tier.name(),
                    count,
                    exact: in_tier.iter().filter(|p| p.is_exact()).count(),
                    mean_distance: if count == 0 { 0.0 } else { total / count as f64 },
                    max_distance: in_tier.iter().map(|p| p.distance).fold(0.0, f64::max),
                    max_radius: in_tier.iter().map(|p| p.radius).max().unwrap_or(0),
                }
            })
            .collect();
        Self { tiers }
    }

    pub fn total(&self) -> usize {
        self.tiers.iter().map(|t| t.count).sum()
    }

    pub fn exact(&self) -> usize {
        self.tiers.iter().map(|t| t.exact).sum()
    }

    pub fn max_distance(&self) -> f64 {
        self.tiers.iter().map(|t| t.max_distance).fold(0.0, f64::max)
    }
}
