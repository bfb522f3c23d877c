//! Simulation report generation.

use crate::catalog::{ItemId, Tier};
use crate::history::DrawRecord;
use crate::pool::DrawPool;
use std::fmt;

/// Aggregated results over every simulated draw.
#[derive(Debug, Clone, Default)]
pub struct SimReport {
    pub banner: String,
    pub runs: u32,
    pub total_pulls: u64,

    pub common: u64,
    pub rare: u64,
    pub legendary: u64,

    pub featured_legendary: u64,
    pub hard_pity_hits: u64,
    pub soft_pity_hits: u64,

    /// Configured chance per tier, for comparison with observed rates
    pub expected_common_rate: f64,
    pub expected_rare_rate: f64,
    pub expected_legendary_rate: f64,
}

impl SimReport {
    pub fn new(banner: &str, pool: &DrawPool) -> Self {
        Self {
            banner: banner.to_string(),
            expected_common_rate: pool.tier_rate(Tier::Common),
            expected_rare_rate: pool.tier_rate(Tier::Rare),
            expected_legendary_rate: pool.tier_rate(Tier::Legendary),
            ..Default::default()
        }
    }

    /// Counts one draw. `hard_pity` says whether the counter was at the
    /// threshold before the draw; other pity draws are soft.
    pub fn record(&mut self, record: &DrawRecord, featured: Option<ItemId>, hard_pity: bool) {
        self.total_pulls += 1;
        match record.tier {
            Tier::Common => self.common += 1,
            Tier::Rare => self.rare += 1,
            Tier::Legendary => self.legendary += 1,
        }
        if featured == Some(record.id) {
            self.featured_legendary += 1;
        }
        if record.is_pity {
            if hard_pity {
                self.hard_pity_hits += 1;
            } else {
                self.soft_pity_hits += 1;
            }
        }
    }

    pub fn rate(&self, tier: Tier) -> f64 {
        if self.total_pulls == 0 {
            return 0.0;
        }
        let count = match tier {
            Tier::Common => self.common,
            Tier::Rare => self.rare,
            Tier::Legendary => self.legendary,
        };
        count as f64 / self.total_pulls as f64
    }

    /// Average draws per legendary, or `None` if none dropped.
    pub fn pulls_per_legendary(&self) -> Option<f64> {
        if self.legendary == 0 {
            None
        } else {
            Some(self.total_pulls as f64 / self.legendary as f64)
        }
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Banner '{}': {} pulls over {} run(s)",
            self.banner, self.total_pulls, self.runs
        )?;
        for (tier, count, expected) in [
            (Tier::Legendary, self.legendary, self.expected_legendary_rate),
            (Tier::Rare, self.rare, self.expected_rare_rate),
            (Tier::Common, self.common, self.expected_common_rate),
        ] {
            writeln!(
                f,
                "  {:<10} {:>8}  {:>6.2}%  (base {:.2}%)",
                tier.name(),
                count,
                self.rate(tier) * 100.0,
                expected * 100.0
            )?;
        }
        writeln!(f, "  Featured legendary: {}", self.featured_legendary)?;
        writeln!(
            f,
            "  Pity: {} hard, {} soft",
            self.hard_pity_hits, self.soft_pity_hits
        )?;
        match self.pulls_per_legendary() {
            Some(avg) => write!(f, "  Pulls per legendary: {avg:.1}"),
            None => write!(f, "  Pulls per legendary: n/a"),
        }
    }
}
