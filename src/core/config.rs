//! Rule set for pool construction and pity.

use super::constants::*;
use crate::catalog::Category;
use crate::error::{GachaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Rates and pity thresholds used by the pool builder and the draw engine.
///
/// Every field is optional in a rules file; missing fields keep the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GachaRules {
    /// Total chance of a legendary item on a standard draw
    pub legendary_rate: f64,

    /// Total chance of a rare item on a standard draw
    pub rare_rate: f64,

    /// Fraction of the rare rate reserved for featured rares
    pub featured_rare_share: f64,

    /// Fraction of the legendary rate reserved for the featured trekker
    pub featured_legendary_share_trekker: f64,

    /// Fraction of the legendary rate reserved for the featured disc
    pub featured_legendary_share_disc: f64,

    /// Draw count at which a legendary is guaranteed
    pub hard_pity: u32,

    /// Consecutive commons after which the next draw is rare or better
    pub soft_pity_window: usize,
}

impl Default for GachaRules {
    fn default() -> Self {
        Self {
            legendary_rate: BASE_LEGENDARY_RATE,
            rare_rate: BASE_RARE_RATE,
            featured_rare_share: FEATURED_RARE_SHARE,
            featured_legendary_share_trekker: FEATURED_LEGENDARY_SHARE_TREKKER,
            featured_legendary_share_disc: FEATURED_LEGENDARY_SHARE_DISC,
            hard_pity: HARD_PITY_THRESHOLD,
            soft_pity_window: SOFT_PITY_WINDOW,
        }
    }
}

impl GachaRules {
    /// Loads rules from a JSON file and validates them.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let rules: GachaRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Featured legendary share for a category.
    pub fn featured_legendary_share(&self, category: Category) -> f64 {
        match category {
            Category::Trekker => self.featured_legendary_share_trekker,
            Category::Disc => self.featured_legendary_share_disc,
        }
    }

    /// Rejects values that cannot form a probability distribution.
    ///
    /// A residual common rate of zero or less is not caught here; the pool
    /// builder reports it as `InvalidDistribution`.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("legendary_rate", self.legendary_rate),
            ("rare_rate", self.rare_rate),
        ];
        for (field, value) in rates {
            if !(value > 0.0 && value <= 1.0) {
                return Err(GachaError::InvalidRate { field, value });
            }
        }

        let shares = [
            ("featured_rare_share", self.featured_rare_share),
            (
                "featured_legendary_share_trekker",
                self.featured_legendary_share_trekker,
            ),
            (
                "featured_legendary_share_disc",
                self.featured_legendary_share_disc,
            ),
        ];
        for (field, value) in shares {
            if !(0.0..=1.0).contains(&value) {
                return Err(GachaError::InvalidRate { field, value });
            }
        }

        if self.hard_pity == 0 {
            return Err(GachaError::InvalidRate {
                field: "hard_pity",
                value: 0.0,
            });
        }
        if self.soft_pity_window == 0 {
            return Err(GachaError::InvalidRate {
                field: "soft_pity_window",
                value: 0.0,
            });
        }
        Ok(())
    }
}
