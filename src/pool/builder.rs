//! Turns a banner configuration into a weighted draw pool.
//!
//! Featured items are flagged in place: each catalog item appears in the
//! pool exactly once, and the flag decides whether it takes a share of the
//! featured carve-out or of the remaining tier rate.

use super::types::{DrawPool, WeightedItem};
use crate::banner::{BannerConfig, Featured};
use crate::catalog::{Catalog, Item, ItemId, Tier};
use crate::core::{GachaRules, RATE_SUM_TOLERANCE};
use crate::error::{GachaError, Result};
use std::collections::HashSet;
use tracing::debug;

pub fn build_pool(config: &BannerConfig, catalog: &Catalog, rules: &GachaRules) -> Result<DrawPool> {
    let mut base: Vec<Item> = catalog.category(config.category).to_vec();
    // Only this banner's selection may be featured
    for item in &mut base {
        item.is_featured = false;
    }

    if let Some(featured) = &config.featured {
        flag_featured(&mut base, featured, config)?;
    }

    let (legendary, rare): (Vec<Item>, Vec<Item>) = base
        .into_iter()
        .partition(|item| item.tier == Tier::Legendary);
    let (featured_legendary, other_legendary): (Vec<Item>, Vec<Item>) =
        legendary.into_iter().partition(|item| item.is_featured);
    let (featured_rare, other_rare): (Vec<Item>, Vec<Item>) =
        rare.into_iter().partition(|item| item.is_featured);

    let mut legendary_rate = rules.legendary_rate;
    let mut rare_rate = rules.rare_rate;
    let mut featured_legendary_rate = 0.0;
    let mut featured_rare_rate = 0.0;

    if !featured_legendary.is_empty() {
        featured_legendary_rate =
            rules.legendary_rate * rules.featured_legendary_share(config.category);
        legendary_rate -= featured_legendary_rate;
    }
    if !featured_rare.is_empty() {
        featured_rare_rate = rules.rare_rate * rules.featured_rare_share;
        rare_rate -= featured_rare_rate;
    }

    let common_rate = 1.0 - rules.legendary_rate - rules.rare_rate;
    if common_rate <= 0.0 {
        return Err(GachaError::InvalidDistribution {
            residual: common_rate,
        });
    }

    let featured_legendary = spread(featured_legendary, featured_legendary_rate);
    let featured_rare = spread(featured_rare, featured_rare_rate);
    let other_legendary = spread(other_legendary, legendary_rate);
    let other_rare = spread(other_rare, rare_rate);
    let common = spread(catalog.common().to_vec(), common_rate);

    let entries: Vec<WeightedItem> = featured_legendary
        .iter()
        .chain(&featured_rare)
        .chain(&other_legendary)
        .chain(&other_rare)
        .chain(&common)
        .cloned()
        .collect();

    let legendary: Vec<WeightedItem> = featured_legendary
        .iter()
        .chain(&other_legendary)
        .cloned()
        .collect();
    let rare: Vec<WeightedItem> = featured_rare.into_iter().chain(other_rare).collect();

    if legendary.is_empty() {
        return Err(GachaError::EmptyTier(Tier::Legendary));
    }
    if rare.is_empty() {
        return Err(GachaError::EmptyTier(Tier::Rare));
    }

    let total: f64 = entries.iter().map(|entry| entry.rate).sum();
    if (total - 1.0).abs() > RATE_SUM_TOLERANCE {
        return Err(GachaError::RateSumMismatch { sum: total });
    }

    debug!(
        banner = %config.name,
        entries = entries.len(),
        legendary = legendary.len(),
        rare = rare.len(),
        "built draw pool"
    );

    Ok(DrawPool {
        entries,
        rare,
        legendary,
        featured_legendary: featured_legendary.into_iter().next(),
    })
}

/// Marks featured items in the base set, failing on ids that are missing,
/// repeated, or of the wrong tier.
fn flag_featured(base: &mut [Item], featured: &Featured, config: &BannerConfig) -> Result<()> {
    let mut seen: HashSet<ItemId> = HashSet::new();
    let wanted = std::iter::once((featured.legendary, Tier::Legendary))
        .chain(featured.rare.iter().map(|&id| (id, Tier::Rare)));

    for (id, expected) in wanted {
        if !seen.insert(id) {
            return Err(GachaError::DuplicateFeatured(id));
        }
        let item = base
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(GachaError::UnknownFeatured {
                id,
                category: config.category,
            })?;
        if item.tier != expected {
            return Err(GachaError::FeaturedTierMismatch {
                id,
                expected,
                actual: item.tier,
            });
        }
        item.is_featured = true;
    }
    Ok(())
}

fn spread(items: Vec<Item>, total_rate: f64) -> Vec<WeightedItem> {
    let count = items.len() as f64;
    items
        .into_iter()
        .map(|item| WeightedItem {
            item,
            rate: total_rate / count,
        })
        .collect()
}
